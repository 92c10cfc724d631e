//! Per-packet records and the derived-field records built by later stages.
//!
//! A record moves through three shapes as the pipeline runs:
//!
//! ```text
//! PacketRecord ──convert_clocks──▶ TimedRecord ──Baseline::align──▶ AlignedRecord
//!  9 raw fields                    + wall_rtp        + baseline_rtp
//!                                  + capture_ms      + baseline_capture
//!                                                    + offset_ms
//! ```
//!
//! Each stage consumes the previous sequence and returns a new one, so no
//! record is ever seen half-populated.

use std::str::FromStr;

use crate::error::{ParseErrorKind, RecordParseError};

/// Number of comma-separated integer fields in a data row.
pub const FIELD_COUNT: usize = 9;

/// One captured RTP packet, as ingested.
///
/// Fields are 32-bit signed, matching the width of the capture table. The
/// RTP timestamp is an unsigned 32-bit quantity on the wire (RFC 3550 §5.1)
/// but is stored and compared signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PacketRecord {
    pub ip_proto: i32,
    pub ip_src: i32,
    pub src_port: i32,
    pub ip_dst: i32,
    /// Synchronization source identifier (RFC 3550 §8).
    pub ssrc: i32,
    pub rtp_ts: i32,
    /// Capture time, whole seconds.
    pub capture_sec: i32,
    /// Capture time, microseconds within the second.
    pub capture_usec: i32,
    pub media_type: i32,
}

impl PacketRecord {
    /// The key used to detect repeated rows of the same flow.
    pub fn flow_id(&self) -> FlowId {
        FlowId {
            ip_proto: self.ip_proto,
            ip_src: self.ip_src,
            src_port: self.src_port,
            ip_dst: self.ip_dst,
            ssrc: self.ssrc,
        }
    }
}

/// Parses one data row: nine comma-separated decimal integers.
///
/// Values up to `u32::MAX` are accepted and wrap into the signed field, so
/// addresses and timestamps written unsigned survive ingestion.
impl FromStr for PacketRecord {
    type Err = RecordParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != FIELD_COUNT {
            return Err(RecordParseError {
                kind: ParseErrorKind::FieldCount(fields.len()),
            });
        }

        let mut values = [0i32; FIELD_COUNT];
        for (slot, field) in values.iter_mut().zip(&fields) {
            *slot = parse_field(field)?;
        }

        let [
            ip_proto,
            ip_src,
            src_port,
            ip_dst,
            ssrc,
            rtp_ts,
            capture_sec,
            capture_usec,
            media_type,
        ] = values;

        Ok(PacketRecord {
            ip_proto,
            ip_src,
            src_port,
            ip_dst,
            ssrc,
            rtp_ts,
            capture_sec,
            capture_usec,
            media_type,
        })
    }
}

fn parse_field(field: &str) -> Result<i32, RecordParseError> {
    let invalid = RecordParseError {
        kind: ParseErrorKind::InvalidInteger,
    };
    let value: i64 = field.trim().parse().map_err(|_| invalid.clone())?;
    if value < i64::from(i32::MIN) || value > i64::from(u32::MAX) {
        return Err(invalid);
    }
    // Keep the low 32 bits: 0x8000_0000..=0xFFFF_FFFF become negative.
    Ok(value as i32)
}

/// Protocol, source address/port, destination address and SSRC.
///
/// Only used to collapse adjacent duplicates; streams are never partitioned
/// by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlowId {
    pub ip_proto: i32,
    pub ip_src: i32,
    pub src_port: i32,
    pub ip_dst: i32,
    pub ssrc: i32,
}

/// A packet with both timestamps expressed in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedRecord {
    pub packet: PacketRecord,
    /// RTP timestamp converted at the configured clock rate.
    pub wall_rtp: i64,
    /// Capture seconds + microseconds.
    pub capture_ms: i64,
}

/// A packet with both series shifted to the shared baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedRecord {
    pub timed: TimedRecord,
    pub baseline_rtp: i64,
    pub baseline_capture: i64,
    /// `baseline_capture - baseline_rtp`.
    pub offset_ms: i64,
}
