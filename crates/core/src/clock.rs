//! Timestamp domain conversion.
//!
//! Both timestamp domains are brought to whole milliseconds:
//!
//! - **RTP**: ticks of the media clock. Video uses 90 kHz (RFC 3551 §5), so
//!   90000 ticks are one second.
//! - **Capture**: `timeval`-style seconds plus microseconds.
//!
//! Arithmetic is done in `f64` and the result truncated toward zero, never
//! rounded. Output stays comparable with existing tooling that does the
//! same.

use crate::record::{PacketRecord, TimedRecord};

/// RTP media clock rate, in ticks per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockRate(pub u32);

impl ClockRate {
    /// 90 kHz video clock.
    pub const VIDEO: ClockRate = ClockRate(90_000);

    pub fn ticks_per_second(self) -> u32 {
        self.0
    }
}

impl Default for ClockRate {
    fn default() -> Self {
        Self::VIDEO
    }
}

/// Convert an RTP timestamp to milliseconds, truncating toward zero.
pub fn rtp_to_ms(rtp_ts: i32, clock_rate: ClockRate) -> i64 {
    (f64::from(rtp_ts) / f64::from(clock_rate.ticks_per_second()) * 1000.0) as i64
}

/// Convert a seconds + microseconds capture time to milliseconds,
/// truncating toward zero.
pub fn timeval_to_ms(sec: i32, usec: i32) -> i64 {
    (f64::from(sec) * 1000.0 + f64::from(usec) / 1000.0) as i64
}

/// Attach millisecond timestamps to every record.
pub fn convert_clocks(records: Vec<PacketRecord>, clock_rate: ClockRate) -> Vec<TimedRecord> {
    tracing::debug!(
        records = records.len(),
        clock_rate = clock_rate.ticks_per_second(),
        "converting timestamps"
    );
    records
        .into_iter()
        .map(|packet| TimedRecord {
            packet,
            wall_rtp: rtp_to_ms(packet.rtp_ts, clock_rate),
            capture_ms: timeval_to_ms(packet.capture_sec, packet.capture_usec),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rtp_truncates() {
        assert_eq!(rtp_to_ms(90001, ClockRate::VIDEO), 1000);
        assert_eq!(rtp_to_ms(89999, ClockRate::VIDEO), 999);
        assert_eq!(rtp_to_ms(0, ClockRate::VIDEO), 0);
        assert_eq!(rtp_to_ms(89, ClockRate::VIDEO), 0);
        assert_eq!(rtp_to_ms(180_000, ClockRate::VIDEO), 2000);
    }

    #[test]
    fn rtp_truncates_toward_zero_when_negative() {
        assert_eq!(rtp_to_ms(-90001, ClockRate::VIDEO), -1000);
        assert_eq!(rtp_to_ms(-89, ClockRate::VIDEO), 0);
    }

    #[test]
    fn rtp_full_range() {
        assert_eq!(rtp_to_ms(i32::MAX, ClockRate::VIDEO), 23_860_929);
        assert_eq!(rtp_to_ms(i32::MIN, ClockRate::VIDEO), -23_860_929);
    }

    #[test]
    fn rtp_other_clock_rate() {
        assert_eq!(rtp_to_ms(48_000, ClockRate(48_000)), 1000);
        assert_eq!(rtp_to_ms(47_999, ClockRate(48_000)), 999);
    }

    #[test]
    fn timeval_truncates() {
        assert_eq!(timeval_to_ms(2, 500_000), 2500);
        assert_eq!(timeval_to_ms(1, 999), 1000);
        assert_eq!(timeval_to_ms(1, 999_999), 1999);
        assert_eq!(timeval_to_ms(0, 0), 0);
    }

    #[test]
    fn timeval_epoch_seconds_do_not_overflow() {
        assert_eq!(timeval_to_ms(1_700_000_000, 123_000), 1_700_000_000_123);
    }

    #[test]
    fn convert_fills_both_domains() {
        let packet = PacketRecord {
            ip_proto: 17,
            ip_src: 1,
            src_port: 5004,
            ip_dst: 2,
            ssrc: 3,
            rtp_ts: 45_000,
            capture_sec: 7,
            capture_usec: 250_000,
            media_type: 16,
        };
        let timed = convert_clocks(vec![packet], ClockRate::VIDEO);
        assert_eq!(timed.len(), 1);
        assert_eq!(timed[0].packet, packet);
        assert_eq!(timed[0].wall_rtp, 500);
        assert_eq!(timed[0].capture_ms, 7250);
    }

    #[test]
    fn default_rate_is_video() {
        assert_eq!(ClockRate::default().ticks_per_second(), 90_000);
    }
}
