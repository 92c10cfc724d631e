//! End-to-end delay computation.
//!
//! Stages run once, in this order, each consuming the previous output:
//!
//! ```text
//! ingest → filter media type → dedup adjacent → sort by RTP ts
//!        → convert clocks → baseline (first 100) → align → summarize
//! ```
//!
//! Deduplication must see capture-table order and the baseline window must
//! see RTP order, so the order is fixed here rather than left to callers.

use std::collections::HashSet;
use std::path::Path;

use crate::baseline::Baseline;
use crate::clock::{ClockRate, convert_clocks};
use crate::error::{DelayError, Result};
use crate::filter::{VIDEO_MEDIA_TYPE, dedup_adjacent, filter_media_type};
use crate::ingest::{CsvSource, RecordSource};
use crate::order::sort_by_rtp_timestamp;
use crate::record::{AlignedRecord, PacketRecord};
use crate::summary::Summary;

/// Parameters of a delay computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayConfig {
    /// Media type code of the stream to analyze.
    pub media_type: i32,
    /// RTP clock rate of that stream.
    pub clock_rate: ClockRate,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            media_type: VIDEO_MEDIA_TYPE,
            clock_rate: ClockRate::VIDEO,
        }
    }
}

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct DelayReport {
    /// Surviving records in RTP timestamp order, fully derived.
    pub records: Vec<AlignedRecord>,
    pub baseline: Baseline,
    pub summary: Summary,
}

/// Run every stage over already-ingested records.
pub fn analyze(records: Vec<PacketRecord>, config: &DelayConfig) -> Result<DelayReport> {
    let records = filter_media_type(records, config.media_type);
    if records.is_empty() {
        return Err(DelayError::NoRecords);
    }

    let records = dedup_adjacent(records);
    if tracing::enabled!(tracing::Level::DEBUG) {
        let flows: HashSet<_> = records.iter().map(PacketRecord::flow_id).collect();
        tracing::debug!(flows = flows.len(), "distinct flows after dedup");
    }

    let records = sort_by_rtp_timestamp(records);
    let timed = convert_clocks(records, config.clock_rate);
    let baseline = Baseline::from_window(&timed)?;
    let records = baseline.align(timed);

    let offsets: Vec<i64> = records.iter().map(|r| r.offset_ms).collect();
    let summary = Summary::from_offsets(&offsets)?;

    tracing::debug!(
        records = summary.count,
        mean = summary.mean,
        median = summary.median,
        "delay computed"
    );

    Ok(DelayReport {
        records,
        baseline,
        summary,
    })
}

/// Read all records from `source`, then [`analyze`] them.
pub fn analyze_source<S: RecordSource>(source: &mut S, config: &DelayConfig) -> Result<DelayReport> {
    let records = source.read_records()?;
    analyze(records, config)
}

/// Open the capture table at `path` and [`analyze`] it.
pub fn analyze_file(path: impl AsRef<Path>, config: &DelayConfig) -> Result<DelayReport> {
    let mut source = CsvSource::open(path)?;
    analyze_source(&mut source, config)
}
