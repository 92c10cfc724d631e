//! Media-type filtering and adjacent-duplicate removal.
//!
//! Deduplication only looks at neighbours: two rows are duplicates when they
//! are consecutive and share a [`FlowId`](crate::record::FlowId). Rows of the
//! same flow separated by any other row are both kept. The stage runs before
//! sorting, so "consecutive" means consecutive in capture-table order.

use crate::record::PacketRecord;

/// Media type code of video packets in capture tables.
pub const VIDEO_MEDIA_TYPE: i32 = 16;

/// Keep only records of `media_type`, preserving order.
pub fn filter_media_type(mut records: Vec<PacketRecord>, media_type: i32) -> Vec<PacketRecord> {
    let before = records.len();
    records.retain(|r| r.media_type == media_type);
    tracing::debug!(
        media_type,
        kept = records.len(),
        dropped = before - records.len(),
        "media type filter"
    );
    records
}

/// Collapse each run of consecutive same-flow records to its first record.
pub fn dedup_adjacent(mut records: Vec<PacketRecord>) -> Vec<PacketRecord> {
    let before = records.len();
    records.dedup_by_key(|r| r.flow_id());
    tracing::debug!(
        kept = records.len(),
        dropped = before - records.len(),
        "adjacent duplicates removed"
    );
    records
}
