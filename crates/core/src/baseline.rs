//! Baseline alignment.
//!
//! The RTP and capture series run on independent clocks with an arbitrary
//! constant distance between them. Averaging a leading window of each
//! series and subtracting the average puts both on a common zero, so the
//! per-packet difference that remains is drift and jitter only.

use crate::error::{DelayError, Result};
use crate::record::{AlignedRecord, TimedRecord};

/// Number of leading records averaged for the baseline.
pub const BASELINE_WINDOW: usize = 100;

/// Leading-window averages of both series, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Baseline {
    pub rtp_avg: i64,
    pub capture_avg: i64,
}

impl Baseline {
    /// Average the first [`BASELINE_WINDOW`] records.
    ///
    /// Records past the window never affect the result. Division truncates
    /// toward zero. Fails with [`DelayError::InsufficientData`] when the
    /// window cannot be filled.
    pub fn from_window(records: &[TimedRecord]) -> Result<Self> {
        let window = records
            .get(..BASELINE_WINDOW)
            .ok_or(DelayError::InsufficientData {
                required: BASELINE_WINDOW,
                available: records.len(),
            })?;

        let (rtp_sum, capture_sum) = window.iter().fold((0i64, 0i64), |(rtp, capture), r| {
            (rtp + r.wall_rtp, capture + r.capture_ms)
        });

        let baseline = Baseline {
            rtp_avg: rtp_sum / BASELINE_WINDOW as i64,
            capture_avg: capture_sum / BASELINE_WINDOW as i64,
        };
        tracing::debug!(
            rtp_avg = baseline.rtp_avg,
            capture_avg = baseline.capture_avg,
            "baseline computed"
        );
        Ok(baseline)
    }

    /// Shift every record onto the baseline and compute its offset.
    pub fn align(&self, records: Vec<TimedRecord>) -> Vec<AlignedRecord> {
        records
            .into_iter()
            .map(|timed| {
                let baseline_rtp = timed.wall_rtp - self.rtp_avg;
                let baseline_capture = timed.capture_ms - self.capture_avg;
                AlignedRecord {
                    timed,
                    baseline_rtp,
                    baseline_capture,
                    offset_ms: baseline_capture - baseline_rtp,
                }
            })
            .collect()
    }
}
