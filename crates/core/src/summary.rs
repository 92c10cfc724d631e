use std::fmt;

use crate::error::{DelayError, Result};
use crate::format::{DEFAULT_PRECISION, format_general};

/// Distribution of per-packet offsets, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of offsets summarized.
    pub count: usize,
    pub mean: f64,
    pub median: f64,
}

impl Summary {
    /// Summarize a non-empty set of offsets.
    ///
    /// Returns [`DelayError::NoRecords`] for an empty slice.
    pub fn from_offsets(offsets: &[i64]) -> Result<Self> {
        let mean = mean(offsets).ok_or(DelayError::NoRecords)?;
        let median = median(offsets).ok_or(DelayError::NoRecords)?;
        Ok(Summary {
            count: offsets.len(),
            mean,
            median,
        })
    }
}

/// Two lines, `Mean: <value>` and `Median: <value>`.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mean: {}", format_general(self.mean, DEFAULT_PRECISION))?;
        write!(f, "Median: {}", format_general(self.median, DEFAULT_PRECISION))
    }
}

/// Arithmetic mean, unrounded. `None` for an empty slice.
pub fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    // Wide accumulator: millions of epoch-scale offsets overflow i64.
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    Some(sum as f64 / values.len() as f64)
}

/// Middle value of a sorted copy; the average of the two middle values for
/// an even count. `None` for an empty slice.
pub fn median(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
    } else {
        Some(sorted[mid] as f64)
    }
}
