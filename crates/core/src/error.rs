//! Error types for the RTP delay calculator.

use std::fmt;
use std::path::PathBuf;

/// Errors that can end a delay computation.
///
/// Variants map to specific failure modes across the pipeline:
///
/// - **Ingestion**: [`FileOpen`](Self::FileOpen), [`Io`](Self::Io).
/// - **Baseline**: [`InsufficientData`](Self::InsufficientData), the leading
///   window cannot be filled.
/// - **Summary**: [`NoRecords`](Self::NoRecords), mean and median are
///   undefined over nothing.
///
/// Malformed data rows are not represented here: ingestion drops them and
/// carries on (see [`RecordParseError`]).
#[derive(Debug, thiserror::Error)]
pub enum DelayError {
    /// The input table could not be opened.
    #[error("error opening {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an already opened input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fewer records survived filtering than the baseline window needs.
    #[error("insufficient data: baseline window needs {required} records, got {available}")]
    InsufficientData { required: usize, available: usize },

    /// No record survived filtering.
    #[error("no records of the target media type")]
    NoRecords,
}

/// Why a single data row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid record: {kind}")]
pub struct RecordParseError {
    pub kind: ParseErrorKind,
}

/// Specific kind of row parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The row did not split into exactly nine comma-separated fields.
    FieldCount(usize),
    /// A field was not a decimal integer that fits in 32 bits.
    InvalidInteger,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount(n) => write!(f, "expected 9 fields, found {n}"),
            Self::InvalidInteger => write!(f, "field is not a 32-bit integer"),
        }
    }
}

/// Convenience alias for `Result<T, DelayError>`.
pub type Result<T> = std::result::Result<T, DelayError>;
