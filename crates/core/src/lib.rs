//! Clock offset between RTP media timestamps and capture wall-clock time.
//!
//! Given a capture table of RTP packets, [`analyze_file`] isolates one media
//! type, converts RTP and capture timestamps to milliseconds, aligns both
//! series on the average of their first 100 packets and summarizes the
//! per-packet offset between them.
//!
//! ```no_run
//! use rtp_delay::{DelayConfig, analyze_file};
//!
//! let report = analyze_file("capture.csv", &DelayConfig::default())?;
//! println!("{}", report.summary);
//! # Ok::<(), rtp_delay::DelayError>(())
//! ```

pub mod baseline;
pub mod clock;
pub mod error;
pub mod filter;
pub mod format;
pub mod ingest;
pub mod order;
pub mod pipeline;
pub mod record;
pub mod summary;

pub use baseline::{BASELINE_WINDOW, Baseline};
pub use clock::ClockRate;
pub use error::{DelayError, Result};
pub use ingest::{CsvSource, RecordSource};
pub use pipeline::{DelayConfig, DelayReport, analyze, analyze_file, analyze_source};
pub use record::{AlignedRecord, FlowId, PacketRecord, TimedRecord};
pub use summary::Summary;
