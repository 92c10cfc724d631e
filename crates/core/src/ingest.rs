//! Reading capture tables into packet records.
//!
//! The table is comma-delimited text: one header line, then one packet per
//! line with nine integer fields in this order:
//!
//! ```text
//! protocol,src-addr,src-port,dst-addr,ssrc,rtp-ts,capture-sec,capture-usec,media-type
//! ```
//!
//! The header is discarded without inspection. Rows that do not parse are
//! dropped silently; the pipeline only ever sees well-formed records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{DelayError, Result};
use crate::record::PacketRecord;

/// Something that yields the ordered raw records for one run.
pub trait RecordSource {
    /// Read every record, in input order.
    fn read_records(&mut self) -> Result<Vec<PacketRecord>>;
}

/// In-memory records, handed over as-is.
impl RecordSource for Vec<PacketRecord> {
    fn read_records(&mut self) -> Result<Vec<PacketRecord>> {
        Ok(std::mem::take(self))
    }
}

/// Parse one data row, or `None` if it is malformed.
pub fn parse_line(line: &str) -> Option<PacketRecord> {
    match line.parse() {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::trace!(error = %e, line, "row skipped");
            None
        }
    }
}

/// Comma-delimited capture table reader.
pub struct CsvSource<R> {
    reader: R,
}

impl CsvSource<BufReader<File>> {
    /// Open a capture table on disk.
    ///
    /// The file handle lives in the returned source and is closed when the
    /// source is dropped.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DelayError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "capture table opened");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> CsvSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> RecordSource for CsvSource<R> {
    fn read_records(&mut self) -> Result<Vec<PacketRecord>> {
        // Lines are split on raw bytes so a non-UTF-8 row is skipped like
        // any other malformed row instead of failing the read.
        let mut lines = (&mut self.reader).split(b'\n');

        if let Some(header) = lines.next() {
            header?;
        }

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for line in lines {
            let line = line?;
            match std::str::from_utf8(&line).ok().and_then(parse_line) {
                Some(record) => records.push(record),
                None => skipped += 1,
            }
        }

        tracing::debug!(accepted = records.len(), skipped, "capture table read");
        Ok(records)
    }
}
