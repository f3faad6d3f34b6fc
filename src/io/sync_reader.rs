//! Synchronous CSV reader with iterator interface
//!
//! Provides an iterator over sales records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Design
//!
//! The SyncReader reads the header row once when it is created and validates
//! that every required column is present, so a file missing e.g. `price` is
//! rejected before a single row is parsed. Rows are then read one at a time
//! and converted by `csv_format::convert_csv_record`, with the source line
//! number attached to any error.
//!
//! ```no_run
//! use rust_sales_analyzer::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("sales.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("{}: {}", record.product, record.price),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors, missing columns) are returned from `new()`
//! - Row errors are yielded as Err variants in the iterator
//! - Collecting into `Result<Vec<_>, _>` stops at the first bad row

use crate::io::csv_format::{convert_csv_record, validate_headers, CsvRecord};
use crate::types::{AnalyzerError, SaleRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::trace;

/// Synchronous CSV reader over sales records
#[derive(Debug)]
pub struct SyncReader<R = File> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    record: StringRecord,
}

impl SyncReader<File> {
    /// Create a new SyncReader from a file path
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if the file was opened and its header is valid
    /// * `Err(AnalyzerError::FileNotFound)` if the path does not exist
    /// * `Err(AnalyzerError::IoError)` if the file could not be read
    /// * `Err(AnalyzerError::ParseError)` if a required column is missing
    pub fn new(path: &Path) -> Result<Self, AnalyzerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AnalyzerError::file_not_found(&path.display().to_string()),
            _ => AnalyzerError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Self::from_reader(file)
    }
}

impl<R: Read> SyncReader<R> {
    /// Create a SyncReader over any byte source
    ///
    /// The CSV reader is configured to trim header names only; cell values
    /// are handed to the converter as-is.
    pub fn from_reader(source: R) -> Result<Self, AnalyzerError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        validate_headers(&headers)?;

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }

    fn read_next(&mut self) -> Result<Option<SaleRecord>, AnalyzerError> {
        if !self.reader.read_record(&mut self.record)? {
            return Ok(None);
        }

        let line = self.record.position().map(|pos| pos.line());
        let csv_record: CsvRecord =
            self.record
                .deserialize(Some(&self.headers))
                .map_err(|e| AnalyzerError::ParseError {
                    line,
                    field: None,
                    message: e.to_string(),
                })?;

        let record = convert_csv_record(csv_record, line)?;
        trace!(?line, product = %record.product, "parsed sales record");
        Ok(Some(record))
    }
}

impl<R: Read> Iterator for SyncReader<R> {
    type Item = Result<SaleRecord, AnalyzerError>;

    /// Get the next sales record
    ///
    /// # Returns
    ///
    /// * `Some(Ok(SaleRecord))` - Successfully parsed record
    /// * `Some(Err(AnalyzerError))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        self.read_next().transpose()
    }
}
