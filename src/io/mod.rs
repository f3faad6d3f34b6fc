//! I/O module
//!
//! Handles CSV parsing and sample data generation.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (header validation, record conversion)
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `sample` - Fixed ten-row demonstration dataset

pub mod csv_format;
pub mod sample;
pub mod sync_reader;

pub use csv_format::{convert_csv_record, validate_headers, CsvRecord, REQUIRED_COLUMNS};
pub use sample::{sample_records, write_sample, write_sample_csv};
pub use sync_reader::SyncReader;
