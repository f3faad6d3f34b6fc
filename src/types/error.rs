//! Error types for the Rust Sales Analyzer
//!
//! This module defines all error types that can occur while loading sales
//! data and computing reports. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File Errors**: File not found, permission denied, failed writes
//! - **Parse Errors**: Missing columns, malformed rows, non-numeric values
//! - **Empty Input Errors**: Statistics that are undefined on an empty dataset
//! - **Arithmetic Errors**: Revenue or sums that exceed the `Decimal` range
//!
//! Every error is fatal for the operation that raised it. A failed load
//! produces no dataset, so no report can run against partial data.

use thiserror::Error;

/// Main error type for the sales analyzer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzerError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A header or row could not be converted into a typed record
    ///
    /// Aborts the whole load. `line` is the 1-based line in the source file
    /// and `field` names the column involved, when either is known.
    #[error(
        "CSV parse error{}{}: {message}",
        line.map(|l| format!(" at line {}", l)).unwrap_or_default(),
        field.as_ref().map(|f| format!(" in field '{}'", f)).unwrap_or_default()
    )]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Column name involved (if available)
        field: Option<String>,
        /// Description of the parsing error
        message: String,
    },

    /// A statistic that needs at least one record was asked of an empty dataset
    #[error("Cannot compute {operation} on an empty dataset")]
    EmptyInput {
        /// Operation that required a non-empty input
        operation: String,
    },

    /// A revenue product or running sum exceeded the `Decimal` range
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },
}

impl From<std::io::Error> for AnalyzerError {
    fn from(error: std::io::Error) -> Self {
        AnalyzerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AnalyzerError {
    fn from(error: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io_error) = error.kind() {
            return AnalyzerError::IoError {
                message: io_error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        AnalyzerError::ParseError {
            line,
            field: None,
            message: error.to_string(),
        }
    }
}

impl AnalyzerError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        AnalyzerError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a ParseError for a required column absent from the header row
    pub fn missing_column(column: &str) -> Self {
        AnalyzerError::ParseError {
            line: Some(1),
            field: Some(column.to_string()),
            message: "missing required column".to_string(),
        }
    }

    /// Create a ParseError for a required cell that is empty
    pub fn missing_field(line: Option<u64>, field: &str) -> Self {
        AnalyzerError::ParseError {
            line,
            field: Some(field.to_string()),
            message: "value is required".to_string(),
        }
    }

    /// Create a ParseError for a cell that could not be converted
    pub fn invalid_field(line: Option<u64>, field: &str, value: &str, expected: &str) -> Self {
        AnalyzerError::ParseError {
            line,
            field: Some(field.to_string()),
            message: format!("invalid value '{}', expected {}", value, expected),
        }
    }

    /// Create an EmptyInput error
    pub fn empty_input(operation: &str) -> Self {
        AnalyzerError::EmptyInput {
            operation: operation.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        AnalyzerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }
}
