//! Sample dataset generator
//!
//! Writes the fixed ten-row demonstration file. The loader accepts any
//! conformant file; this one exists so the analyzer can be tried out
//! without preparing data first.

use crate::types::{AnalyzerError, SaleRecord};
use csv::Writer;
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;
use tracing::info;

const SAMPLE_ROWS: [(&str, &str, u32, i64, &str); 10] = [
    ("Laptop", "Electronics", 5, 99999, "North"),
    ("Mouse", "Electronics", 20, 2999, "South"),
    ("Desk", "Furniture", 3, 34999, "East"),
    ("Chair", "Furniture", 8, 19999, "West"),
    ("Monitor", "Electronics", 10, 29999, "North"),
    ("Keyboard", "Electronics", 15, 7999, "South"),
    ("Bookshelf", "Furniture", 4, 14999, "East"),
    ("Lamp", "Furniture", 12, 4999, "West"),
    ("Tablet", "Electronics", 7, 49999, "North"),
    ("Webcam", "Electronics", 25, 8999, "South"),
];

/// The sample dataset as typed records, in file order
pub fn sample_records() -> Vec<SaleRecord> {
    SAMPLE_ROWS
        .iter()
        .map(|&(product, category, quantity, cents, region)| {
            SaleRecord::new(product, category, quantity, Decimal::new(cents, 2), region)
        })
        .collect()
}

/// Serialize the sample dataset as CSV into `output`
///
/// The header row is `product,category,quantity,price,region`.
pub fn write_sample<W: Write>(output: W) -> Result<(), AnalyzerError> {
    let mut writer = Writer::from_writer(output);

    for record in sample_records() {
        writer.serialize(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Create (or overwrite) the sample CSV file at `path`
pub fn write_sample_csv(path: &Path) -> Result<(), AnalyzerError> {
    let file = std::fs::File::create(path).map_err(|e| AnalyzerError::IoError {
        message: format!("Failed to create file '{}': {}", path.display(), e),
    })?;

    write_sample(file)?;
    info!(path = %path.display(), "sample CSV file created");
    Ok(())
}
