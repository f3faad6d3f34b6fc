//! CSV format handling for sales records
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Header validation (columns are looked up by name, in any order)
//! - Conversion from CSV records to typed `SaleRecord`s
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{AnalyzerError, Quantity, SaleRecord};
use csv::StringRecord;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Columns every input file must name in its header row
pub const REQUIRED_COLUMNS: [&str; 5] = ["product", "category", "quantity", "price", "region"];

/// CSV record structure for deserialization
///
/// All cells are read as text so that conversion failures can be reported
/// with the offending field name and value.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub product: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    pub region: String,
}

/// Check that the header row names all required columns
///
/// Extra columns are allowed and ignored. Column order is irrelevant.
///
/// # Errors
///
/// Returns a ParseError naming the first required column that is missing.
pub fn validate_headers(headers: &StringRecord) -> Result<(), AnalyzerError> {
    match REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        Some(missing) => Err(AnalyzerError::missing_column(missing)),
        None => Ok(()),
    }
}

/// Convert a CsvRecord to a SaleRecord
///
/// This function:
/// - Requires `product`, `category` and `region` to be non-blank (kept unchanged)
/// - Parses `quantity` as a non-negative integer
/// - Parses `price` as a non-negative decimal, plain or in scientific notation
/// - Rejects a row whose revenue (`quantity * price`) does not fit in a `Decimal`
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
/// * `line` - Source line of the record, used for error context
pub fn convert_csv_record(
    csv_record: CsvRecord,
    line: Option<u64>,
) -> Result<SaleRecord, AnalyzerError> {
    let CsvRecord {
        product,
        category,
        quantity,
        price,
        region,
    } = csv_record;

    for (field, value) in [
        ("product", &product),
        ("category", &category),
        ("region", &region),
    ] {
        if value.trim().is_empty() {
            return Err(AnalyzerError::missing_field(line, field));
        }
    }

    let quantity = parse_quantity(&quantity, line)?;
    let unit_price = parse_price(&price, line)?;

    let record = SaleRecord {
        product,
        category,
        quantity,
        price: unit_price,
        region,
    };

    if record.revenue().is_err() {
        return Err(AnalyzerError::invalid_field(
            line,
            "price",
            &price,
            "quantity * price within the decimal range",
        ));
    }

    Ok(record)
}

fn parse_quantity(raw: &str, line: Option<u64>) -> Result<Quantity, AnalyzerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnalyzerError::missing_field(line, "quantity"));
    }

    Quantity::from_str(trimmed).map_err(|_| {
        AnalyzerError::invalid_field(line, "quantity", raw, "a non-negative integer")
    })
}

fn parse_price(raw: &str, line: Option<u64>) -> Result<Decimal, AnalyzerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnalyzerError::missing_field(line, "price"));
    }

    match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        Ok(price) if price >= Decimal::ZERO => Ok(price),
        _ => Err(AnalyzerError::invalid_field(
            line,
            "price",
            raw,
            "a non-negative decimal",
        )),
    }
}
