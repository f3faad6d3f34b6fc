//! Sales record types for the Rust Sales Analyzer
//!
//! This module defines the typed representation of one sales transaction
//! as loaded from the input CSV file.

use super::AnalyzerError;
use rust_decimal::Decimal;
use serde::Serialize;

/// Units sold in a single transaction
///
/// Supports quantities from 0 to 4,294,967,295
pub type Quantity = u32;

/// One sales transaction
///
/// Every field is validated once at load time. Records carry no identity
/// beyond their position in the source file, so duplicates are allowed and
/// each one contributes to every aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleRecord {
    /// Product name (not unique across records)
    pub product: String,

    /// Product category label
    pub category: String,

    /// Units sold
    pub quantity: Quantity,

    /// Unit price
    pub price: Decimal,

    /// Sales region label
    pub region: String,
}

impl SaleRecord {
    /// Create a new record from its five fields
    pub fn new(
        product: impl Into<String>,
        category: impl Into<String>,
        quantity: Quantity,
        price: Decimal,
        region: impl Into<String>,
    ) -> Self {
        SaleRecord {
            product: product.into(),
            category: category.into(),
            quantity,
            price,
            region: region.into(),
        }
    }

    /// Revenue of this transaction (quantity * price)
    ///
    /// Computed on demand and never stored. The result is exact; rounding
    /// happens only when an aggregate is reported.
    ///
    /// # Errors
    ///
    /// Returns `AnalyzerError::ArithmeticOverflow` when the product does not
    /// fit in a `Decimal`.
    pub fn revenue(&self) -> Result<Decimal, AnalyzerError> {
        Decimal::from(self.quantity)
            .checked_mul(self.price)
            .ok_or_else(|| AnalyzerError::arithmetic_overflow("revenue"))
    }
}
