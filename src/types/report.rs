//! Result types produced by the aggregation engine

use rust_decimal::Decimal;
use serde::Serialize;

/// Total revenue of one distinct product, as ranked by `top_products`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRevenue {
    pub product: String,

    /// Summed revenue, rounded to two decimal places
    pub revenue: Decimal,
}

impl ProductRevenue {
    pub fn new(product: impl Into<String>, revenue: Decimal) -> Self {
        ProductRevenue {
            product: product.into(),
            revenue,
        }
    }
}

/// Quantity statistics over a non-empty record sequence
///
/// Only ever built from at least one record, so `min` and `max` are always
/// real observed quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuantityStatistics {
    /// Sum of all quantities
    pub total: u64,

    /// Largest single quantity
    pub max: u32,

    /// Smallest single quantity
    pub min: u32,

    /// Number of records
    pub count: usize,
}
