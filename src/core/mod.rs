//! Core business logic module
//!
//! This module contains the report computation components:
//! - `aggregation` - Pure report functions over a slice of records
//! - `dataset` - The immutable loaded dataset the reports run against

pub mod aggregation;
pub mod dataset;

pub use aggregation::round_currency;
pub use dataset::SalesDataset;
