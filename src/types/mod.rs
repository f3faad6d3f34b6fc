//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: The typed sales record
//! - `report`: Result types produced by the aggregation engine
//! - `error`: Error types for the sales analyzer

pub mod error;
pub mod record;
pub mod report;

pub use error::AnalyzerError;
pub use record::{Quantity, SaleRecord};
pub use report::{ProductRevenue, QuantityStatistics};
