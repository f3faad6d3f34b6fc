//! Rust Sales Analyzer Library
//! # Overview
//!
//! This library loads sales records from a CSV file into an immutable
//! in-memory dataset and computes a fixed set of aggregate reports over it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (SaleRecord, report results, errors)
//! - [`cli`] - CLI arguments parsing and log setup
//! - [`io`] - CSV loading and the sample dataset generator
//! - [`core`] - Report computation:
//!   - [`core::aggregation`] - Pure report functions over a slice of records
//!   - [`core::dataset`] - The loaded, immutable dataset
//! - [`report`] - Text and CSV rendering of report results
//!
//! # Reports
//!
//! - **Total sales**: Sum of quantity * price over every record
//! - **Sales by category / region**: Revenue per distinct key
//! - **Top products**: The N highest-revenue products, descending
//! - **High-value sales**: Records whose revenue exceeds a threshold
//! - **Average price by category**: Mean unit price per category
//! - **Quantity statistics**: Total, max, min and count of quantities
//!
//! All currency aggregates are rounded half-up to two decimal places.
//!
//! ```no_run
//! use rust_sales_analyzer::SalesDataset;
//! use std::path::Path;
//!
//! let dataset = SalesDataset::load(Path::new("sales.csv")).unwrap();
//! println!("Total: {}", dataset.total_sales().unwrap());
//! for entry in dataset.top_products(3).unwrap() {
//!     println!("{}: {}", entry.product, entry.revenue);
//! }
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod report;
pub mod types;

pub use crate::core::{aggregation, SalesDataset};
pub use report::{generate_report, ReportConfig};
pub use types::{AnalyzerError, ProductRevenue, Quantity, QuantityStatistics, SaleRecord};
