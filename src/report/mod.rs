//! Report output module
//!
//! This module turns aggregation results into output. Writers are selected
//! at runtime from the requested output format, the same way for every
//! report, and only ever format values the aggregation engine has already
//! computed and rounded.

use crate::cli::{OutputFormat, ReportKind};
use crate::core::SalesDataset;
use crate::types::AnalyzerError;
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub mod csv_writer;
pub mod text;

pub use csv_writer::CsvReportWriter;
pub use text::{format_currency, TextReportWriter};

/// Default size of the top-products ranking
pub const DEFAULT_TOP_N: usize = 5;

/// Default high-value revenue threshold
pub const DEFAULT_HIGH_VALUE_THRESHOLD: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Configuration for one report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Reports to produce, in output order, without duplicates
    pub reports: Vec<ReportKind>,

    /// Number of products in the top-products ranking
    pub top_n: usize,

    /// Revenue a single sale must strictly exceed to be listed as high value
    pub high_value_threshold: Decimal,

    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            reports: ReportKind::ALL.to_vec(),
            top_n: DEFAULT_TOP_N,
            high_value_threshold: DEFAULT_HIGH_VALUE_THRESHOLD,
            format: OutputFormat::Text,
        }
    }
}

impl ReportConfig {
    /// Create a report configuration
    ///
    /// An empty report list selects every report. Repeated reports are kept
    /// at their first position only.
    pub fn new(
        reports: Vec<ReportKind>,
        top_n: usize,
        high_value_threshold: Decimal,
        format: OutputFormat,
    ) -> Self {
        let reports = if reports.is_empty() {
            ReportKind::ALL.to_vec()
        } else {
            reports.into_iter().fold(Vec::new(), |mut unique, kind| {
                if !unique.contains(&kind) {
                    unique.push(kind);
                }
                unique
            })
        };

        ReportConfig {
            reports,
            top_n,
            high_value_threshold,
            format,
        }
    }
}

/// Report writer trait
///
/// Each implementation renders the reports named in a `ReportConfig` for a
/// loaded dataset. Writers never recompute or re-round values.
pub trait ReportWriter: Send + Sync {
    /// Write the configured reports for `dataset` to `output`
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the output cannot be written. Quantity statistics
    /// on an empty dataset are not an error here; writers render that case
    /// explicitly instead of inventing min/max values.
    fn write(
        &self,
        dataset: &SalesDataset,
        config: &ReportConfig,
        output: &mut dyn Write,
    ) -> Result<(), AnalyzerError>;
}

/// Create a report writer for the specified output format
pub fn create_writer(format: OutputFormat) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Text => Box::new(TextReportWriter),
        OutputFormat::Csv => Box::new(CsvReportWriter),
    }
}

/// Load `input_path` and write the configured reports to `output`
///
/// The dataset is loaded completely before any output is produced, so a
/// load failure leaves `output` untouched.
pub fn generate_report(
    input_path: &Path,
    config: &ReportConfig,
    output: &mut dyn Write,
) -> Result<(), AnalyzerError> {
    let dataset = SalesDataset::load(input_path)?;
    info!(
        records = dataset.len(),
        reports = config.reports.len(),
        format = ?config.format,
        "generating reports"
    );

    create_writer(config.format).write(&dataset, config, output)
}
