use crate::report::ReportConfig;
use clap::{ArgAction, Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Compute sales reports from a CSV file
#[derive(Parser, Debug)]
#[command(name = "sales-analyzer")]
#[command(about = "Compute sales reports from a CSV file", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing sales records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Write the ten-row sample dataset to INPUT before analyzing it
    #[arg(long = "generate-sample", help = "Write the sample dataset to INPUT first")]
    pub generate_sample: bool,

    /// Reports to produce, in order
    #[arg(
        long = "report",
        value_name = "REPORT",
        value_delimiter = ',',
        help = "Report to include (repeatable or comma separated; default: all)"
    )]
    pub reports: Vec<ReportKind>,

    /// Number of products in the top-products ranking
    #[arg(
        long = "top",
        value_name = "N",
        help = "Number of products to rank (default: 5)"
    )]
    pub top_n: Option<usize>,

    /// Revenue a single sale must exceed to count as high value
    #[arg(
        long = "threshold",
        value_name = "AMOUNT",
        help = "High-value revenue threshold (default: 1000)"
    )]
    pub threshold: Option<Decimal>,

    /// Output format
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "text",
        help = "Output format: 'text' for a readable report or 'csv' for report,key,value rows"
    )]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Reports the analyzer can produce
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    Total,
    ByCategory,
    ByRegion,
    TopProducts,
    HighValue,
    AvgPrice,
    QuantityStats,
}

impl ReportKind {
    /// Every report, in the canonical order
    pub const ALL: [ReportKind; 7] = [
        ReportKind::Total,
        ReportKind::ByCategory,
        ReportKind::ByRegion,
        ReportKind::TopProducts,
        ReportKind::HighValue,
        ReportKind::AvgPrice,
        ReportKind::QuantityStats,
    ];

    /// Name used on the command line and in CSV output
    pub fn name(self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default()
    }
}

/// Available output formats for reports
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
}

impl CliArgs {
    /// Create a ReportConfig from CLI arguments
    ///
    /// Options that were not given fall back to the `ReportConfig` defaults.
    pub fn to_report_config(&self) -> ReportConfig {
        let default = ReportConfig::default();
        ReportConfig::new(
            self.reports.clone(),
            self.top_n.unwrap_or(default.top_n),
            self.threshold.unwrap_or(default.high_value_threshold),
            self.format,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_format(&["program", "sales.csv"], OutputFormat::Text)]
    #[case::explicit_text(&["program", "--format", "text", "sales.csv"], OutputFormat::Text)]
    #[case::explicit_csv(&["program", "--format", "csv", "sales.csv"], OutputFormat::Csv)]
    fn test_format_parsing(#[case] args: &[&str], #[case] expected: OutputFormat) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.format, expected);
    }

    #[rstest]
    #[case::none(&["program", "sales.csv"], vec![])]
    #[case::single(&["program", "--report", "total", "sales.csv"], vec![ReportKind::Total])]
    #[case::repeated(
        &["program", "--report", "top-products", "--report", "by-region", "sales.csv"],
        vec![ReportKind::TopProducts, ReportKind::ByRegion]
    )]
    #[case::comma_separated(
        &["program", "--report", "avg-price,quantity-stats", "sales.csv"],
        vec![ReportKind::AvgPrice, ReportKind::QuantityStats]
    )]
    fn test_report_parsing(#[case] args: &[&str], #[case] expected: Vec<ReportKind>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.reports, expected);
    }

    #[rstest]
    #[case::no_options(&["program", "sales.csv"], None, None, false)]
    #[case::top(&["program", "--top", "3", "sales.csv"], Some(3), None, false)]
    #[case::threshold(&["program", "--threshold", "250.50", "sales.csv"], None, Some(Decimal::new(25050, 2)), false)]
    #[case::generate(&["program", "--generate-sample", "sales.csv"], None, None, true)]
    fn test_config_options(
        #[case] args: &[&str],
        #[case] top_n: Option<usize>,
        #[case] threshold: Option<Decimal>,
        #[case] generate_sample: bool,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.top_n, top_n);
        assert_eq!(parsed.threshold, threshold);
        assert_eq!(parsed.generate_sample, generate_sample);
    }

    #[rstest]
    #[case::quiet(&["program", "sales.csv"], 0)]
    #[case::verbose(&["program", "-v", "sales.csv"], 1)]
    #[case::very_verbose(&["program", "-vv", "sales.csv"], 2)]
    fn test_verbosity(#[case] args: &[&str], #[case] expected: u8) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.verbose, expected);
    }

    #[rstest]
    #[case::all_defaults(&["program", "sales.csv"], 5, Decimal::new(1000, 0), ReportKind::ALL.len())]
    #[case::custom(
        &["program", "--top", "2", "--threshold", "99.5", "--report", "total", "sales.csv"],
        2,
        Decimal::new(995, 1),
        1
    )]
    fn test_report_config_conversion(
        #[case] args: &[&str],
        #[case] expected_top_n: usize,
        #[case] expected_threshold: Decimal,
        #[case] expected_reports: usize,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_report_config();

        assert_eq!(config.top_n, expected_top_n);
        assert_eq!(config.high_value_threshold, expected_threshold);
        assert_eq!(config.reports.len(), expected_reports);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_format(&["program", "--format", "xml", "sales.csv"])]
    #[case::invalid_report(&["program", "--report", "median", "sales.csv"])]
    #[case::negative_top(&["program", "--top", "-1", "sales.csv"])]
    #[case::non_numeric_threshold(&["program", "--threshold", "lots", "sales.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }

    #[rstest]
    #[case::total(ReportKind::Total, "total")]
    #[case::by_category(ReportKind::ByCategory, "by-category")]
    #[case::by_region(ReportKind::ByRegion, "by-region")]
    #[case::top_products(ReportKind::TopProducts, "top-products")]
    #[case::high_value(ReportKind::HighValue, "high-value")]
    #[case::avg_price(ReportKind::AvgPrice, "avg-price")]
    #[case::quantity_stats(ReportKind::QuantityStats, "quantity-stats")]
    fn test_report_kind_name(#[case] kind: ReportKind, #[case] expected: &str) {
        assert_eq!(kind.name(), expected);
        assert_eq!(ReportKind::from_str(expected, false), Ok(kind));
    }
}
