//! Human-readable text report
//!
//! Renders the selected reports as numbered sections between banner lines,
//! with amounts shown as `$1,234.56`. Formatting is presentation only: every
//! amount is printed exactly as the aggregation engine returned it.

use crate::cli::ReportKind;
use crate::core::{round_currency, SalesDataset};
use crate::report::{ReportConfig, ReportWriter};
use crate::types::AnalyzerError;
use rust_decimal::Decimal;
use std::io::Write;
use tracing::warn;

const BANNER_WIDTH: usize = 60;
const TITLE: &str = "SALES DATA ANALYSIS";
const INDENT: &str = "   ";

/// Format a currency amount as `$1,234.56` (`-$1,234.56` when negative)
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_currency(amount);
    let digits = format!("{:.2}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, fraction)
}

/// Text report writer
#[derive(Debug, Clone, Copy)]
pub struct TextReportWriter;

impl TextReportWriter {
    fn write_section(
        &self,
        kind: ReportKind,
        dataset: &SalesDataset,
        config: &ReportConfig,
        output: &mut dyn Write,
    ) -> Result<(), AnalyzerError> {
        match kind {
            ReportKind::Total => {
                let total = dataset.total_sales()?;
                writeln!(output, "Total Sales Revenue: {}", format_currency(total))?;
            }
            ReportKind::ByCategory => {
                let by_category = dataset.sales_by_category()?;
                writeln!(output, "Sales by Category:")?;
                for (category, amount) in by_category {
                    writeln!(output, "{}{}: {}", INDENT, category, format_currency(amount))?;
                }
            }
            ReportKind::ByRegion => {
                let by_region = dataset.sales_by_region()?;
                writeln!(output, "Sales by Region:")?;
                for (region, amount) in by_region {
                    writeln!(output, "{}{}: {}", INDENT, region, format_currency(amount))?;
                }
            }
            ReportKind::TopProducts => {
                let top = dataset.top_products(config.top_n)?;
                writeln!(output, "Top {} Products by Revenue:", config.top_n)?;
                for (rank, entry) in top.iter().enumerate() {
                    writeln!(
                        output,
                        "{}{}. {}: {}",
                        INDENT,
                        rank + 1,
                        entry.product,
                        format_currency(entry.revenue)
                    )?;
                }
            }
            ReportKind::HighValue => {
                let high_value = dataset.filter_high_value_sales(config.high_value_threshold)?;
                writeln!(
                    output,
                    "High Value Sales (>{}): {} transactions",
                    format_currency(config.high_value_threshold),
                    high_value.len()
                )?;
                for sale in high_value {
                    writeln!(
                        output,
                        "{}{}: {}",
                        INDENT,
                        sale.product,
                        format_currency(sale.revenue()?)
                    )?;
                }
            }
            ReportKind::AvgPrice => {
                let averages = dataset.average_price_by_category()?;
                writeln!(output, "Average Price by Category:")?;
                for (category, average) in averages {
                    writeln!(output, "{}{}: {}", INDENT, category, format_currency(average))?;
                }
            }
            ReportKind::QuantityStats => {
                writeln!(output, "Quantity Statistics:")?;
                match dataset.quantity_statistics() {
                    Ok(stats) => {
                        writeln!(output, "{}Total: {}", INDENT, stats.total)?;
                        writeln!(output, "{}Max: {}", INDENT, stats.max)?;
                        writeln!(output, "{}Min: {}", INDENT, stats.min)?;
                        writeln!(output, "{}Count: {}", INDENT, stats.count)?;
                    }
                    Err(e) => {
                        warn!("skipping quantity statistics: {}", e);
                        writeln!(output, "{}No records loaded", INDENT)?;
                    }
                }
            }
        }

        Ok(())
    }
}

impl ReportWriter for TextReportWriter {
    fn write(
        &self,
        dataset: &SalesDataset,
        config: &ReportConfig,
        output: &mut dyn Write,
    ) -> Result<(), AnalyzerError> {
        let banner = "=".repeat(BANNER_WIDTH);

        writeln!(output, "{}", banner)?;
        writeln!(output, "{}", TITLE)?;
        writeln!(output, "{}", banner)?;

        for (index, kind) in config.reports.iter().enumerate() {
            write!(output, "\n{}. ", index + 1)?;
            self.write_section(*kind, dataset, config, output)?;
        }

        writeln!(output, "\n{}", banner)?;
        output.flush()?;
        Ok(())
    }
}
