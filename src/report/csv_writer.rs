//! Machine-readable CSV report
//!
//! Emits one `report,key,value` row per reported value. Amounts are written
//! with two decimals and no currency formatting.

use crate::cli::ReportKind;
use crate::core::{round_currency, SalesDataset};
use crate::report::{ReportConfig, ReportWriter};
use crate::types::AnalyzerError;
use csv::Writer;
use rust_decimal::Decimal;
use std::io::Write;
use tracing::warn;

/// CSV report writer
#[derive(Debug, Clone, Copy)]
pub struct CsvReportWriter;

fn amount(value: Decimal) -> String {
    format!("{:.2}", value)
}

impl ReportWriter for CsvReportWriter {
    fn write(
        &self,
        dataset: &SalesDataset,
        config: &ReportConfig,
        output: &mut dyn Write,
    ) -> Result<(), AnalyzerError> {
        let mut writer = Writer::from_writer(output);
        writer.write_record(["report", "key", "value"])?;

        for kind in &config.reports {
            let name = kind.name();
            let report = name.as_str();
            match kind {
                ReportKind::Total => {
                    writer.write_record([report, "", amount(dataset.total_sales()?).as_str()])?;
                }
                ReportKind::ByCategory => {
                    for (category, total) in dataset.sales_by_category()? {
                        writer.write_record([report, category.as_str(), amount(total).as_str()])?;
                    }
                }
                ReportKind::ByRegion => {
                    for (region, total) in dataset.sales_by_region()? {
                        writer.write_record([report, region.as_str(), amount(total).as_str()])?;
                    }
                }
                ReportKind::TopProducts => {
                    for entry in dataset.top_products(config.top_n)? {
                        writer.write_record([
                            report,
                            entry.product.as_str(),
                            amount(entry.revenue).as_str(),
                        ])?;
                    }
                }
                ReportKind::HighValue => {
                    for sale in dataset.filter_high_value_sales(config.high_value_threshold)? {
                        let revenue = amount(round_currency(sale.revenue()?));
                        writer.write_record([report, sale.product.as_str(), revenue.as_str()])?;
                    }
                }
                ReportKind::AvgPrice => {
                    for (category, average) in dataset.average_price_by_category()? {
                        writer.write_record([report, category.as_str(), amount(average).as_str()])?;
                    }
                }
                ReportKind::QuantityStats => match dataset.quantity_statistics() {
                    Ok(stats) => {
                        writer.write_record([report, "total", stats.total.to_string().as_str()])?;
                        writer.write_record([report, "max", stats.max.to_string().as_str()])?;
                        writer.write_record([report, "min", stats.min.to_string().as_str()])?;
                        writer.write_record([report, "count", stats.count.to_string().as_str()])?;
                    }
                    Err(e) => {
                        warn!("writing only count and total for quantity statistics: {}", e);
                        writer.write_record([report, "total", "0"])?;
                        writer.write_record([report, "count", "0"])?;
                    }
                },
            }
        }

        writer.flush()?;
        Ok(())
    }
}
