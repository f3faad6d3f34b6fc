//! Loaded sales dataset
//!
//! `SalesDataset` is the immutable in-memory sequence every report reads
//! from. It is created once by [`SalesDataset::load`]; reloading means
//! loading a fresh value that replaces the old one. There is no way to
//! mutate the records of an existing dataset.

use crate::core::aggregation;
use crate::io::sync_reader::SyncReader;
use crate::types::{AnalyzerError, ProductRevenue, QuantityStatistics, SaleRecord};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// An ordered, immutable sequence of sales records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesDataset {
    records: Vec<SaleRecord>,
}

impl SalesDataset {
    /// Wrap records that are already typed (e.g. the sample dataset)
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        SalesDataset { records }
    }

    /// Load every record from the CSV file at `path`
    ///
    /// The load is all-or-nothing: the first missing column, short row or
    /// unparseable number aborts it and no dataset is returned. A row whose
    /// revenue does not fit in a `Decimal` is rejected the same way.
    ///
    /// # Errors
    ///
    /// - `FileNotFound` / `IoError` if the file cannot be opened or read
    /// - `ParseError` for any header or row problem, with line and field context
    pub fn load(path: &Path) -> Result<Self, AnalyzerError> {
        let records = SyncReader::new(path)?.collect::<Result<Vec<_>, _>>()?;
        debug!(path = %path.display(), records = records.len(), "loaded sales dataset");
        Ok(Self::from_records(records))
    }

    /// Load every record from an arbitrary CSV byte source
    pub fn from_reader<R: Read>(source: R) -> Result<Self, AnalyzerError> {
        let records = SyncReader::from_reader(source)?.collect::<Result<Vec<_>, _>>()?;
        debug!(records = records.len(), "loaded sales dataset from reader");
        Ok(Self::from_records(records))
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// See [`aggregation::total_sales`]
    pub fn total_sales(&self) -> Result<Decimal, AnalyzerError> {
        aggregation::total_sales(&self.records)
    }

    /// See [`aggregation::sales_by_category`]
    pub fn sales_by_category(&self) -> Result<BTreeMap<String, Decimal>, AnalyzerError> {
        aggregation::sales_by_category(&self.records)
    }

    /// See [`aggregation::sales_by_region`]
    pub fn sales_by_region(&self) -> Result<BTreeMap<String, Decimal>, AnalyzerError> {
        aggregation::sales_by_region(&self.records)
    }

    /// See [`aggregation::top_products`]
    pub fn top_products(&self, n: usize) -> Result<Vec<ProductRevenue>, AnalyzerError> {
        aggregation::top_products(&self.records, n)
    }

    /// See [`aggregation::filter_high_value_sales`]
    pub fn filter_high_value_sales(
        &self,
        threshold: Decimal,
    ) -> Result<Vec<&SaleRecord>, AnalyzerError> {
        aggregation::filter_high_value_sales(&self.records, threshold)
    }

    /// See [`aggregation::average_price_by_category`]
    pub fn average_price_by_category(
        &self,
    ) -> Result<BTreeMap<String, Decimal>, AnalyzerError> {
        aggregation::average_price_by_category(&self.records)
    }

    /// See [`aggregation::quantity_statistics`]
    pub fn quantity_statistics(&self) -> Result<QuantityStatistics, AnalyzerError> {
        aggregation::quantity_statistics(&self.records)
    }
}
