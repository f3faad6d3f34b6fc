//! Aggregation engine
//!
//! Pure report functions over a borrowed slice of sales records. None of
//! them mutate their input, and each is deterministic for a given slice.
//!
//! # Rounding
//!
//! Every reported currency value is rounded once, to exactly two decimal
//! places, half away from zero (round-half-up for the non-negative amounts
//! this crate deals in). Intermediate sums are exact `Decimal` arithmetic.
//!
//! # Grouping
//!
//! Grouped reports accumulate into a `BTreeMap`, so results iterate in
//! ascending key order. Only the per-key totals are part of the contract.

use crate::types::{AnalyzerError, ProductRevenue, QuantityStatistics, SaleRecord};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

/// Decimal places kept by every currency aggregate
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Round a currency amount to two decimal places, half away from zero
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Sum revenue per key, returning exact (unrounded) totals
fn group_revenue<'a, F>(
    records: &'a [SaleRecord],
    key: F,
    operation: &str,
) -> Result<BTreeMap<&'a str, Decimal>, AnalyzerError>
where
    F: Fn(&'a SaleRecord) -> &'a str,
{
    let mut totals = BTreeMap::new();

    for record in records {
        let total = totals.entry(key(record)).or_insert(Decimal::ZERO);
        *total = total
            .checked_add(record.revenue()?)
            .ok_or_else(|| AnalyzerError::arithmetic_overflow(operation))?;
    }

    Ok(totals)
}

fn rounded_totals(totals: BTreeMap<&str, Decimal>) -> BTreeMap<String, Decimal> {
    totals
        .into_iter()
        .map(|(key, total)| (key.to_string(), round_currency(total)))
        .collect()
}

/// Total revenue over all records
///
/// An empty slice yields zero.
///
/// # Errors
///
/// Returns `AnalyzerError::ArithmeticOverflow` when a revenue or the running
/// total leaves the `Decimal` range.
pub fn total_sales(records: &[SaleRecord]) -> Result<Decimal, AnalyzerError> {
    let mut total = Decimal::ZERO;

    for record in records {
        total = total
            .checked_add(record.revenue()?)
            .ok_or_else(|| AnalyzerError::arithmetic_overflow("total sales"))?;
    }

    Ok(round_currency(total))
}

/// Revenue per distinct category
pub fn sales_by_category(
    records: &[SaleRecord],
) -> Result<BTreeMap<String, Decimal>, AnalyzerError> {
    group_revenue(records, |r| r.category.as_str(), "sales by category").map(rounded_totals)
}

/// Revenue per distinct region
pub fn sales_by_region(
    records: &[SaleRecord],
) -> Result<BTreeMap<String, Decimal>, AnalyzerError> {
    group_revenue(records, |r| r.region.as_str(), "sales by region").map(rounded_totals)
}

/// The `n` distinct products with the highest summed revenue
///
/// Products are ranked by their rounded totals, highest first. The sort is
/// stable over name-ordered groups, so tied products keep ascending name
/// order. `n == 0` yields an empty ranking; `n` larger than the number of
/// products yields all of them.
pub fn top_products(
    records: &[SaleRecord],
    n: usize,
) -> Result<Vec<ProductRevenue>, AnalyzerError> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let totals = group_revenue(records, |r| r.product.as_str(), "top products")?;
    let mut ranking: Vec<ProductRevenue> = rounded_totals(totals)
        .into_iter()
        .map(|(product, revenue)| ProductRevenue { product, revenue })
        .collect();

    ranking.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    ranking.truncate(n);
    Ok(ranking)
}

/// Records whose revenue is strictly greater than `threshold`
///
/// Relative order is preserved. Revenue is compared at full precision.
pub fn filter_high_value_sales(
    records: &[SaleRecord],
    threshold: Decimal,
) -> Result<Vec<&SaleRecord>, AnalyzerError> {
    records
        .iter()
        .filter_map(|record| match record.revenue() {
            Ok(revenue) if revenue > threshold => Some(Ok(record)),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
        .collect()
}

/// Mean unit price per distinct category
///
/// Averages `price`, not revenue: each record counts once regardless of
/// quantity.
pub fn average_price_by_category(
    records: &[SaleRecord],
) -> Result<BTreeMap<String, Decimal>, AnalyzerError> {
    let mut sums = BTreeMap::<&str, (Decimal, u64)>::new();

    for record in records {
        let (sum, count) = sums
            .entry(record.category.as_str())
            .or_insert((Decimal::ZERO, 0));
        *sum = sum
            .checked_add(record.price)
            .ok_or_else(|| AnalyzerError::arithmetic_overflow("average price by category"))?;
        *count += 1;
    }

    Ok(sums
        .into_iter()
        .map(|(category, (sum, count))| {
            (category.to_string(), round_currency(sum / Decimal::from(count)))
        })
        .collect())
}

/// Total, largest, smallest and number of quantities
///
/// # Errors
///
/// Returns `AnalyzerError::EmptyInput` when `records` is empty, since
/// `min` and `max` have no meaningful value there.
pub fn quantity_statistics(records: &[SaleRecord]) -> Result<QuantityStatistics, AnalyzerError> {
    let (first, rest) = records
        .split_first()
        .ok_or_else(|| AnalyzerError::empty_input("quantity statistics"))?;

    let initial = QuantityStatistics {
        total: u64::from(first.quantity),
        max: first.quantity,
        min: first.quantity,
        count: 1,
    };

    Ok(rest.iter().fold(initial, |stats, record| QuantityStatistics {
        total: stats.total + u64::from(record.quantity),
        max: stats.max.max(record.quantity),
        min: stats.min.min(record.quantity),
        count: stats.count + 1,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::sample_records;
    use rstest::{fixture, rstest};

    #[fixture]
    fn sample() -> Vec<SaleRecord> {
        sample_records()
    }

    fn record(product: &str, category: &str, quantity: u32, cents: i64, region: &str) -> SaleRecord {
        SaleRecord::new(product, category, quantity, Decimal::new(cents, 2), region)
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[rstest]
    #[case::half_rounds_up("2.345", "2.35")]
    #[case::below_half_rounds_down("2.3449", "2.34")]
    #[case::banker_case_still_rounds_up("0.125", "0.13")]
    #[case::already_two_places("19398.91", "19398.91")]
    #[case::integer("7", "7.00")]
    fn test_round_currency(#[case] amount: &str, #[case] expected: &str) {
        let rounded = round_currency(dec(amount));
        assert_eq!(rounded, dec(expected));
        assert!(rounded.scale() <= CURRENCY_DECIMAL_PLACES);
    }

    #[rstest]
    fn test_total_sales_sample(sample: Vec<SaleRecord>) {
        assert_eq!(total_sales(&sample), Ok(dec("19398.91")));
    }

    #[test]
    fn test_total_sales_empty() {
        assert_eq!(total_sales(&[]), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_total_sales_counts_duplicates() {
        let row = record("Mouse", "Electronics", 2, 1050, "South");
        assert_eq!(total_sales(&[row.clone(), row]), Ok(dec("42.00")));
    }

    #[rstest]
    fn test_sales_by_category_sample(sample: Vec<SaleRecord>) {
        let by_category = sales_by_category(&sample).unwrap();

        assert_eq!(by_category.len(), 2);
        assert_eq!(by_category["Electronics"], dec("15549.18"));
        assert_eq!(by_category["Furniture"], dec("3849.73"));
    }

    #[rstest]
    fn test_electronics_is_sum_of_its_products(sample: Vec<SaleRecord>) {
        let electronics: Decimal = sample
            .iter()
            .filter(|r| {
                ["Laptop", "Mouse", "Monitor", "Keyboard", "Tablet", "Webcam"]
                    .contains(&r.product.as_str())
            })
            .map(|r| r.revenue().unwrap())
            .sum();

        assert_eq!(sales_by_category(&sample).unwrap()["Electronics"], electronics);
    }

    #[rstest]
    fn test_sales_by_region_sample(sample: Vec<SaleRecord>) {
        let by_region = sales_by_region(&sample).unwrap();

        let expected: BTreeMap<String, Decimal> = [
            ("East", "1649.93"),
            ("North", "11499.78"),
            ("South", "4049.40"),
            ("West", "2199.80"),
        ]
        .into_iter()
        .map(|(region, total)| (region.to_string(), dec(total)))
        .collect();

        assert_eq!(by_region, expected);
    }

    #[rstest]
    fn test_group_totals_partition_total(sample: Vec<SaleRecord>) {
        let total = total_sales(&sample).unwrap();
        assert_eq!(sales_by_category(&sample).unwrap().values().sum::<Decimal>(), total);
        assert_eq!(sales_by_region(&sample).unwrap().values().sum::<Decimal>(), total);
    }

    #[test]
    fn test_group_totals_round_after_summing() {
        let records = vec![
            SaleRecord::new("Pen", "Office", 1, dec("0.0049"), "North"),
            SaleRecord::new("Pencil", "Office", 1, dec("0.0049"), "North"),
        ];

        assert_eq!(sales_by_category(&records).unwrap()["Office"], dec("0.01"));
        assert_eq!(total_sales(&records), Ok(dec("0.01")));
    }

    #[rstest]
    fn test_top_products_sample(sample: Vec<SaleRecord>) {
        let top = top_products(&sample, 5).unwrap();

        assert_eq!(
            top,
            vec![
                ProductRevenue::new("Laptop", dec("4999.95")),
                ProductRevenue::new("Tablet", dec("3499.93")),
                ProductRevenue::new("Monitor", dec("2999.90")),
                ProductRevenue::new("Webcam", dec("2249.75")),
                ProductRevenue::new("Chair", dec("1599.92")),
            ]
        );
    }

    #[rstest]
    #[case::zero(0, 0)]
    #[case::one(1, 1)]
    #[case::exact(10, 10)]
    #[case::more_than_products(100, 10)]
    fn test_top_products_length(sample: Vec<SaleRecord>, #[case] n: usize, #[case] expected: usize) {
        assert_eq!(top_products(&sample, n).unwrap().len(), expected);
    }

    #[rstest]
    fn test_top_products_is_descending(sample: Vec<SaleRecord>) {
        let top = top_products(&sample, 100).unwrap();
        assert!(top.windows(2).all(|pair| pair[0].revenue >= pair[1].revenue));
        assert_eq!(top.last().unwrap().product, "Mouse");
    }

    #[test]
    fn test_top_products_sums_repeated_products() {
        let records = vec![
            record("Chair", "Furniture", 1, 10000, "West"),
            record("Desk", "Furniture", 1, 15000, "East"),
            record("Chair", "Furniture", 1, 10000, "East"),
        ];

        assert_eq!(
            top_products(&records, 2).unwrap(),
            vec![
                ProductRevenue::new("Chair", dec("200.00")),
                ProductRevenue::new("Desk", dec("150.00")),
            ]
        );
    }

    #[test]
    fn test_top_products_ties_keep_name_order() {
        let records = vec![
            record("Zeta", "Misc", 1, 500, "North"),
            record("Alpha", "Misc", 1, 500, "North"),
            record("Mid", "Misc", 1, 500, "North"),
        ];

        let names: Vec<_> = top_products(&records, 3)
            .unwrap()
            .into_iter()
            .map(|p| p.product)
            .collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[rstest]
    fn test_filter_high_value_sales_sample(sample: Vec<SaleRecord>) {
        let high_value = filter_high_value_sales(&sample, dec("1000")).unwrap();

        let products: Vec<_> = high_value.iter().map(|r| r.product.as_str()).collect();
        assert_eq!(
            products,
            vec!["Laptop", "Desk", "Chair", "Monitor", "Keyboard", "Tablet", "Webcam"]
        );
        assert!(high_value.iter().all(|r| r.revenue().unwrap() > dec("1000")));
    }

    #[rstest]
    #[case::threshold_equal_is_excluded("4999.95", 0)]
    #[case::just_below("4999.94", 1)]
    #[case::zero_threshold("0", 10)]
    #[case::above_everything("10000", 0)]
    fn test_filter_high_value_sales_threshold(
        sample: Vec<SaleRecord>,
        #[case] threshold: &str,
        #[case] expected: usize,
    ) {
        let high_value = filter_high_value_sales(&sample, dec(threshold)).unwrap();
        assert_eq!(high_value.len(), expected);
    }

    #[rstest]
    fn test_average_price_by_category_sample(sample: Vec<SaleRecord>) {
        let averages = average_price_by_category(&sample).unwrap();

        assert_eq!(averages.len(), 2);
        assert_eq!(averages["Electronics"], dec("333.32"));
        assert_eq!(averages["Furniture"], dec("187.49"));
    }

    #[test]
    fn test_average_price_ignores_quantity() {
        let records = vec![
            record("Pen", "Office", 100, 100, "North"),
            record("Stapler", "Office", 1, 300, "North"),
        ];

        assert_eq!(average_price_by_category(&records).unwrap()["Office"], dec("2.00"));
    }

    #[test]
    fn test_average_price_empty() {
        assert_eq!(average_price_by_category(&[]), Ok(BTreeMap::new()));
    }

    #[rstest]
    fn test_quantity_statistics_sample(sample: Vec<SaleRecord>) {
        assert_eq!(
            quantity_statistics(&sample),
            Ok(QuantityStatistics {
                total: 109,
                max: 25,
                min: 3,
                count: 10,
            })
        );
    }

    #[test]
    fn test_quantity_statistics_single_record() {
        let records = vec![record("Lamp", "Furniture", 0, 4999, "West")];
        assert_eq!(
            quantity_statistics(&records),
            Ok(QuantityStatistics {
                total: 0,
                max: 0,
                min: 0,
                count: 1,
            })
        );
    }

    #[test]
    fn test_quantity_statistics_empty_is_error() {
        assert_eq!(
            quantity_statistics(&[]),
            Err(AnalyzerError::empty_input("quantity statistics"))
        );
    }

    fn near_max_records(count: usize) -> Vec<SaleRecord> {
        (0..count)
            .map(|i| {
                SaleRecord::new(
                    format!("Widget{}", i),
                    "Tools",
                    1,
                    dec("50000000000000000000000000000"),
                    "North",
                )
            })
            .collect()
    }

    #[test]
    fn test_single_near_max_record_is_reportable() {
        let records = near_max_records(1);
        let amount = dec("50000000000000000000000000000");

        assert_eq!(total_sales(&records), Ok(amount));
        assert_eq!(average_price_by_category(&records).unwrap()["Tools"], amount);
    }

    #[rstest]
    #[case::total_sales(total_sales(&near_max_records(2)).err(), "total sales")]
    #[case::by_category(sales_by_category(&near_max_records(2)).err(), "sales by category")]
    #[case::by_region(sales_by_region(&near_max_records(2)).err(), "sales by region")]
    #[case::average_price(
        average_price_by_category(&near_max_records(2)).err(),
        "average price by category"
    )]
    fn test_running_sum_overflow_is_error(
        #[case] error: Option<AnalyzerError>,
        #[case] operation: &str,
    ) {
        assert_eq!(error, Some(AnalyzerError::arithmetic_overflow(operation)));
    }

    #[test]
    fn test_top_products_overflow_within_one_product() {
        let records: Vec<_> = near_max_records(2)
            .into_iter()
            .map(|r| SaleRecord { product: "Widget".to_string(), ..r })
            .collect();

        assert_eq!(
            top_products(&records, 1),
            Err(AnalyzerError::arithmetic_overflow("top products"))
        );
        // Distinct products never share a running sum
        assert_eq!(top_products(&near_max_records(2), 1).unwrap().len(), 1);
    }

    #[rstest]
    #[case::total_sales(total_sales(&[oversized_revenue()]).err())]
    #[case::by_category(sales_by_category(&[oversized_revenue()]).err())]
    #[case::top_products(top_products(&[oversized_revenue()], 5).err())]
    #[case::high_value(filter_high_value_sales(&[oversized_revenue()], Decimal::ZERO).err())]
    fn test_record_revenue_overflow_is_error(#[case] error: Option<AnalyzerError>) {
        assert_eq!(error, Some(AnalyzerError::arithmetic_overflow("revenue")));
    }

    fn oversized_revenue() -> SaleRecord {
        SaleRecord::new("Widget", "Tools", 2, Decimal::MAX, "North")
    }

    #[test]
    fn test_average_price_does_not_use_revenue() {
        let records = vec![oversized_revenue()];
        assert_eq!(average_price_by_category(&records).unwrap()["Tools"], Decimal::MAX);
    }

    #[rstest]
    fn test_aggregations_are_idempotent(sample: Vec<SaleRecord>) {
        let before = sample.clone();

        assert_eq!(total_sales(&sample), total_sales(&sample));
        assert_eq!(sales_by_category(&sample), sales_by_category(&sample));
        assert_eq!(sales_by_region(&sample), sales_by_region(&sample));
        assert_eq!(top_products(&sample, 3), top_products(&sample, 3));
        assert_eq!(
            filter_high_value_sales(&sample, dec("500")),
            filter_high_value_sales(&sample, dec("500"))
        );
        assert_eq!(
            average_price_by_category(&sample),
            average_price_by_category(&sample)
        );
        assert_eq!(quantity_statistics(&sample), quantity_statistics(&sample));
        assert_eq!(sample, before);
    }
}
