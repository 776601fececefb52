use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use smartstock_products::{Month, Product};

/// Flat growth applied to every forecast month (+10%).
pub const GROWTH_FACTOR: f64 = 1.1;

/// Apply the growth factor and truncate toward zero.
fn grow(units: u64) -> u64 {
    (units as f64 * GROWTH_FACTOR) as u64
}

/// One-year-ahead demand for a single product, one entry per canonical month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandForecast {
    by_month: [u64; 12],
}

/// Project next year's demand for `product`.
///
/// Model:
/// - average = total units / max(months with an entry, 1), **integer division**
///   (the average is truncated before growth is applied);
/// - a month with history predicts `trunc(history * 1.1)`;
/// - a month without history predicts `trunc(average * 1.1)`.
///
/// Pure: the product is only read.
pub fn predict_demand(product: &Product) -> DemandForecast {
    let sales = product.monthly_sales();
    let present = sales.present_months().max(1) as u64;
    let average = sales.total() / present;

    let mut by_month = [0u64; 12];
    for month in Month::ALL {
        by_month[month.index()] = match sales.get(month) {
            Some(history) => grow(history),
            None => grow(average),
        };
    }
    DemandForecast { by_month }
}

impl DemandForecast {
    pub fn get(&self, month: Month) -> u64 {
        self.by_month[month.index()]
    }

    /// Entries in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, u64)> + '_ {
        Month::ALL.into_iter().map(|m| (m, self.get(m)))
    }

    pub fn yearly_total(&self) -> u64 {
        self.by_month.iter().sum()
    }

    /// Yearly total / 12, truncated.
    pub fn monthly_average(&self) -> u64 {
        self.yearly_total() / 12
    }

    /// Month with the highest predicted demand; the earliest month wins ties.
    pub fn best_month(&self) -> (Month, u64) {
        self.iter()
            .fold((Month::January, self.by_month[0]), |best, cur| {
                if cur.1 > best.1 { cur } else { best }
            })
    }

    /// Q1..Q4 totals.
    pub fn quarterly_totals(&self) -> [u64; 4] {
        let mut quarters = [0u64; 4];
        for (i, units) in self.by_month.iter().enumerate() {
            quarters[i / 3] += units;
        }
        quarters
    }

    /// Q1..Q4 average per month, truncated.
    pub fn quarterly_averages(&self) -> [u64; 4] {
        self.quarterly_totals().map(|total| total / 3)
    }

    /// Yearly total × unit price. Currency is whatever the product is priced in.
    pub fn projected_revenue(&self, unit_price: f64) -> f64 {
        self.yearly_total() as f64 * unit_price
    }

    pub fn to_map(&self) -> BTreeMap<Month, u64> {
        self.iter().collect()
    }
}

/// Legacy yearly estimator: flat monthly mean bent by a least-squares trend.
///
/// Every month counts (missing = 0). `average = sum / 12` (integer),
/// `trend = slope / mean` over x = 0..11 (zero when the mean is zero), and the
/// projection is `max(0, trunc(average * 12 * (1 + trend)))`.
///
/// Independent of [`predict_demand`]; the two are not expected to agree.
pub fn trend_projection(product: &Product) -> u64 {
    let sales = product.monthly_sales();
    let values: Vec<f64> = Month::ALL
        .iter()
        .map(|&m| sales.units_or_zero(m) as f64)
        .collect();

    let average = sales.total() / 12;
    let trend = trend(&values);

    let projected = (average * 12) as f64 * (1.0 + trend);
    if projected.is_finite() && projected > 0.0 {
        projected as u64
    } else {
        0
    }
}

/// Least-squares slope divided by the series mean.
fn trend(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    let mean = sum / n;
    if mean == 0.0 {
        return 0.0;
    }

    let (mut sum_xy, mut sum_x, mut sum_x2) = (0.0, 0.0, 0.0);
    for (i, y) in values.iter().enumerate() {
        let x = i as f64;
        sum_xy += x * y;
        sum_x += x;
        sum_x2 += x * x;
    }

    let slope = (n * sum_xy - sum_x * sum) / (n * sum_x2 - sum_x * sum_x);
    slope / mean
}
