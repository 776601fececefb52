//! Rolling catalog-wide sales series for the "Sales Performance" chart.
//!
//! The series forecast is a flat uplift of the actual cross-product total.
//! It is unrelated to the per-product forecast in [`crate::forecast`].

use serde::{Deserialize, Serialize};

use smartstock_products::{Month, Product};

use crate::error::AnalyticsError;

/// Uplift applied to actual totals to draw the forecast series (+10%).
pub const SERIES_UPLIFT: f64 = 1.1;

/// Height fraction given to zero-valued bars so none ever disappears.
pub const MIN_BAR_FRACTION: f64 = 0.05;

/// Supported window lengths.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SeriesWindow {
    OneMonth,
    #[default]
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

impl SeriesWindow {
    pub fn months(self) -> usize {
        match self {
            SeriesWindow::OneMonth => 1,
            SeriesWindow::ThreeMonths => 3,
            SeriesWindow::SixMonths => 6,
            SeriesWindow::TwelveMonths => 12,
        }
    }
}

impl TryFrom<u32> for SeriesWindow {
    type Error = AnalyticsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SeriesWindow::OneMonth),
            3 => Ok(SeriesWindow::ThreeMonths),
            6 => Ok(SeriesWindow::SixMonths),
            12 => Ok(SeriesWindow::TwelveMonths),
            other => Err(AnalyticsError::InvalidWindow(other)),
        }
    }
}

impl From<SeriesWindow> for u32 {
    fn from(value: SeriesWindow) -> Self {
        value.months() as u32
    }
}

/// Which series the chart shows.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    #[default]
    Actual,
    Forecast,
}

/// `window` consecutive months starting at `start`, wrapping past December.
pub fn window_months(window: SeriesWindow, start: Month) -> Vec<Month> {
    (0..window.months()).map(|offset| start.wrapping_add(offset)).collect()
}

/// Actual and forecast totals for each month of a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSeries {
    pub months: Vec<Month>,
    pub actual: Vec<u64>,
    pub forecast: Vec<f64>,
}

/// Sum every product's units per window month (missing = 0) and uplift them.
pub fn sales_performance(products: &[Product], window: SeriesWindow, now: Month) -> SalesSeries {
    let months = window_months(window, now);
    let actual: Vec<u64> = months
        .iter()
        .map(|&month| {
            products
                .iter()
                .map(|p| p.monthly_sales().units_or_zero(month))
                .sum()
        })
        .collect();
    let forecast = actual.iter().map(|&a| a as f64 * SERIES_UPLIFT).collect();

    SalesSeries {
        months,
        actual,
        forecast,
    }
}

impl SalesSeries {
    /// Same as [`sales_performance`] with "now" given as a zero-based month index.
    pub fn at_index(products: &[Product], window: SeriesWindow, now_index: usize) -> Result<Self, AnalyticsError> {
        let now = Month::from_index(now_index).ok_or(AnalyticsError::InvalidMonthIndex(now_index))?;
        Ok(sales_performance(products, window, now))
    }

    /// The selected series as plottable values.
    pub fn active(&self, kind: SeriesKind) -> Vec<f64> {
        match kind {
            SeriesKind::Actual => self.actual.iter().map(|&a| a as f64).collect(),
            SeriesKind::Forecast => self.forecast.clone(),
        }
    }

    /// Log-scaled bar heights for the selected series.
    pub fn bar_heights(&self, kind: SeriesKind) -> Vec<f64> {
        bar_heights(&self.active(kind))
    }
}

/// Log-scale bar heights as fractions of the tallest bar.
///
/// `log10(v) / log10(max)` for positive values, clamped to
/// `[MIN_BAR_FRACTION, 1]`. Zero (or negative) values get
/// [`MIN_BAR_FRACTION`]. An all-zero series is all floor; when the maximum is
/// at most 1 every positive bar is full height.
pub fn bar_heights(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let max = if max > 0.0 { max } else { 1.0 };
    let denominator = max.log10();

    values
        .iter()
        .map(|&v| {
            if v <= 0.0 || !v.is_finite() {
                MIN_BAR_FRACTION
            } else if denominator <= 0.0 {
                1.0
            } else {
                (v.log10() / denominator).clamp(MIN_BAR_FRACTION, 1.0)
            }
        })
        .collect()
}
