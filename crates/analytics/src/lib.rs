//! `smartstock-analytics`
//!
//! **Responsibility:** derived, read-only views over a catalog snapshot.
//!
//! - Per-product 12-month demand forecast ([`forecast`]).
//! - Stock-health, sales-tier and low-stock rules ([`classification`]).
//! - Rolling catalog-wide sales series for charts ([`series`]).
//!
//! Nothing here mutates a product or the catalog, and nothing is cached:
//! every call recomputes from the slice it is given.

pub mod classification;
pub mod dashboard;
pub mod error;
pub mod forecast;
pub mod insights;
pub mod series;

pub use classification::{
    LOW_STOCK_THRESHOLD, RankedProduct, SalesTier, StockHealthBand, StockHealthBuckets, low_stock_alert,
    low_stock_alerts, sales_tier, stock_health_band, stock_health_buckets, top_products,
};
pub use dashboard::Dashboard;
pub use error::AnalyticsError;
pub use forecast::{DemandForecast, GROWTH_FACTOR, predict_demand, trend_projection};
pub use insights::{display_currency, stock_value, total_units};
pub use series::{
    MIN_BAR_FRACTION, SERIES_UPLIFT, SalesSeries, SeriesKind, SeriesWindow, bar_heights, sales_performance,
    window_months,
};
