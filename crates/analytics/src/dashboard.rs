//! One-pass dashboard read model.
//!
//! Everything is computed from a single borrowed snapshot so totals, bands and
//! series on one screen always describe the same catalog state.

use serde::Serialize;

use smartstock_core::ProductId;
use smartstock_products::{Currency, Month, Product};

use crate::classification::{
    SalesTier, StockHealthBand, low_stock_alerts, stock_health_buckets, top_products,
};
use crate::forecast::predict_demand;
use crate::insights::{display_currency, stock_value, total_units};
use crate::series::{SeriesKind, SeriesWindow, sales_performance};

/// How many products the "Top Products" card shows.
pub const TOP_PRODUCTS_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub icon: String,
    pub total_units: u64,
    pub unit_price: f64,
    pub currency: Currency,
}

impl From<&Product> for ProductSummary {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id_typed(),
            name: p.name().to_string(),
            icon: p.icon().to_string(),
            total_units: p.total_units(),
            unit_price: p.unit_price(),
            currency: p.currency(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandSummary {
    pub band: StockHealthBand,
    pub label: &'static str,
    pub count: usize,
    pub total_units: u64,
    pub products: Vec<ProductSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopProduct {
    pub product: ProductSummary,
    pub tier: SalesTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub window: SeriesWindow,
    pub months: Vec<Month>,
    pub actual: Vec<u64>,
    pub forecast: Vec<f64>,
    pub actual_heights: Vec<f64>,
    pub forecast_heights: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSummary {
    pub product_id: ProductId,
    pub name: String,
    pub yearly_total: u64,
    pub monthly_average: u64,
    pub best_month: Month,
    pub best_month_units: u64,
    pub quarterly_totals: [u64; 4],
    /// Only when the product has a known price.
    pub projected_revenue: Option<f64>,
    pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub product_count: usize,
    pub total_units: u64,
    pub stock_value: f64,
    pub display_currency: Currency,
    pub health: Vec<BandSummary>,
    pub low_stock_alerts: Vec<ProductSummary>,
    pub top_products: Vec<TopProduct>,
    pub recent: Vec<ProductSummary>,
    pub sales_performance: SeriesSummary,
    pub forecasts: Vec<ForecastSummary>,
}

impl Dashboard {
    pub fn build(products: &[Product], window: SeriesWindow, now: Month, recent_limit: usize) -> Self {
        let buckets = stock_health_buckets(products);
        let health = buckets
            .iter()
            .map(|(band, members)| BandSummary {
                band,
                label: band.label(),
                count: members.len(),
                total_units: buckets.total_units(band),
                products: members.iter().map(|p| ProductSummary::from(*p)).collect(),
            })
            .collect();

        let series = sales_performance(products, window, now);
        let sales_performance = SeriesSummary {
            window,
            actual_heights: series.bar_heights(SeriesKind::Actual),
            forecast_heights: series.bar_heights(SeriesKind::Forecast),
            months: series.months,
            actual: series.actual,
            forecast: series.forecast,
        };

        let forecasts = products
            .iter()
            .map(|p| {
                let forecast = predict_demand(p);
                let (best_month, best_month_units) = forecast.best_month();
                ForecastSummary {
                    product_id: p.id_typed(),
                    name: p.name().to_string(),
                    yearly_total: forecast.yearly_total(),
                    monthly_average: forecast.monthly_average(),
                    best_month,
                    best_month_units,
                    quarterly_totals: forecast.quarterly_totals(),
                    projected_revenue: (p.unit_price() > 0.0)
                        .then(|| forecast.projected_revenue(p.unit_price())),
                    currency: p.currency(),
                }
            })
            .collect();

        let dashboard = Self {
            product_count: products.len(),
            total_units: total_units(products),
            stock_value: stock_value(products),
            display_currency: display_currency(products),
            health,
            low_stock_alerts: low_stock_alerts(products)
                .into_iter()
                .map(ProductSummary::from)
                .collect(),
            top_products: top_products(products, TOP_PRODUCTS_LIMIT)
                .into_iter()
                .map(|r| TopProduct {
                    product: ProductSummary::from(r.product),
                    tier: r.tier,
                })
                .collect(),
            recent: products
                .iter()
                .rev()
                .take(recent_limit)
                .map(ProductSummary::from)
                .collect(),
            sales_performance,
            forecasts,
        };

        tracing::debug!(
            products = dashboard.product_count,
            total_units = dashboard.total_units,
            alerts = dashboard.low_stock_alerts.len(),
            "dashboard built"
        );
        dashboard
    }
}
