//! Classification rules over a product's all-time total units (T).
//!
//! Three rules, deliberately kept apart. They disagree at the edges (T = 0 is
//! a low-stock alert but sits in no health band; "Medium" means different
//! ranges in the band and tier rules) and are not to be merged.

use serde::{Deserialize, Serialize};

use smartstock_products::Product;

/// Alerts fire strictly below this many units.
pub const LOW_STOCK_THRESHOLD: u64 = 10;

/// Four-tier stock health, used by the health cards and lists.
///
/// Bands partition `1..=100_000`. T = 0 and T > 100 000 fall in no band.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockHealthBand {
    Many,
    Medium,
    Enough,
    Low,
}

impl StockHealthBand {
    /// Display order (healthiest first).
    pub const ALL: [StockHealthBand; 4] = [
        StockHealthBand::Many,
        StockHealthBand::Medium,
        StockHealthBand::Enough,
        StockHealthBand::Low,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StockHealthBand::Many => "Many stock",
            StockHealthBand::Medium => "Medium stock",
            StockHealthBand::Enough => "Enough stock",
            StockHealthBand::Low => "Low stock",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

pub fn stock_health_band(total_units: u64) -> Option<StockHealthBand> {
    match total_units {
        100..=100_000 => Some(StockHealthBand::Many),
        50..=99 => Some(StockHealthBand::Medium),
        10..=49 => Some(StockHealthBand::Enough),
        1..=9 => Some(StockHealthBand::Low),
        _ => None,
    }
}

/// Three-tier ranking label for "top products".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesTier {
    High,
    Medium,
    Low,
}

pub fn sales_tier(total_units: u64) -> SalesTier {
    match total_units {
        0..=49 => SalesTier::Low,
        50..=500 => SalesTier::Medium,
        _ => SalesTier::High,
    }
}

/// True when T < 10, including products that never sold.
pub fn low_stock_alert(total_units: u64) -> bool {
    total_units < LOW_STOCK_THRESHOLD
}

/// Products grouped by health band, each group in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockHealthBuckets<'a> {
    buckets: [Vec<&'a Product>; 4],
}

impl<'a> StockHealthBuckets<'a> {
    pub fn get(&self, band: StockHealthBand) -> &[&'a Product] {
        &self.buckets[band.slot()]
    }

    pub fn count(&self, band: StockHealthBand) -> usize {
        self.buckets[band.slot()].len()
    }

    /// Sum of T over the band's products (the health card figure).
    pub fn total_units(&self, band: StockHealthBand) -> u64 {
        self.buckets[band.slot()]
            .iter()
            .fold(0, |acc, p| acc.saturating_add(p.total_units()))
    }

    /// Bands with their products, healthiest first.
    pub fn iter<'s>(&'s self) -> impl Iterator<Item = (StockHealthBand, &'s [&'a Product])> + 's {
        StockHealthBand::ALL.into_iter().map(|band| (band, self.get(band)))
    }
}

/// Sort the snapshot into health bands. Products outside every band are left out.
pub fn stock_health_buckets(products: &[Product]) -> StockHealthBuckets<'_> {
    let mut buckets = StockHealthBuckets::default();
    for product in products {
        if let Some(band) = stock_health_band(product.total_units()) {
            buckets.buckets[band.slot()].push(product);
        }
    }
    buckets
}

/// Products that trigger a low-stock alert, in catalog order.
pub fn low_stock_alerts(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| low_stock_alert(p.total_units()))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedProduct<'a> {
    pub product: &'a Product,
    pub total_units: u64,
    pub tier: SalesTier,
}

/// Best sellers first. Equal totals keep catalog order.
pub fn top_products(products: &[Product], limit: usize) -> Vec<RankedProduct<'_>> {
    let mut ranked: Vec<RankedProduct<'_>> = products
        .iter()
        .map(|product| {
            let total_units = product.total_units();
            RankedProduct {
                product,
                total_units,
                tier: sales_tier(total_units),
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.total_units.cmp(&a.total_units));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartstock_products::ProductDraft;

    fn product(name: &str, units: i64) -> Product {
        let mut draft = ProductDraft::new(name);
        if units > 0 {
            draft = draft.with_sales("January", units);
        }
        Product::new(draft).unwrap()
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(stock_health_band(0), None);
        assert_eq!(stock_health_band(1), Some(StockHealthBand::Low));
        assert_eq!(stock_health_band(9), Some(StockHealthBand::Low));
        assert_eq!(stock_health_band(10), Some(StockHealthBand::Enough));
        assert_eq!(stock_health_band(49), Some(StockHealthBand::Enough));
        assert_eq!(stock_health_band(50), Some(StockHealthBand::Medium));
        assert_eq!(stock_health_band(99), Some(StockHealthBand::Medium));
        assert_eq!(stock_health_band(100), Some(StockHealthBand::Many));
        assert_eq!(stock_health_band(100_000), Some(StockHealthBand::Many));
        assert_eq!(stock_health_band(100_001), None);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(sales_tier(0), SalesTier::Low);
        assert_eq!(sales_tier(49), SalesTier::Low);
        assert_eq!(sales_tier(50), SalesTier::Medium);
        assert_eq!(sales_tier(500), SalesTier::Medium);
        assert_eq!(sales_tier(501), SalesTier::High);
    }

    #[test]
    fn zero_sales_alerts_but_has_no_band() {
        let products = vec![product("Ghost", 0)];

        assert_eq!(low_stock_alerts(&products).len(), 1);
        let buckets = stock_health_buckets(&products);
        for band in StockHealthBand::ALL {
            assert_eq!(buckets.count(band), 0, "{band:?}");
        }
    }

    #[test]
    fn buckets_keep_catalog_order() {
        let products = vec![
            product("Apple", 120),
            product("Bread", 5),
            product("Cheese", 60),
            product("Donut", 300),
            product("Egg", 9),
        ];
        let buckets = stock_health_buckets(&products);

        let many: Vec<&str> = buckets.get(StockHealthBand::Many).iter().map(|p| p.name()).collect();
        assert_eq!(many, vec!["Apple", "Donut"]);
        assert_eq!(buckets.count(StockHealthBand::Medium), 1);
        assert_eq!(buckets.count(StockHealthBand::Enough), 0);
        assert_eq!(buckets.count(StockHealthBand::Low), 2);
        assert_eq!(buckets.iter().count(), 4);

        assert_eq!(buckets.total_units(StockHealthBand::Many), 420);
        assert_eq!(buckets.total_units(StockHealthBand::Medium), 60);
        assert_eq!(buckets.total_units(StockHealthBand::Enough), 0);
        assert_eq!(buckets.total_units(StockHealthBand::Low), 14);
    }

    #[test]
    fn top_products_rank_by_total_with_stable_ties() {
        let products = vec![
            product("Apple", 40),
            product("Bread", 600),
            product("Cheese", 40),
            product("Donut", 100),
        ];
        let top = top_products(&products, 3);

        let names: Vec<&str> = top.iter().map(|r| r.product.name()).collect();
        assert_eq!(names, vec!["Bread", "Donut", "Apple"]);
        assert_eq!(top[0].tier, SalesTier::High);
        assert_eq!(top[1].tier, SalesTier::Medium);
        assert_eq!(top[2].tier, SalesTier::Low);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: bands partition 1..=100_000 and never overlap.
            #[test]
            fn bands_partition_supported_range(total in 0u64..200_000) {
                let matching = StockHealthBand::ALL
                    .iter()
                    .filter(|band| stock_health_band(total) == Some(**band))
                    .count();
                if (1..=100_000).contains(&total) {
                    prop_assert_eq!(matching, 1);
                } else {
                    prop_assert_eq!(matching, 0);
                }
            }

            /// Property: every band member under 10 units also raises an alert.
            #[test]
            fn low_band_implies_alert(total in 0u64..1_000) {
                if stock_health_band(total) == Some(StockHealthBand::Low) {
                    prop_assert!(low_stock_alert(total));
                }
            }
        }
    }
}
