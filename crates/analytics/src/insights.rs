//! Catalog-wide headline numbers.

use smartstock_products::{Currency, Product};

/// Sum of every product's all-time units.
pub fn total_units(products: &[Product]) -> u64 {
    products.iter().map(Product::total_units).sum()
}

/// Σ (units × unit price).
///
/// Prices in different currencies are added as plain numbers; no conversion
/// happens. Pair with [`display_currency`] for the symbol.
pub fn stock_value(products: &[Product]) -> f64 {
    products
        .iter()
        .map(|p| p.total_units() as f64 * p.unit_price())
        .sum()
}

/// The catalog's currency when every product shares one, otherwise USD.
pub fn display_currency(products: &[Product]) -> Currency {
    let mut currencies = products.iter().map(Product::currency);
    match currencies.next() {
        Some(first) if currencies.all(|c| c == first) => first,
        _ => Currency::Usd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartstock_products::ProductDraft;

    fn product(units: i64, price: f64, currency: &str) -> Product {
        Product::new(
            ProductDraft::new("Item")
                .with_sales("May", units)
                .with_price(price, currency),
        )
        .unwrap()
    }

    #[test]
    fn totals_and_value() {
        let products = vec![product(10, 2.5, "EUR"), product(4, 0.0, "EUR")];
        assert_eq!(total_units(&products), 14);
        assert_eq!(stock_value(&products), 25.0);
    }

    #[test]
    fn single_currency_is_displayed() {
        let products = vec![product(1, 1.0, "UAH"), product(2, 1.0, "UAH")];
        assert_eq!(display_currency(&products), Currency::Uah);
    }

    #[test]
    fn mixed_or_empty_falls_back_to_usd() {
        let products = vec![product(1, 1.0, "UAH"), product(2, 1.0, "GBP")];
        assert_eq!(display_currency(&products), Currency::Usd);
        assert_eq!(display_currency(&[]), Currency::Usd);
        assert_eq!(stock_value(&[]), 0.0);
    }
}
