use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartstock_core::{DomainError, DomainResult, Entity, ProductId};
use smartstock_events::Event;

use crate::currency::Currency;
use crate::icon::icon_for;
use crate::month::Month;
use crate::sales::MonthlySales;

/// Raw, unvalidated product input as it arrives from a form or an API.
///
/// Nothing here is trusted: month keys may be misspelt, counts may be
/// negative, the currency code may be unknown. [`Product::new`] validates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    #[serde(default)]
    pub monthly_sales: BTreeMap<String, i64>,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default = "default_currency_code")]
    pub currency: String,
}

fn default_currency_code() -> String {
    Currency::default().code().to_string()
}

impl ProductDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            monthly_sales: BTreeMap::new(),
            unit_price: 0.0,
            currency: default_currency_code(),
        }
    }

    pub fn with_sales(mut self, month: impl Into<String>, units: i64) -> Self {
        self.monthly_sales.insert(month.into(), units);
        self
    }

    pub fn with_price(mut self, unit_price: f64, currency: impl Into<String>) -> Self {
        self.unit_price = unit_price;
        self.currency = currency.into();
        self
    }
}

/// A tracked inventory item.
///
/// Every `Product` in existence has passed validation: a non-empty name,
/// canonical month keys with non-negative counts, a finite non-negative
/// price and a supported currency. That includes products loaded from
/// storage (deserialization goes through the same checks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    monthly_sales: MonthlySales,
    unit_price: f64,
    currency: Currency,
    icon: String,
}

impl Product {
    /// Validate a draft and assign a fresh identity.
    pub fn new(draft: ProductDraft) -> DomainResult<Self> {
        Self::with_id(ProductId::new(), draft)
    }

    /// Validate a draft under an existing identity (replacement records for
    /// `Catalog::update`).
    pub fn with_id(id: ProductId, draft: ProductDraft) -> DomainResult<Self> {
        let name = validate_name(&draft.name)?;
        let monthly_sales = MonthlySales::from_raw(&draft.monthly_sales)?;
        let unit_price = validate_price(draft.unit_price)?;
        let currency: Currency = draft.currency.parse()?;

        Ok(Self {
            id,
            icon: icon_for(&name).to_string(),
            name,
            monthly_sales,
            unit_price,
            currency,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn monthly_sales(&self) -> &MonthlySales {
        &self.monthly_sales
    }

    /// Unit price; 0 means "unknown / not shown".
    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// All-time units sold (T).
    pub fn total_units(&self) -> u64 {
        self.monthly_sales.total()
    }

    /// Set the name; the icon is re-derived from it.
    pub fn rename(&mut self, name: &str) -> DomainResult<()> {
        self.name = validate_name(name)?;
        self.icon = icon_for(&self.name).to_string();
        Ok(())
    }

    /// Record units for one month (replacing any previous value). Leaves the icon alone.
    pub fn record_sales(&mut self, month: Month, units: u64) {
        self.monthly_sales.set(month, units);
    }

    pub fn set_monthly_sales(&mut self, sales: MonthlySales) {
        self.monthly_sales = sales;
    }

    pub fn set_price(&mut self, unit_price: f64, currency: Currency) -> DomainResult<()> {
        self.unit_price = validate_price(unit_price)?;
        self.currency = currency;
        Ok(())
    }

    /// Back to raw input form (handy for edit forms).
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            monthly_sales: self.monthly_sales.to_raw(),
            unit_price: self.unit_price,
            currency: self.currency.code().to_string(),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Names are stored exactly as typed; only a blank name is rejected.
fn validate_name(name: &str) -> DomainResult<String> {
    if name.trim().is_empty() {
        return Err(DomainError::EmptyName);
    }
    Ok(name.to_string())
}

fn validate_price(unit_price: f64) -> DomainResult<f64> {
    if !unit_price.is_finite() || unit_price < 0.0 {
        return Err(DomainError::invalid_price(unit_price));
    }
    Ok(unit_price)
}

/// Persisted product shape (one element of the stored catalog array).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub monthly_sales: BTreeMap<String, i64>,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default = "default_currency_code")]
    pub currency: String,
    #[serde(default)]
    pub icon: String,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let icon = record.icon;
        let mut product = Product::with_id(
            record.id,
            ProductDraft {
                name: record.name,
                monthly_sales: record.monthly_sales,
                unit_price: record.unit_price,
                currency: record.currency,
            },
        )?;
        // Stored icons win; they were derived when the name was last set.
        if !icon.is_empty() {
            product.icon = icon;
        }
        Ok(product)
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            monthly_sales: product.monthly_sales.to_raw(),
            name: product.name,
            unit_price: product.unit_price,
            currency: product.currency.code().to_string(),
            icon: product.icon,
        }
    }
}

/// Event: a product was added to the catalog.
///
/// Handed to the notification collaborator; carries everything a
/// notification needs so the receiver never reads the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreated {
    pub product_id: ProductId,
    pub product_name: String,
    pub total_units: u64,
    pub unit_price: f64,
    pub currency: Currency,
    pub icon: String,
    pub occurred_at: DateTime<Utc>,
}

impl ProductCreated {
    pub fn from_product(product: &Product, occurred_at: DateTime<Utc>) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            total_units: product.total_units(),
            unit_price: product.unit_price,
            currency: product.currency,
            icon: product.icon.clone(),
            occurred_at,
        }
    }

    pub fn notification_title(&self) -> &'static str {
        "New product added"
    }

    /// Pipe-separated body lines. The price line is omitted when the price is unknown.
    pub fn notification_body(&self) -> String {
        let mut lines = vec![
            format!("Name: {}", self.product_name),
            format!("Total units: {}", self.total_units),
        ];
        if self.unit_price > 0.0 {
            lines.push(format!("Price: {}{:.2}", self.currency.symbol(), self.unit_price));
        }
        lines.join(" | ")
    }
}

impl Event for ProductCreated {
    fn event_type(&self) -> &'static str {
        "products.product.created"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft::new("Milk")
            .with_sales("January", 7)
            .with_sales("February", 8)
            .with_price(1.25, "EUR")
    }

    #[test]
    fn new_product_is_validated_and_gets_an_icon() {
        let product = Product::new(draft()).unwrap();
        assert_eq!(product.name(), "Milk");
        assert_eq!(product.icon(), "🥛");
        assert_eq!(product.currency(), Currency::Eur);
        assert_eq!(product.total_units(), 15);
        assert_eq!(product.monthly_sales().get(Month::February), Some(8));
    }

    #[test]
    fn rejects_empty_name() {
        let err = Product::new(ProductDraft::new("   ")).unwrap_err();
        assert_eq!(err, DomainError::EmptyName);
    }

    #[test]
    fn name_is_kept_as_typed_while_icon_uses_trimmed_name() {
        let product = Product::new(ProductDraft::new("  Milk ")).unwrap();
        assert_eq!(product.name(), "  Milk ");
        assert_eq!(product.icon(), "🥛");
    }

    #[test]
    fn accepts_unit_counts_beyond_32_bits() {
        let product = Product::new(ProductDraft::new("Rice").with_sales("May", 5_000_000_000)).unwrap();
        assert_eq!(product.monthly_sales().get(Month::May), Some(5_000_000_000));
        assert_eq!(product.total_units(), 5_000_000_000);

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn rejects_invalid_month_key() {
        let err = Product::new(ProductDraft::new("Tea").with_sales("Smarch", 3)).unwrap_err();
        assert_eq!(err, DomainError::InvalidMonth("Smarch".to_string()));
    }

    #[test]
    fn rejects_negative_quantity() {
        let err = Product::new(ProductDraft::new("Tea").with_sales("June", -1)).unwrap_err();
        assert!(matches!(err, DomainError::NegativeQuantity { value: -1, .. }));
    }

    #[test]
    fn rejects_bad_prices() {
        for price in [-0.01, f64::NAN, f64::INFINITY] {
            let err = Product::new(ProductDraft::new("Tea").with_price(price, "USD")).unwrap_err();
            assert!(matches!(err, DomainError::InvalidPrice(_)), "price {price}");
        }
    }

    #[test]
    fn rejects_unknown_currency() {
        let err = Product::new(ProductDraft::new("Tea").with_price(1.0, "DOGE")).unwrap_err();
        assert_eq!(err, DomainError::UnknownCurrency("DOGE".to_string()));
    }

    #[test]
    fn rename_rederives_icon_but_other_setters_do_not() {
        let mut product = Product::new(draft()).unwrap();
        product.record_sales(Month::March, 3);
        product.set_price(2.0, Currency::Usd).unwrap();
        assert_eq!(product.icon(), "🥛");

        product.rename("Coffee beans").unwrap();
        assert_eq!(product.icon(), "☕️");
        assert_eq!(product.name(), "Coffee beans");
    }

    #[test]
    fn serializes_with_persisted_field_names() {
        let product = Product::new(draft()).unwrap();
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["name"], "Milk");
        assert_eq!(value["monthlySales"]["January"], 7);
        assert_eq!(value["unitPrice"], 1.25);
        assert_eq!(value["currency"], "EUR");
        assert_eq!(value["icon"], "🥛");
        assert_eq!(value["id"], product.id_typed().to_string());
    }

    #[test]
    fn deserialization_runs_validation() {
        let id = ProductId::new();
        let json = format!(
            r#"{{"id":"{id}","name":"Tea","monthlySales":{{"May":3}},"unitPrice":-5,"currency":"USD","icon":"🫖"}}"#
        );
        assert!(serde_json::from_str::<Product>(&json).is_err());

        let json = format!(
            r#"{{"id":"{id}","name":"Tea","monthlySales":{{"Mayo":3}},"unitPrice":1,"currency":"USD","icon":"🫖"}}"#
        );
        assert!(serde_json::from_str::<Product>(&json).is_err());
    }

    #[test]
    fn stored_icon_is_kept_and_missing_icon_is_derived() {
        let id = ProductId::new();
        let json = format!(r#"{{"id":"{id}","name":"Tea","monthlySales":{{}},"unitPrice":0,"currency":"USD","icon":"⭐"}}"#);
        let product: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product.icon(), "⭐");

        let json = format!(r#"{{"id":"{id}","name":"Tea"}}"#);
        let product: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product.icon(), "🫖");
        assert_eq!(product.currency(), Currency::Usd);
    }

    #[test]
    fn created_event_summarises_the_product() {
        let product = Product::new(draft()).unwrap();
        let event = ProductCreated::from_product(&product, Utc::now());

        assert_eq!(event.event_type(), "products.product.created");
        assert_eq!(event.total_units, 15);
        assert_eq!(event.notification_body(), "Name: Milk | Total units: 15 | Price: €1.25");
    }

    #[test]
    fn notification_body_skips_unknown_price() {
        let product = Product::new(ProductDraft::new("Bread").with_sales("May", 2)).unwrap();
        let event = ProductCreated::from_product(&product, Utc::now());
        assert_eq!(event.notification_body(), "Name: Bread | Total units: 2");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a validated product survives a JSON round trip unchanged.
            #[test]
            fn json_round_trip_preserves_product(
                name in "[A-Za-z][A-Za-z0-9 ]{0,30}",
                sales in proptest::collection::btree_map(0usize..12, 0i64..100_000, 0..12),
                cents in 0u32..1_000_000,
            ) {
                let mut d = ProductDraft::new(name).with_price(f64::from(cents) / 100.0, "GBP");
                for (i, units) in sales {
                    d = d.with_sales(Month::ALL[i].name(), units);
                }
                let product = Product::new(d).unwrap();

                let json = serde_json::to_string(&product).unwrap();
                let back: Product = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(back, product);
            }
        }
    }
}
