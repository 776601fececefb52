//! Catalog persistence over a key-value store.

use serde_json::Value as JsonValue;
use thiserror::Error;

use smartstock_products::{CatalogGateway, Product};

use crate::kv_store::{KeyValueStore, StoreError};

/// Key holding the serialized product array.
pub const PRODUCTS_KEY: &str = "savedProducts";

/// Key holding the "demo data already inserted" flag.
pub const SEED_FLAG_KEY: &str = "hasSeededDemoData";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("catalog serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Whole-catalog gateway: one array under [`PRODUCTS_KEY`].
#[derive(Debug)]
pub struct KvCatalogGateway<S> {
    store: S,
}

impl<S> KvCatalogGateway<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_seeded(&self) -> Result<bool, StoreError> {
        Ok(matches!(self.store.get(SEED_FLAG_KEY)?, Some(JsonValue::Bool(true))))
    }

    pub fn mark_seeded(&self) -> Result<(), StoreError> {
        self.store.set(SEED_FLAG_KEY, JsonValue::Bool(true))
    }
}

impl<S> CatalogGateway for KvCatalogGateway<S>
where
    S: KeyValueStore,
{
    type Error = GatewayError;

    fn load(&self) -> Result<Vec<Product>, Self::Error> {
        match self.store.get(PRODUCTS_KEY)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, products: &[Product]) -> Result<(), Self::Error> {
        let value = serde_json::to_value(products)?;
        self.store.set(PRODUCTS_KEY, value)?;
        tracing::debug!(products = products.len(), "catalog saved");
        Ok(())
    }
}
