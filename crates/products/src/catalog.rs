//! The product catalog: insertion-ordered, unique by id, persisted as a whole.

use std::sync::Arc;

use chrono::Utc;

use smartstock_core::{DomainError, DomainResult, Entity, ProductId};
use smartstock_events::{Event, EventBus};

use crate::product::{Product, ProductCreated};

/// Persistence port: load/save the whole catalog as one unit.
///
/// There is no partial persistence; every save writes every product.
pub trait CatalogGateway {
    type Error: core::fmt::Display + core::fmt::Debug;

    fn load(&self) -> Result<Vec<Product>, Self::Error>;

    fn save(&self, products: &[Product]) -> Result<(), Self::Error>;
}

impl<G> CatalogGateway for Arc<G>
where
    G: CatalogGateway + ?Sized,
{
    type Error = G::Error;

    fn load(&self) -> Result<Vec<Product>, Self::Error> {
        (**self).load()
    }

    fn save(&self, products: &[Product]) -> Result<(), Self::Error> {
        (**self).save(products)
    }
}

/// Catalog service.
///
/// Single writer: mutations take `&mut self`. Read queries borrow
/// [`Catalog::products`], which freezes the snapshot for as long as the
/// borrow lives, so one dashboard pass never mixes two catalog states.
///
/// Persistence and notification failures are logged and swallowed; the
/// in-memory mutation always stands.
#[derive(Debug)]
pub struct Catalog<G, B> {
    products: Vec<Product>,
    gateway: G,
    bus: B,
}

impl<G, B> Catalog<G, B>
where
    G: CatalogGateway,
    B: EventBus<ProductCreated>,
{
    /// Load the catalog once from the gateway.
    ///
    /// A failed load yields an empty catalog. Duplicate ids in storage keep
    /// the first occurrence.
    pub fn load(gateway: G, bus: B) -> Self {
        let stored = match gateway.load() {
            Ok(products) => products,
            Err(error) => {
                tracing::warn!(%error, "failed to load catalog; starting empty");
                Vec::new()
            }
        };

        let mut products: Vec<Product> = Vec::with_capacity(stored.len());
        for product in stored {
            if products.iter().any(|p| p.same_identity_as(&product)) {
                tracing::warn!(product_id = %product.id_typed(), "duplicate product id in storage; skipping");
                continue;
            }
            products.push(product);
        }

        tracing::info!(products = products.len(), "catalog loaded");
        Self {
            products,
            gateway,
            bus,
        }
    }

    /// Append a product, persist, then emit [`ProductCreated`].
    pub fn add(&mut self, product: Product) -> DomainResult<ProductId> {
        let id = product.id_typed();
        if self.get(&id).is_some() {
            return Err(DomainError::conflict(format!("product {id} already exists")));
        }

        let event = ProductCreated::from_product(&product, Utc::now());
        self.products.push(product);
        self.persist();

        tracing::info!(product_id = %id, "product added");
        notify(&self.bus, event);
        Ok(id)
    }

    /// Replace the product with the same id. Returns `false` (and does nothing)
    /// when the id is unknown.
    pub fn update(&mut self, product: Product) -> bool {
        let Some(slot) = self.products.iter_mut().find(|p| p.same_identity_as(&product)) else {
            tracing::debug!(product_id = %product.id_typed(), "update for unknown product ignored");
            return false;
        };
        *slot = product;
        self.persist();
        true
    }

    /// Remove a product by id. Returns `false` (and does nothing) when absent.
    pub fn delete(&mut self, id: &ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id() != id);
        if self.products.len() == before {
            tracing::debug!(product_id = %id, "delete for unknown product ignored");
            return false;
        }
        self.persist();
        true
    }

    /// Bulk insert without creation events (seeding, imports). Products whose
    /// id is already present are skipped. Saves once; returns how many were added.
    pub fn import(&mut self, products: Vec<Product>) -> usize {
        let mut added = 0;
        for product in products {
            if self.get(product.id()).is_some() {
                continue;
            }
            self.products.push(product);
            added += 1;
        }
        if added > 0 {
            self.persist();
        }
        added
    }

    fn persist(&self) {
        if let Err(error) = self.gateway.save(&self.products) {
            tracing::warn!(%error, products = self.products.len(), "failed to save catalog");
        }
    }
}

/// Fire-and-forget publish; a failure is logged with the event's metadata.
fn notify<E, B>(bus: &B, event: E)
where
    E: Event,
    B: EventBus<E>,
{
    let event_type = event.event_type();
    let version = event.version();
    let occurred_at = event.occurred_at();
    if let Err(error) = bus.publish(event) {
        tracing::warn!(event_type, version, %occurred_at, ?error, "failed to publish event");
    }
}

impl<G, B> Catalog<G, B> {
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Current snapshot, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The last `limit` inserted products, most recent first.
    pub fn recent(&self, limit: usize) -> Vec<&Product> {
        self.products.iter().rev().take(limit).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }
}
