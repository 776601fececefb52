//! First-launch demo data.

use thiserror::Error;

use smartstock_core::{DomainError, DomainResult, ProductId};
use smartstock_events::EventBus;
use smartstock_products::{Catalog, CatalogGateway, Product, ProductCreated, ProductDraft};

use crate::gateway::{GatewayError, KvCatalogGateway};
use crate::kv_store::{KeyValueStore, StoreError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Sample catalog covering every stock-health band, every sales tier and a
/// product with no sales at all.
pub fn demo_products() -> DomainResult<Vec<Product>> {
    let drafts = vec![
        ProductDraft::new("Coffee")
            .with_sales("January", 220)
            .with_sales("February", 180)
            .with_sales("March", 240)
            .with_sales("April", 200)
            .with_price(4.5, "USD"),
        ProductDraft::new("Banana")
            .with_sales("May", 30)
            .with_sales("June", 40)
            .with_price(0.25, "EUR"),
        ProductDraft::new("Notebook")
            .with_sales("September", 20)
            .with_sales("October", 15)
            .with_price(3.0, "GBP"),
        ProductDraft::new("Honey")
            .with_sales("November", 4)
            .with_sales("December", 3)
            .with_price(120.0, "UAH"),
        ProductDraft::new("Umbrella")
            .with_sales("July", 0)
            .with_price(35.0, "PLN"),
    ];

    drafts.into_iter().map(Product::new).collect()
}

/// Insert [`demo_products`] once per store.
///
/// Goes through [`Catalog::import`], so no product-created notifications
/// fire. The seed flag is only set once the demo products are readable from
/// the store; if the save was lost the next launch seeds again. Returns how
/// many products were inserted (0 when already seeded).
pub fn seed_demo_data<S, G, B>(
    gateway: &KvCatalogGateway<S>,
    catalog: &mut Catalog<G, B>,
) -> Result<usize, SeedError>
where
    S: KeyValueStore,
    G: CatalogGateway,
    B: EventBus<ProductCreated>,
{
    if gateway.is_seeded()? {
        tracing::debug!("demo data already seeded");
        return Ok(0);
    }

    let demo = demo_products()?;
    let ids: Vec<ProductId> = demo.iter().map(Product::id_typed).collect();
    let inserted = catalog.import(demo);

    let stored = gateway.load()?;
    let persisted = ids
        .iter()
        .all(|id| stored.iter().any(|p| p.id_typed() == *id));
    if !persisted {
        tracing::warn!(inserted, "demo data not persisted; leaving seed flag unset");
        return Ok(inserted);
    }

    gateway.mark_seeded()?;
    tracing::info!(inserted, "seeded demo data");
    Ok(inserted)
}
