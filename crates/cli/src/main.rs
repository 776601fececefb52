use std::sync::Arc;

use anyhow::Context;

use smartstock_analytics::Dashboard;
use smartstock_events::InMemoryEventBus;
use smartstock_infra::{FileKeyValueStore, KvCatalogGateway, SmartStockConfig, seed_demo_data};
use smartstock_products::{Catalog, Month, ProductCreated};

fn main() -> anyhow::Result<()> {
    smartstock_observability::init();

    let config = SmartStockConfig::from_env();
    tracing::info!(store = %config.store_path.display(), window = ?config.window, "starting smartstock");

    let gateway = Arc::new(KvCatalogGateway::new(FileKeyValueStore::new(&config.store_path)));
    let bus: Arc<InMemoryEventBus<ProductCreated>> = Arc::new(InMemoryEventBus::new());
    let mut catalog = Catalog::load(gateway.clone(), bus);

    if config.seed_demo {
        seed_demo_data(&gateway, &mut catalog).context("failed to seed demo data")?;
    }

    let dashboard = Dashboard::build(catalog.products(), config.window, Month::current(), config.recent_limit);
    let json = serde_json::to_string_pretty(&dashboard).context("failed to render dashboard")?;
    println!("{json}");
    Ok(())
}
