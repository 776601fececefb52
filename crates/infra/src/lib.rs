//! Infrastructure layer: local key-value storage, the catalog gateway built on
//! it, one-time demo seeding, and configuration.

pub mod config;
pub mod gateway;
pub mod kv_store;
pub mod seed;


pub use config::SmartStockConfig;
pub use gateway::{GatewayError, KvCatalogGateway, PRODUCTS_KEY, SEED_FLAG_KEY};
pub use kv_store::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, StoreError};
pub use seed::{SeedError, demo_products, seed_demo_data};
