//! Products domain module.
//!
//! Product data model, validation at the mutation boundary, and the catalog
//! service that persists through a [`CatalogGateway`] and announces new
//! products on an event bus. No IO lives here; storage is behind the port.

pub mod catalog;
pub mod currency;
pub mod icon;
pub mod month;
pub mod product;
pub mod sales;

pub use catalog::{Catalog, CatalogGateway};
pub use currency::Currency;
pub use icon::{DEFAULT_ICON, icon_for};
pub use month::Month;
pub use product::{Product, ProductCreated, ProductDraft, ProductRecord};
pub use sales::MonthlySales;
