//! Catalog and cart stores for Shopfront.
//!
//! Each store exclusively owns its state and exposes derived views that are
//! recomputed on read, never cached: the catalog store owns the product
//! snapshot and the filter selection, the cart store owns the set of
//! selected product ids. All mutations are synchronous and total; the only
//! asynchronous operation is the catalog load, which the host either awaits
//! through [`CatalogStore::load`] or drives through the
//! `begin_load`/`finish_load` pair when the fetch runs on an executor.

pub mod cart;
pub mod catalog;

pub use cart::{format_price, round_to_cents, CartStore};
pub use catalog::{CatalogStore, LoadGeneration, LoadStatus, LOAD_ERROR_MESSAGE};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{format_price, round_to_cents, CartStore};
    pub use crate::catalog::{CatalogStore, LoadGeneration, LoadStatus, LOAD_ERROR_MESSAGE};
}
