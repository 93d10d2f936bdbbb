//! Catalog domain types and derived views for Shopfront.
//!
//! This crate holds the pure half of the client: the product data model as
//! decoded from the catalog endpoint, the filter/sort selection the user
//! builds up, and the derivation functions that turn a catalog snapshot plus
//! a selection into what the screens render. Nothing here performs I/O and
//! every derivation is a pure function of its inputs, so the same snapshot
//! and selection always produce the same view.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_catalog::prelude::*;
//!
//! let selection = FilterSelection::default()
//!     .toggled_category("electronics")
//!     .with_sort(SortOption::PriceAsc);
//!
//! let visible = selection.apply(&snapshot);
//! let categories = distinct_categories(&snapshot);
//! ```

pub mod filter;
pub mod product;
pub mod sort;

pub use filter::FilterSelection;
pub use product::{distinct_categories, Product, Rating};
pub use sort::SortOption;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::filter::FilterSelection;
    pub use crate::product::{distinct_categories, Product, Rating};
    pub use crate::sort::SortOption;
}
