//! Shopfront client application.
//!
//! A Leptos CSR app over the Shopfront stores: the catalog store drives the
//! home and detail pages, the cart store drives the cart page and the header
//! badge. All state is in memory and resets on reload.

pub mod app;

pub use app::App;
