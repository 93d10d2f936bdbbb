//! Cart store: selected product ids and derived cart views.

use shopfront_catalog::Product;
use std::collections::BTreeSet;
use tracing::debug;

/// Owns the set of product ids the user has put in the cart.
///
/// The cart never owns product data; derived views take the current catalog
/// snapshot so they always reflect the latest fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    selected: BTreeSet<u64>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a product in or out of the cart.
    ///
    /// Returns `true` when the product is in the cart after the call.
    /// Toggling twice restores the prior state.
    pub fn toggle(&mut self, product_id: u64) -> bool {
        let added = self.selected.insert(product_id);
        if !added {
            self.selected.remove(&product_id);
        }
        debug!(product_id, in_cart = added, "cart toggled");
        added
    }

    /// Whether a product is in the cart.
    pub fn contains(&self, product_id: u64) -> bool {
        self.selected.contains(&product_id)
    }

    /// Number of selected products.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Derived: the selected products, in snapshot order.
    pub fn cart_products(&self, snapshot: &[Product]) -> Vec<Product> {
        snapshot
            .iter()
            .filter(|p| self.selected.contains(&p.id))
            .cloned()
            .collect()
    }

    /// Derived: full-precision sum of the selected products' prices.
    ///
    /// Rounding happens only at display time; see [`round_to_cents`].
    pub fn total_cost(&self, snapshot: &[Product]) -> f64 {
        snapshot
            .iter()
            .filter(|p| self.selected.contains(&p.id))
            .map(|p| p.price)
            .sum()
    }
}

/// Round a cost to 2 decimal places for display.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format a cost as a dollar string with 2 decimal places.
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", round_to_cents(amount))
}
