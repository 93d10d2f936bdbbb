//! Product types as decoded from the catalog endpoint.

use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are created only by decoding the catalog response and are never
/// mutated afterwards; they live as long as the snapshot that holds them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: u64,
    /// Product title.
    pub title: String,
    /// Price in the catalog currency, non-negative.
    pub price: f64,
    /// Full description.
    pub description: String,
    /// Free-form category label.
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Customer rating summary.
    pub rating: Rating,
}

impl Product {
    /// Format the price as a dollar string.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Aggregate customer rating for a product.
///
/// The endpoint may omit either field or send `null`; both cases decode to
/// `None` and are kept that way rather than being defaulted to zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rating {
    /// Average rating on a 0-5 scale.
    #[serde(default)]
    pub rate: Option<f64>,
    /// Number of ratings received.
    #[serde(default)]
    pub count: Option<u64>,
}

/// Distinct category labels across a snapshot, in first-occurrence order.
pub fn distinct_categories(snapshot: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in snapshot {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}
