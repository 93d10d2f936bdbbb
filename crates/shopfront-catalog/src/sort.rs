//! Sort options for the catalog listing.

use crate::product::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort order applied to the filtered product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Sort by title A-Z.
    #[default]
    NameAsc,
    /// Sort by title Z-A.
    NameDesc,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by rating, high to low. Unrated products sort last.
    RatingDesc,
}

impl SortOption {
    /// All options, in the order the filter panel lists them.
    pub const ALL: [SortOption; 5] = [
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingDesc,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "Name (A-Z)",
            SortOption::NameDesc => "Name (Z-A)",
            SortOption::PriceAsc => "Price (Low-High)",
            SortOption::PriceDesc => "Price (High-Low)",
            SortOption::RatingDesc => "Rating (High-Low)",
        }
    }

    /// Compare two products under this sort order.
    ///
    /// Returns `Ordering::Equal` for tied keys; callers must use a stable
    /// sort so ties keep their snapshot order. Title comparison is
    /// case-sensitive; numeric keys use `total_cmp` so the ordering is total
    /// even for pathological float values.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::NameAsc => a.title.cmp(&b.title),
            SortOption::NameDesc => b.title.cmp(&a.title),
            SortOption::PriceAsc => a.price.total_cmp(&b.price),
            SortOption::PriceDesc => b.price.total_cmp(&a.price),
            SortOption::RatingDesc => match (a.rating.rate, b.rating.rate) {
                (Some(ra), Some(rb)) => rb.total_cmp(&ra),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}
