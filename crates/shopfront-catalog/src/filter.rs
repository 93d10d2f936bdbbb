//! Filter selection and the filtered/sorted derivation.

use crate::product::Product;
use crate::sort::SortOption;
use serde::{Deserialize, Serialize};

/// The user's current filter and sort selection.
///
/// Category and rating floor are independent and at most one value of each
/// is active at a time. Both use toggle semantics: selecting the value that
/// is already active clears it instead of re-applying it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FilterSelection {
    /// Active category filter, `None` when no category filter is set.
    pub category: Option<String>,
    /// Minimum rating floor, `None` when no floor is set.
    pub min_rating: Option<f64>,
    /// Sort order for the filtered list.
    pub sort: SortOption,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the category filter: selecting the active category clears it.
    pub fn toggle_category(&mut self, category: &str) {
        if self.category.as_deref() == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category.to_string());
        }
    }

    /// Toggle the rating floor: selecting the active floor clears it.
    pub fn toggle_min_rating(&mut self, rating: f64) {
        if self.min_rating == Some(rating) {
            self.min_rating = None;
        } else {
            self.min_rating = Some(rating);
        }
    }

    /// Set the sort order. Direct set, no toggle.
    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    /// Reset to the defaults: no category, no rating floor, name A-Z.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether anything differs from the defaults.
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    /// Whether a product passes the active filters.
    ///
    /// A product with no rating fails any active rating floor (fail-closed)
    /// rather than slipping through or aborting the derivation.
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = match &self.category {
            Some(category) => product.category == *category,
            None => true,
        };
        let rating_ok = match self.min_rating {
            Some(floor) => product.rating.rate.is_some_and(|rate| rate >= floor),
            None => true,
        };
        category_ok && rating_ok
    }

    /// Derive the filtered, sorted product list from a snapshot.
    ///
    /// The sort is stable: products with equal sort keys keep their relative
    /// snapshot order.
    pub fn apply(&self, snapshot: &[Product]) -> Vec<Product> {
        let mut filtered: Vec<Product> = snapshot
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| self.sort.compare(a, b));
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::tests::product;

    fn snapshot() -> Vec<Product> {
        vec![
            product(1, "B", 10.0, "x", Some(4.0)),
            product(2, "A", 5.0, "y", Some(2.0)),
            product(3, "C", 5.0, "x", None),
        ]
    }

    #[test]
    fn test_category_toggle_roundtrip() {
        let mut selection = FilterSelection::new();
        selection.toggle_category("x");
        assert_eq!(selection.category.as_deref(), Some("x"));
        selection.toggle_category("x");
        assert_eq!(selection.category, None);
    }

    #[test]
    fn test_category_reselect_replaces() {
        let mut selection = FilterSelection::new();
        selection.toggle_category("x");
        selection.toggle_category("y");
        assert_eq!(selection.category.as_deref(), Some("y"));
    }

    #[test]
    fn test_rating_toggle_roundtrip() {
        let mut selection = FilterSelection::new();
        selection.toggle_min_rating(3.0);
        assert_eq!(selection.min_rating, Some(3.0));
        selection.toggle_min_rating(3.0);
        assert_eq!(selection.min_rating, None);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut selection = FilterSelection::new();
        selection.toggle_category("x");
        selection.toggle_min_rating(4.0);
        selection.set_sort(SortOption::PriceDesc);
        assert!(selection.is_active());
        selection.clear();
        assert_eq!(selection, FilterSelection::default());
        assert!(!selection.is_active());
    }

    #[test]
    fn test_filtered_is_subset_matching_predicate() {
        let snapshot = snapshot();
        let mut selection = FilterSelection::new();
        selection.toggle_category("x");
        selection.toggle_min_rating(3.0);

        let filtered = selection.apply(&snapshot);
        assert!(filtered.iter().all(|p| selection.matches(p)));
        assert!(filtered.iter().all(|p| snapshot.contains(p)));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_null_rate_fails_active_floor() {
        let snapshot = snapshot();
        let mut selection = FilterSelection::new();
        selection.toggle_min_rating(2.0);

        let filtered = selection.apply(&snapshot);
        // Product 3 has no rate and must be excluded, not passed through.
        assert!(filtered.iter().all(|p| p.id != 3));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_null_rate_passes_when_no_floor_active() {
        let snapshot = snapshot();
        let selection = FilterSelection::new();
        assert_eq!(selection.apply(&snapshot).len(), 3);
    }

    #[test]
    fn test_name_asc_scenario() {
        // Reference scenario: two products sorted by title ascending.
        let snapshot = vec![
            product(1, "B", 10.0, "x", Some(4.0)),
            product(2, "A", 5.0, "y", Some(2.0)),
        ];
        let selection = FilterSelection::new();
        let sorted = selection.apply(&snapshot);
        assert_eq!(sorted.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 1]);

        let mut with_floor = FilterSelection::new();
        with_floor.toggle_min_rating(3.0);
        let filtered = with_floor.apply(&snapshot);
        assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let snapshot = vec![
            product(1, "A", 5.0, "x", Some(3.0)),
            product(2, "B", 5.0, "x", Some(3.0)),
            product(3, "C", 5.0, "x", Some(3.0)),
        ];
        let mut selection = FilterSelection::new();
        selection.set_sort(SortOption::PriceAsc);
        let sorted = selection.apply(&snapshot);
        assert_eq!(sorted.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        selection.set_sort(SortOption::RatingDesc);
        let sorted = selection.apply(&snapshot);
        assert_eq!(sorted.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_apply_on_empty_snapshot() {
        let selection = FilterSelection::new();
        assert!(selection.apply(&[]).is_empty());
    }
}
