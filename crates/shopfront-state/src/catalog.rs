//! Catalog store: product snapshot, load status, filter selection.

use shopfront_catalog::{distinct_categories, FilterSelection, Product, SortOption};
use shopfront_data::{FetchError, ProductSource};
use tracing::{debug, info, warn};

/// The single user-visible message for any load failure.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load products. Check your internet connection.";

/// Load state of the catalog.
///
/// `Loading` transitions to `Success` or `Error`; both transition back to
/// `Loading` only through another explicit load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// A fetch is in flight (also the initial state).
    #[default]
    Loading,
    /// The snapshot reflects the latest successful fetch.
    Success,
    /// The latest fetch failed; carries the user-visible message.
    Error(String),
}

/// Token identifying one load attempt.
///
/// Handed out by [`CatalogStore::begin_load`] and checked by
/// [`CatalogStore::finish_load`] so that results of superseded loads are
/// discarded (last-request-wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadGeneration(u64);

/// Owns the catalog snapshot and the user's filter selection.
#[derive(Debug, Default)]
pub struct CatalogStore {
    snapshot: Vec<Product>,
    status: LoadStatus,
    selection: FilterSelection,
    generation: u64,
}

impl CatalogStore {
    /// Create an empty store in the `Loading` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current load status.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// The full catalog snapshot, empty until the first successful load.
    pub fn snapshot(&self) -> &[Product] {
        &self.snapshot
    }

    /// The current filter selection.
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Look up a product by id in the snapshot.
    pub fn product(&self, id: u64) -> Option<&Product> {
        self.snapshot.iter().find(|p| p.id == id)
    }

    /// Derived: distinct categories in first-occurrence order.
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.snapshot)
    }

    /// Derived: the snapshot filtered and stably sorted by the selection.
    pub fn filtered_products(&self) -> Vec<Product> {
        self.selection.apply(&self.snapshot)
    }

    /// Mark a load as started and return its generation token.
    ///
    /// Any load started earlier is superseded; its result will be ignored
    /// by [`finish_load`](Self::finish_load).
    pub fn begin_load(&mut self) -> LoadGeneration {
        self.status = LoadStatus::Loading;
        self.generation += 1;
        debug!(generation = self.generation, "catalog load started");
        LoadGeneration(self.generation)
    }

    /// Apply the result of a load attempt.
    ///
    /// Returns `false` without touching any state when the generation is
    /// stale. On success the snapshot is replaced wholesale; on failure it
    /// is left unchanged and the status carries [`LOAD_ERROR_MESSAGE`].
    pub fn finish_load(
        &mut self,
        generation: LoadGeneration,
        result: Result<Vec<Product>, FetchError>,
    ) -> bool {
        if generation.0 != self.generation {
            debug!(
                stale = generation.0,
                current = self.generation,
                "discarding superseded catalog load"
            );
            return false;
        }
        match result {
            Ok(products) => {
                info!(count = products.len(), "catalog loaded");
                self.snapshot = products;
                self.status = LoadStatus::Success;
            }
            Err(err) => {
                warn!(error = %err, "catalog load failed");
                self.status = LoadStatus::Error(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    /// Load the catalog from `source`, awaiting the fetch in place.
    ///
    /// The exclusive borrow serializes callers, so the generation check is
    /// only load-bearing for hosts that use the split begin/finish form.
    pub async fn load<S: ProductSource + ?Sized>(&mut self, source: &S) {
        let generation = self.begin_load();
        let result = source.fetch_products().await;
        self.finish_load(generation, result);
    }

    /// Toggle the category filter (re-selecting the active value clears it).
    pub fn select_category(&mut self, category: &str) {
        self.selection.toggle_category(category);
    }

    /// Toggle the minimum-rating filter.
    pub fn select_min_rating(&mut self, rating: f64) {
        self.selection.toggle_min_rating(rating);
    }

    /// Set the sort order.
    pub fn select_sort(&mut self, sort: SortOption) {
        self.selection.set_sort(sort);
    }

    /// Reset all filters and the sort order to their defaults.
    pub fn clear_filters(&mut self) {
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shopfront_catalog::Rating;

    fn product(id: u64, title: &str, price: f64, category: &str, rate: Option<f64>) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: Rating {
                rate,
                count: rate.map(|_| 5),
            },
        }
    }

    struct FixedSource(Vec<Product>);

    #[async_trait(?Send)]
    impl ProductSource for FixedSource {
        async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait(?Send)]
    impl ProductSource for FailingSource {
        async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
            Err(FetchError::Request("network unreachable".to_string()))
        }
    }

    #[test]
    fn test_initial_state() {
        let store = CatalogStore::new();
        assert_eq!(store.status(), &LoadStatus::Loading);
        assert!(store.snapshot().is_empty());
        assert_eq!(store.selection(), &FilterSelection::default());
    }

    #[tokio::test]
    async fn test_load_success_replaces_snapshot() {
        let mut store = CatalogStore::new();
        let source = FixedSource(vec![
            product(1, "B", 10.0, "x", Some(4.0)),
            product(2, "A", 5.0, "y", Some(2.0)),
        ]);

        store.load(&source).await;
        assert_eq!(store.status(), &LoadStatus::Success);
        assert_eq!(store.snapshot().len(), 2);
        assert_eq!(store.categories(), vec!["x", "y"]);
    }

    #[tokio::test]
    async fn test_load_failure_sets_message_and_keeps_snapshot() {
        let mut store = CatalogStore::new();
        store.load(&FailingSource).await;

        assert_eq!(
            store.status(),
            &LoadStatus::Error(LOAD_ERROR_MESSAGE.to_string())
        );
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let mut store = CatalogStore::new();
        store.load(&FailingSource).await;
        assert!(matches!(store.status(), LoadStatus::Error(_)));

        let source = FixedSource(vec![product(1, "A", 1.0, "x", None)]);
        store.load(&source).await;
        assert_eq!(store.status(), &LoadStatus::Success);
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn test_superseded_load_is_discarded() {
        let mut store = CatalogStore::new();
        let first = store.begin_load();
        let second = store.begin_load();

        // The first load resolves after being superseded; nothing changes.
        let applied = store.finish_load(first, Ok(vec![product(9, "Stale", 1.0, "x", None)]));
        assert!(!applied);
        assert_eq!(store.status(), &LoadStatus::Loading);
        assert!(store.snapshot().is_empty());

        let applied = store.finish_load(second, Ok(vec![product(1, "Fresh", 1.0, "x", None)]));
        assert!(applied);
        assert_eq!(store.status(), &LoadStatus::Success);
        assert_eq!(store.snapshot()[0].title, "Fresh");
    }

    #[test]
    fn test_stale_failure_does_not_clobber_success() {
        let mut store = CatalogStore::new();
        let first = store.begin_load();
        let second = store.begin_load();

        assert!(store.finish_load(second, Ok(vec![product(1, "A", 1.0, "x", None)])));
        assert!(!store.finish_load(first, Err(FetchError::Request("late".into()))));
        assert_eq!(store.status(), &LoadStatus::Success);
    }

    #[test]
    fn test_filter_intents_drive_derived_views() {
        let mut store = CatalogStore::new();
        let generation = store.begin_load();
        store.finish_load(
            generation,
            Ok(vec![
                product(1, "B", 10.0, "x", Some(4.0)),
                product(2, "A", 5.0, "y", Some(2.0)),
            ]),
        );

        assert_eq!(ids(&store.filtered_products()), vec![2, 1]);

        store.select_category("x");
        assert_eq!(ids(&store.filtered_products()), vec![1]);

        // Toggling the same category clears the filter.
        store.select_category("x");
        assert_eq!(ids(&store.filtered_products()), vec![2, 1]);

        store.select_min_rating(3.0);
        assert_eq!(ids(&store.filtered_products()), vec![1]);

        store.select_sort(SortOption::PriceDesc);
        store.clear_filters();
        assert_eq!(store.selection(), &FilterSelection::default());
    }

    #[test]
    fn test_product_lookup() {
        let mut store = CatalogStore::new();
        let generation = store.begin_load();
        store.finish_load(generation, Ok(vec![product(7, "A", 1.0, "x", None)]));
        assert_eq!(store.product(7).map(|p| p.id), Some(7));
        assert!(store.product(8).is_none());
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }
}
