//! Product repository for Shopfront.
//!
//! One outbound concern lives here: fetching the product catalog from its
//! REST endpoint and decoding the JSON array into [`Product`] records. The
//! [`ProductSource`] trait is the seam the stores depend on, so tests and
//! alternative hosts can substitute an in-memory source.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_data::{ProductSource, ProductsClient};
//!
//! let client = ProductsClient::new();
//! let products = client.fetch_products().await?;
//! ```

mod error;

pub use error::FetchError;

use async_trait::async_trait;
use shopfront_catalog::Product;
use tracing::debug;

/// The catalog endpoint queried by the default client.
pub const DEFAULT_PRODUCTS_URL: &str = "https://fakestoreapi.com/products";

/// Timeout applied to the catalog request on native targets.
#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// A source of catalog products.
///
/// `fetch_products` emits the whole catalog once per call and never retries
/// internally; retry policy belongs to the caller. Futures are not required
/// to be `Send` because the client runs on a single-threaded event loop.
#[async_trait(?Send)]
pub trait ProductSource {
    /// Fetch the full catalog.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

/// HTTP implementation of [`ProductSource`].
///
/// Performs exactly one GET per `fetch_products` call against a fixed
/// endpoint, with no headers or authentication.
#[derive(Debug, Clone)]
pub struct ProductsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl Default for ProductsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductsClient {
    /// Create a client pointing at the default catalog endpoint.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_PRODUCTS_URL.to_string(),
        }
    }

    /// Override the catalog endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The endpoint this client queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl ProductSource for ProductsClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        debug!(endpoint = %self.endpoint, "fetching product catalog");

        let request = self.http.get(&self.endpoint);
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(REQUEST_TIMEOUT);

        let response = request.send().await.map_err(FetchError::from)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(FetchError::from)?;
        let products: Vec<Product> = serde_json::from_str(&body)?;
        debug!(count = products.len(), "product catalog decoded");
        Ok(products)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchError, ProductSource, ProductsClient, DEFAULT_PRODUCTS_URL};
}
