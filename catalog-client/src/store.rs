//! Collection store
//!
//! The authoritative, display-ready list of products. The list is never
//! patched incrementally; every successful fetch replaces it wholesale,
//! and every mutation is followed by exactly one refresh.

use crate::{api::CatalogApi, http::HttpClient};
use shared::Product;

/// In-memory mirror of the remote product collection
#[derive(Debug, Default)]
pub struct CollectionStore {
    products: Vec<Product>,
    last_error: Option<String>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current collection
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Error message from the last failed refresh, cleared on success
    ///
    /// A failed refresh is otherwise silent: the previous list stays in
    /// place and no error is returned to the caller. A rendering layer
    /// may surface this state if it wants to.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Re-fetch the whole collection, replacing local state on success
    pub async fn refresh<C: HttpClient>(&mut self, api: &CatalogApi<C>) {
        match api.list().await {
            Ok(products) => {
                self.products = products;
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!("collection refresh failed: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }
}
