//! Typed calls for the remote product collection
//!
//! The full contract is four operations:
//!
//! | Operation | Method | Path            |
//! |-----------|--------|-----------------|
//! | list      | GET    | /products       |
//! | create    | POST   | /products       |
//! | update    | PUT    | /products/{id}  |
//! | delete    | DELETE | /products/{id}  |

use crate::{ClientResult, http::{HttpClient, NetworkHttpClient}};
use shared::{Product, ProductPayload};

/// Client for the remote product collection
#[derive(Debug, Clone)]
pub struct CatalogApi<C = NetworkHttpClient> {
    http: C,
}

impl<C: HttpClient> CatalogApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Fetch the entire collection
    pub async fn list(&self) -> ClientResult<Vec<Product>> {
        self.http.get("products").await
    }

    /// Create a product; the server assigns the id
    pub async fn create(&self, payload: &ProductPayload) -> ClientResult<Product> {
        self.http.post("products", payload).await
    }

    /// Replace the product with the given id
    pub async fn update(&self, id: &str, payload: &ProductPayload) -> ClientResult<Product> {
        self.http.put(&format!("products/{}", id), payload).await
    }

    /// Delete the product with the given id
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("products/{}", id)).await
    }
}
