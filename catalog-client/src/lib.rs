//! Catalog Client - HTTP client for the products API
//!
//! Provides the typed REST calls for the product collection, the
//! collection store that mirrors it, and the form controller that
//! drives create/update/delete from user input.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod store;

pub use api::CatalogApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{Field, FieldErrors, FormController, FormDraft, Submission};
pub use http::{HttpClient, NetworkHttpClient};
pub use store::CollectionStore;

// Re-export shared types for convenience
pub use shared::{Product, ProductPayload};
