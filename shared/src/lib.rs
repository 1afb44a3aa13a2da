//! Shared types for the product catalog
//!
//! Common types used by the catalog client and the mock API server:
//! the product model, request payloads, and data-URL helpers.

pub mod data_url;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Product, ProductPayload};
