//! Data models
//!
//! Shared between the catalog client and the remote products API.
//! Wire field names are camelCase; IDs are opaque strings assigned
//! by the remote resource.

pub mod product;

// Re-exports
pub use product::*;
