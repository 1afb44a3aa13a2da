//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// `id` is assigned by the remote resource and absent until creation
/// succeeds; it is skipped on serialization when unset so create
/// payloads never carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "productName")]
    pub product_name: String,
    /// Raw input text; interpretation is the remote resource's job
    pub price: String,
    pub category: String,
    /// Data-URL encoded image (`data:<mime>;base64,<payload>`)
    #[serde(default)]
    pub image: String,
}

/// Create/update product payload
///
/// The request body for POST and PUT: `Product` minus `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(rename = "productName")]
    pub product_name: String,
    pub price: String,
    pub category: String,
    pub image: String,
}

impl Product {
    /// Build the persisted form of a payload with a server-assigned id
    pub fn from_payload(id: impl Into<String>, payload: ProductPayload) -> Self {
        Self {
            id: Some(id.into()),
            product_name: payload.product_name,
            price: payload.price,
            category: payload.category,
            image: payload.image,
        }
    }
}
