//! Form controller
//!
//! Owns the transient product draft and drives create/update/delete
//! against the remote collection. Two modes: create (no edit target)
//! and edit (draft seeded from an existing product). Every dispatched
//! mutation is followed by exactly one collection refresh.

use std::path::Path;

use crate::{
    ClientResult,
    api::CatalogApi,
    http::HttpClient,
    store::CollectionStore,
};
use shared::{Product, ProductPayload, data_url};

/// Editable draft fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProductName,
    Price,
    Category,
    Image,
}

/// Per-field validation messages; empty means the draft is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub product_name: Option<&'static str>,
    pub price: Option<&'static str>,
    pub category: Option<&'static str>,
    pub image: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.product_name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.image.is_none()
    }

    fn check(draft: &FormDraft) -> Self {
        fn blank(s: &str) -> bool {
            s.trim().is_empty()
        }
        Self {
            product_name: blank(&draft.product_name).then_some("Product name is required"),
            price: blank(&draft.price).then_some("Price is required"),
            category: blank(&draft.category).then_some("Category is required"),
            image: blank(&draft.image).then_some("Image is required"),
        }
    }
}

/// Transient, unsaved product fields bound to the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub product_name: String,
    pub price: String,
    pub category: String,
    pub image: String,
}

impl FormDraft {
    fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            product_name: self.product_name.clone(),
            price: self.price.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
        }
    }
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Validation failed (or the edit target had no id); nothing was sent
    Rejected,
    /// A create request was dispatched
    Created,
    /// An update request was dispatched
    Updated,
}

/// Controller for the product form
#[derive(Debug, Default)]
pub struct FormController {
    draft: FormDraft,
    editing: Option<Product>,
    errors: FieldErrors,
    last_remote_error: Option<String>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft contents
    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Product being edited, if in edit mode
    pub fn editing(&self) -> Option<&Product> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Validation messages from the last submit attempt
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether the last submit attempt failed validation
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error message from the last failed remote call, cleared on success
    ///
    /// The observed UI ignores remote failures entirely; the message is
    /// recorded here so a rendering layer can surface it.
    pub fn last_remote_error(&self) -> Option<&str> {
        self.last_remote_error.as_deref()
    }

    /// Update a single draft field; no side effects
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::ProductName => self.draft.product_name = value,
            Field::Price => self.draft.price = value,
            Field::Category => self.draft.category = value,
            Field::Image => self.draft.image = value,
        }
    }

    /// Read a file and stage it as the draft image, data-URL encoded
    ///
    /// The MIME type is guessed from the file extension. On read failure
    /// the draft's image is left untouched. Sequential awaits make
    /// back-to-back calls last-write-wins.
    pub async fn set_image_from_file(&mut self, path: impl AsRef<Path>) -> ClientResult<()> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        self.draft.image = data_url::encode(mime.essence_str(), &bytes);
        Ok(())
    }

    /// Check required fields, recording per-field messages
    ///
    /// Returns the request payload when every required field is present.
    pub fn validate(&mut self) -> Option<ProductPayload> {
        self.errors = FieldErrors::check(&self.draft);
        if self.errors.is_empty() {
            Some(self.draft.to_payload())
        } else {
            None
        }
    }

    /// Enter edit mode, seeding every draft field from the product
    pub fn begin_edit(&mut self, product: &Product) {
        self.draft = FormDraft {
            product_name: product.product_name.clone(),
            price: product.price.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
        };
        self.editing = Some(product.clone());
        self.errors = FieldErrors::default();
    }

    /// Discard the draft and return to create mode
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Validate and dispatch create-or-update, then refresh the collection
    ///
    /// On validation failure nothing is sent and the draft is kept. On
    /// success the draft is reset and the store refreshed exactly once,
    /// whether or not the remote call succeeded (matching the observed
    /// behavior; the failure is recorded in `last_remote_error`).
    pub async fn submit<C: HttpClient>(
        &mut self,
        api: &CatalogApi<C>,
        store: &mut CollectionStore,
    ) -> Submission {
        let Some(payload) = self.validate() else {
            return Submission::Rejected;
        };

        let (result, outcome) = match self.editing.as_ref() {
            Some(product) => {
                let Some(id) = product.id.as_deref() else {
                    // Listed products always carry an id; an id-less edit
                    // target cannot be addressed remotely.
                    tracing::warn!("edit target has no id, submit dropped");
                    return Submission::Rejected;
                };
                (api.update(id, &payload).await.map(|_| ()), Submission::Updated)
            }
            None => (api.create(&payload).await.map(|_| ()), Submission::Created),
        };

        match result {
            Ok(()) => self.last_remote_error = None,
            Err(e) => {
                tracing::warn!("product submit failed: {}", e);
                self.last_remote_error = Some(e.to_string());
            }
        }

        self.reset();
        store.refresh(api).await;
        outcome
    }

    /// Dispatch a delete, then refresh the collection
    ///
    /// The refresh happens regardless of the delete's outcome.
    pub async fn delete_product<C: HttpClient>(
        &mut self,
        id: &str,
        api: &CatalogApi<C>,
        store: &mut CollectionStore,
    ) {
        match api.delete(id).await {
            Ok(()) => self.last_remote_error = None,
            Err(e) => {
                tracing::warn!("product delete failed: {}", e);
                self.last_remote_error = Some(e.to_string());
            }
        }
        store.refresh(api).await;
    }

    fn reset(&mut self) {
        self.draft = FormDraft::default();
        self.editing = None;
        self.errors = FieldErrors::default();
    }
}
