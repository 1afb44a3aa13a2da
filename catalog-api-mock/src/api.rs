//! Products API routes and in-memory state

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use shared::{Product, ProductPayload};
use std::net::SocketAddr;
use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
};
use tokio::sync::{Mutex, RwLock};
use tower_http::trace::TraceLayer;

/// Per-route request counters
#[derive(Debug, Default)]
pub struct Hits {
    list: AtomicUsize,
    create: AtomicUsize,
    update: AtomicUsize,
    delete: AtomicUsize,
}

impl Hits {
    pub fn list(&self) -> usize {
        self.list.load(Ordering::SeqCst)
    }

    pub fn create(&self) -> usize {
        self.create.load(Ordering::SeqCst)
    }

    pub fn update(&self) -> usize {
        self.update.load(Ordering::SeqCst)
    }

    pub fn delete(&self) -> usize {
        self.delete.load(Ordering::SeqCst)
    }
}

/// Shared server state: the collection plus test instrumentation
#[derive(Debug)]
pub struct MockCatalog {
    products: RwLock<Vec<Product>>,
    next_id: AtomicU64,
    fail_writes: AtomicBool,
    pub hits: Hits,
    last_create: Mutex<Option<ProductPayload>>,
    last_update: Mutex<Option<(String, ProductPayload)>>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            fail_writes: AtomicBool::new(false),
            hits: Hits::default(),
            last_create: Mutex::new(None),
            last_update: Mutex::new(None),
        }
    }
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn assign_id(&self) -> String {
        self.next_id.fetch_add(1, Ordering::SeqCst).to_string()
    }

    /// Insert a product directly, bypassing the HTTP surface
    pub async fn seed(&self, payload: ProductPayload) -> Product {
        let product = Product::from_payload(self.assign_id(), payload);
        self.products.write().await.push(product.clone());
        product
    }

    /// Snapshot of the stored collection
    pub async fn products(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    /// Make every write route answer 500 until cleared
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Body of the last POST /products
    pub async fn last_create(&self) -> Option<ProductPayload> {
        self.last_create.lock().await.clone()
    }

    /// Target id and body of the last PUT /products/{id}
    pub async fn last_update(&self) -> Option<(String, ProductPayload)> {
        self.last_update.lock().await.clone()
    }
}

async fn list(State(state): State<Arc<MockCatalog>>) -> Json<Vec<Product>> {
    state.hits.list.fetch_add(1, Ordering::SeqCst);
    Json(state.products.read().await.clone())
}

async fn create(
    State(state): State<Arc<MockCatalog>>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), StatusCode> {
    state.hits.create.fetch_add(1, Ordering::SeqCst);
    *state.last_create.lock().await = Some(payload.clone());

    if state.fail_writes.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    let product = Product::from_payload(state.assign_id(), payload);
    state.products.write().await.push(product.clone());
    tracing::info!(id = ?product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

async fn update(
    State(state): State<Arc<MockCatalog>>,
    Path(id): Path<String>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, StatusCode> {
    state.hits.update.fetch_add(1, Ordering::SeqCst);
    *state.last_update.lock().await = Some((id.clone(), payload.clone()));

    if state.fail_writes.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    let mut products = state.products.write().await;
    let Some(existing) = products
        .iter_mut()
        .find(|p| p.id.as_deref() == Some(id.as_str()))
    else {
        return Err(StatusCode::NOT_FOUND);
    };

    *existing = Product::from_payload(id.clone(), payload);
    tracing::info!(%id, "product updated");
    Ok(Json(existing.clone()))
}

async fn delete(State(state): State<Arc<MockCatalog>>, Path(id): Path<String>) -> StatusCode {
    state.hits.delete.fetch_add(1, Ordering::SeqCst);

    if state.fail_writes.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    let mut products = state.products.write().await;
    let before = products.len();
    products.retain(|p| p.id.as_deref() != Some(id.as_str()));

    if products.len() < before {
        tracing::info!(%id, "product deleted");
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Build the products router over the given state
pub fn router(state: Arc<MockCatalog>) -> Router {
    Router::new()
        .route("/products", get(list).post(create))
        .route(
            "/products/{id}",
            axum::routing::put(update).delete(delete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind an ephemeral port and serve in the background
///
/// Returns the bound address and the state handle for assertions.
pub async fn spawn() -> std::io::Result<(SocketAddr, Arc<MockCatalog>)> {
    let state = Arc::new(MockCatalog::new());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = router(state.clone());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("mock server error: {}", e);
        }
    });

    Ok((addr, state))
}
