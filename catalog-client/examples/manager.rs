// catalog-client/examples/manager.rs
// Drives a catalog session against a running products API.
// Start one with: cargo run -p catalog-api-mock

use catalog_client::{CatalogApi, ClientConfig, CollectionStore, Field, FormController};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::var("CATALOG_API_URL")
        .unwrap_or_else(|_| "http://localhost:3001".to_string());

    let config = ClientConfig::new(&base_url);
    let api = CatalogApi::new(config.build_http_client()?);
    let mut store = CollectionStore::new();
    let mut form = FormController::new();

    store.refresh(&api).await;
    tracing::info!("{} products in catalog", store.products().len());

    // Create a product the way the form would
    form.set_field(Field::ProductName, "Demo Widget");
    form.set_field(Field::Price, "9.99");
    form.set_field(Field::Category, "Demo");
    form.set_field(Field::Image, "data:image/png;base64,iVBORw0KGgo=");

    let outcome = form.submit(&api, &mut store).await;
    tracing::info!("submit outcome: {:?}", outcome);

    for product in store.products() {
        tracing::info!(
            "{}  {}  ${}  [{}]",
            product.id.as_deref().unwrap_or("-"),
            product.product_name,
            product.price,
            product.category
        );
    }

    // Edit the first listed product, then clean up
    if let Some(first) = store.products().first().cloned() {
        form.begin_edit(&first);
        form.set_field(Field::Price, "12.50");
        form.submit(&api, &mut store).await;

        if let Some(id) = first.id.as_deref() {
            form.delete_product(id, &api, &mut store).await;
        }
    }

    tracing::info!("{} products after cleanup", store.products().len());
    Ok(())
}
