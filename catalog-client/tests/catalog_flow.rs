// catalog-client/tests/catalog_flow.rs
// End-to-end form/collection flows against the mock products API

use catalog_api_mock::MockCatalog;
use catalog_client::{
    CatalogApi, ClientConfig, CollectionStore, Field, FormController, NetworkHttpClient, Product,
    ProductPayload, Submission,
};
use std::sync::Arc;

async fn setup() -> (CatalogApi<NetworkHttpClient>, CollectionStore, Arc<MockCatalog>) {
    let (addr, state) = catalog_api_mock::spawn().await.unwrap();
    let config = ClientConfig::new(format!("http://{}", addr)).with_timeout(5);
    let api = CatalogApi::new(config.build_http_client().unwrap());
    (api, CollectionStore::new(), state)
}

fn fill_widget(form: &mut FormController) {
    form.set_field(Field::ProductName, "Widget");
    form.set_field(Field::Price, "9.99");
    form.set_field(Field::Category, "Tools");
    form.set_field(Field::Image, "data:image/png;base64,AAA=");
}

#[tokio::test]
async fn create_submit_posts_exact_body_then_clears_and_refreshes() {
    let (api, mut store, state) = setup().await;
    let mut form = FormController::new();
    fill_widget(&mut form);

    let outcome = form.submit(&api, &mut store).await;

    assert_eq!(outcome, Submission::Created);
    assert_eq!(state.hits.create(), 1);
    assert_eq!(state.hits.list(), 1);

    let body = state.last_create().await.unwrap();
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "productName": "Widget",
            "price": "9.99",
            "category": "Tools",
            "image": "data:image/png;base64,AAA=",
        })
    );

    // Draft fully back to create mode
    assert_eq!(form.draft(), &Default::default());
    assert!(!form.is_editing());
    assert!(!form.has_errors());
    assert!(form.last_remote_error().is_none());

    // Refresh picked up the stored product, id assigned by the server
    assert_eq!(store.products().len(), 1);
    assert!(store.products()[0].id.is_some());
    assert_eq!(store.products()[0].product_name, "Widget");
}

#[tokio::test]
async fn edit_submit_puts_changed_field_and_returns_to_create_mode() {
    let (api, mut store, state) = setup().await;
    let seeded = state
        .seed(ProductPayload {
            product_name: "Old".to_string(),
            price: "5".to_string(),
            category: "X".to_string(),
            image: "data:image/png;base64,BBB=".to_string(),
        })
        .await;
    store.refresh(&api).await;

    let mut form = FormController::new();
    form.begin_edit(&store.products()[0]);
    form.set_field(Field::ProductName, "New");

    let outcome = form.submit(&api, &mut store).await;

    assert_eq!(outcome, Submission::Updated);
    assert_eq!(state.hits.update(), 1);
    assert_eq!(state.hits.create(), 0);

    let (id, body) = state.last_update().await.unwrap();
    assert_eq!(Some(id), seeded.id);
    assert_eq!(body.product_name, "New");
    assert_eq!(body.price, "5");
    assert_eq!(body.category, "X");
    assert_eq!(body.image, "data:image/png;base64,BBB=");

    assert!(!form.is_editing());
    assert_eq!(form.draft(), &Default::default());
    assert_eq!(store.products()[0].product_name, "New");
}

#[tokio::test]
async fn delete_issues_one_delete_and_one_refresh() {
    let (api, mut store, state) = setup().await;
    let seeded = state
        .seed(ProductPayload {
            product_name: "Widget".to_string(),
            price: "1".to_string(),
            category: "Tools".to_string(),
            image: "data:image/png;base64,AAA=".to_string(),
        })
        .await;

    let mut form = FormController::new();
    form.delete_product(seeded.id.as_deref().unwrap(), &api, &mut store)
        .await;

    assert_eq!(state.hits.delete(), 1);
    assert_eq!(state.hits.list(), 1);
    assert!(store.products().is_empty());
    assert!(form.last_remote_error().is_none());
}

#[tokio::test]
async fn delete_of_unknown_id_still_refreshes() {
    let (api, mut store, state) = setup().await;

    let mut form = FormController::new();
    form.delete_product("999", &api, &mut store).await;

    assert_eq!(state.hits.delete(), 1);
    assert_eq!(state.hits.list(), 1);
    assert!(form.last_remote_error().is_some());
}

#[tokio::test]
async fn validation_failure_sends_nothing_and_keeps_draft() {
    let (api, mut store, state) = setup().await;

    let mut form = FormController::new();
    form.set_field(Field::Price, "1");
    form.set_field(Field::Category, "C");
    form.set_field(Field::Image, "data:image/png;base64,AAA=");

    let outcome = form.submit(&api, &mut store).await;

    assert_eq!(outcome, Submission::Rejected);
    assert!(form.has_errors());
    assert_eq!(form.draft().price, "1");
    assert_eq!(state.hits.create(), 0);
    assert_eq!(state.hits.update(), 0);
    assert_eq!(state.hits.list(), 0);
}

#[tokio::test]
async fn submit_clears_draft_even_when_remote_rejects() {
    // Observed behavior: no rollback on remote failure; the error is
    // only recorded for an interested rendering layer.
    let (api, mut store, state) = setup().await;
    state.set_fail_writes(true);

    let mut form = FormController::new();
    fill_widget(&mut form);

    let outcome = form.submit(&api, &mut store).await;

    assert_eq!(outcome, Submission::Created);
    assert_eq!(state.hits.create(), 1);
    assert_eq!(state.hits.list(), 1);
    assert!(form.last_remote_error().is_some());
    assert_eq!(form.draft(), &Default::default());
    assert!(store.products().is_empty());
}

#[tokio::test]
async fn edit_target_without_id_is_rejected_locally() {
    let (api, mut store, state) = setup().await;

    let orphan = Product {
        id: None,
        product_name: "Ghost".to_string(),
        price: "1".to_string(),
        category: "C".to_string(),
        image: "data:image/png;base64,AAA=".to_string(),
    };

    let mut form = FormController::new();
    form.begin_edit(&orphan);

    let outcome = form.submit(&api, &mut store).await;

    assert_eq!(outcome, Submission::Rejected);
    assert_eq!(state.hits.update(), 0);
    assert_eq!(state.hits.list(), 0);
}

#[tokio::test]
async fn refresh_failure_keeps_previous_list() {
    let (api, mut store, state) = setup().await;
    state
        .seed(ProductPayload {
            product_name: "Widget".to_string(),
            price: "1".to_string(),
            category: "Tools".to_string(),
            image: "data:image/png;base64,AAA=".to_string(),
        })
        .await;
    store.refresh(&api).await;
    assert_eq!(store.products().len(), 1);
    assert!(store.last_error().is_none());

    // Nothing listens on this address
    let dead = ClientConfig::new("http://127.0.0.1:9")
        .with_timeout(1)
        .build_http_client()
        .unwrap();
    let dead_api = CatalogApi::new(dead);

    store.refresh(&dead_api).await;

    assert_eq!(store.products().len(), 1);
    assert!(store.last_error().is_some());

    // A later successful refresh clears the recorded error
    store.refresh(&api).await;
    assert!(store.last_error().is_none());
}

#[tokio::test]
async fn set_image_from_file_stages_data_url_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("first.png");
    let jpg = dir.path().join("second.jpg");
    std::fs::write(&png, b"png bytes").unwrap();
    std::fs::write(&jpg, b"jpg bytes").unwrap();

    let mut form = FormController::new();
    form.set_image_from_file(&png).await.unwrap();
    assert!(form.draft().image.starts_with("data:image/png;base64,"));

    form.set_image_from_file(&jpg).await.unwrap();
    let image = form.draft().image.clone();
    assert!(image.starts_with("data:image/jpeg;base64,"));
    assert_eq!(shared::data_url::decode(&image).unwrap(), b"jpg bytes");
}

#[tokio::test]
async fn unreadable_file_leaves_image_untouched() {
    let dir = tempfile::tempdir().unwrap();

    let mut form = FormController::new();
    form.set_field(Field::Image, "data:image/png;base64,AAA=");

    let missing = dir.path().join("nope.png");
    assert!(form.set_image_from_file(&missing).await.is_err());
    assert_eq!(form.draft().image, "data:image/png;base64,AAA=");
}

#[tokio::test]
async fn full_lifecycle_create_edit_delete() {
    let (api, mut store, state) = setup().await;
    let mut form = FormController::new();

    // Initial load of an empty catalog
    store.refresh(&api).await;
    assert!(store.products().is_empty());

    // Create
    fill_widget(&mut form);
    form.submit(&api, &mut store).await;
    assert_eq!(store.products().len(), 1);

    // Edit
    let listed = store.products()[0].clone();
    form.begin_edit(&listed);
    form.set_field(Field::Price, "12.50");
    form.submit(&api, &mut store).await;
    assert_eq!(store.products()[0].price, "12.50");
    assert_eq!(store.products()[0].id, listed.id);

    // Delete
    let id = store.products()[0].id.clone().unwrap();
    form.delete_product(&id, &api, &mut store).await;
    assert!(store.products().is_empty());
    assert!(state.products().await.is_empty());
}
