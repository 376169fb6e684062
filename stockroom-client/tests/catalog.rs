// stockroom-client/tests/catalog.rs
// List controller against the in-process mock backend

mod common;

use std::time::Duration;

use common::{config, gets, setup};
use serde_json::json;
use shared::models::CatalogEntityCreate;
use stockroom_client::catalog::resource::{Brands, Categories, SubCategories};
use stockroom_client::{
    Attachment, CatalogController, ClientError, FetchOutcome, ListQuery, LoadState, NoticeLevel,
    OneshotHttpClient, Status,
};
use stockroom_mock::{MockState, ResourceKind};

#[tokio::test]
async fn test_create_category_then_toggle_status() {
    let (state, client) = setup(MockState::new());
    let categories = CatalogController::<_, Categories>::new(client, &config());

    assert_eq!(categories.refresh().await, FetchOutcome::Applied);
    assert!(categories.items().await.is_empty());

    categories.open_create().await;
    let message = categories
        .create(&CatalogEntityCreate::new("Computers").with_status(Status::Active), None)
        .await
        .unwrap();
    assert_eq!(message, "Category created successfully");
    assert!(!categories.form().await.open);

    let items = categories.items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Computers");
    assert_eq!(items[0].status, Status::Active);
    assert_eq!(categories.pagination().await.current_page, 1);

    let next = categories.toggle_status(&items[0]).await.unwrap();
    assert_eq!(next, Status::Inactive);

    categories.refresh().await;
    assert_eq!(categories.items().await[0].status, Status::Inactive);
    assert_eq!(
        state.get(ResourceKind::Categories, items[0].id).unwrap()["status"],
        "inactive"
    );
}

#[tokio::test]
async fn test_deleting_last_row_of_page_three_fetches_page_two() {
    let state = MockState::new();
    state.seed(ResourceKind::Categories, 21, |i| json!({ "name": format!("Category {i}") }));
    let (state, client) = setup(state);
    let categories = CatalogController::<_, Categories>::new(client, &config());

    categories.refresh().await;
    assert_eq!(categories.pagination().await.total_pages, 3);
    assert_eq!(categories.go_to_page(3).await, Some(FetchOutcome::Applied));

    let items = categories.items().await;
    assert_eq!(items.len(), 1);

    state.clear_requests().await;
    assert!(categories.delete(items[0].id, || true).await.unwrap());

    let refetches = gets(&state, "/api/categories").await;
    assert_eq!(refetches.len(), 1);
    assert_eq!(refetches[0].param("page"), Some("2"));

    let pagination = categories.pagination().await;
    assert_eq!(pagination.current_page, 2);
    assert_eq!(pagination.total_pages, 2);
    assert_eq!(categories.items().await.len(), 10);
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let state = MockState::new();
    state.seed(ResourceKind::Brands, 2, |i| json!({ "name": format!("Brand {i}") }));
    let (state, client) = setup(state);
    let brands = CatalogController::<_, Brands>::new(client, &config());

    assert!(!brands.delete(1, || false).await.unwrap());
    assert!(state.requests().await.is_empty());
    assert_eq!(state.count(ResourceKind::Brands), 2);
}

#[tokio::test]
async fn test_out_of_range_pages_are_ignored() {
    let state = MockState::new();
    state.seed(ResourceKind::Brands, 95, |i| json!({ "name": format!("Brand {i}") }));
    let (state, client) = setup(state);
    let brands = CatalogController::<_, Brands>::new(client, &config());

    brands.refresh().await;
    assert_eq!(brands.pagination().await.total_pages, 10);

    state.clear_requests().await;
    assert_eq!(brands.go_to_page(0).await, None);
    assert_eq!(brands.go_to_page(11).await, None);
    assert_eq!(brands.pagination().await.current_page, 1);
    assert!(state.requests().await.is_empty());

    assert_eq!(brands.go_to_page(10).await, Some(FetchOutcome::Applied));
    assert_eq!(brands.items().await.len(), 5);
}

#[tokio::test]
async fn test_filters_and_page_size_reset_to_first_page() {
    let state = MockState::new();
    state.seed(ResourceKind::Brands, 30, |i| {
        let status = if i % 3 == 0 { "inactive" } else { "active" };
        json!({ "name": format!("Brand {i}"), "status": status })
    });
    let (_state, client) = setup(state);
    let brands = CatalogController::<_, Brands>::new(client, &config());

    brands.refresh().await;
    brands.go_to_page(2).await;

    brands.set_filter("status", "inactive").await;
    let snapshot = brands.snapshot().await;
    assert_eq!(snapshot.pagination.current_page, 1);
    assert_eq!(snapshot.pagination.total_items, 10);
    assert!(snapshot.items.iter().all(|b| b.status == Status::Inactive));

    assert_eq!(brands.clear_filter("status").await, Some(FetchOutcome::Applied));
    assert_eq!(brands.clear_filter("status").await, None);
    assert_eq!(brands.pagination().await.total_items, 30);

    assert_eq!(brands.set_per_page(0).await, None);
    brands.set_per_page(25).await;
    let pagination = brands.pagination().await;
    assert_eq!(pagination.per_page, 25);
    assert_eq!(pagination.total_pages, 2);
}

#[tokio::test(start_paused = true)]
async fn test_search_is_debounced() {
    let state = MockState::new();
    state.seed(ResourceKind::Brands, 3, |i| json!({ "name": format!("abc {i}") }));
    let (state, client) = setup(state);
    let brands = CatalogController::<_, Brands>::new(client, &config());

    let (first, second, third) = tokio::join!(
        brands.search("a"),
        async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            brands.search("ab").await
        },
        async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            brands.search("abc").await
        },
    );

    assert_eq!(first, None);
    assert_eq!(second, None);
    assert_eq!(third, Some(FetchOutcome::Applied));

    let requests = gets(&state, "/api/brands").await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].param("keyword"), Some("abc"));
    assert_eq!(brands.items().await.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_stale_search_response_is_discarded() {
    let state = MockState::new();
    for name in ["Abacus", "Alpha", "Kebab", "Beta"] {
        state.insert(ResourceKind::Brands, json!({ "name": name }));
    }
    state.set_keyword_latency("a", Duration::from_millis(300));
    let (_state, client) = setup(state);
    let brands = CatalogController::<_, Brands>::new(client, &config());

    let (slow, fast) = tokio::join!(brands.search_now("a"), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        brands.search_now("ab").await
    });

    assert_eq!(slow, FetchOutcome::Stale);
    assert_eq!(fast, FetchOutcome::Applied);

    let snapshot = brands.snapshot().await;
    assert_eq!(snapshot.query.keyword.as_deref(), Some("ab"));
    assert_eq!(snapshot.load_state, LoadState::Loaded);
    let names: Vec<_> = snapshot.items.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Abacus", "Kebab"]);
}

#[tokio::test]
async fn test_validation_errors_keep_form_open() {
    let (state, client) = setup(MockState::new());
    let categories = CatalogController::<_, Categories>::new(client, &config());
    let mut notices = categories.subscribe();

    categories.open_create().await;
    let err = categories
        .create(&CatalogEntityCreate::new(""), None)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation { .. }));

    let form = categories.form().await;
    assert!(form.open);
    assert_eq!(form.errors.first_message(), Some("The name field is required."));

    let notice = notices.try_recv().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "The name field is required.");

    // nothing refetched after a failed save
    assert!(gets(&state, "/api/categories").await.is_empty());
}

#[tokio::test]
async fn test_fetch_failure_clears_list() {
    let client = std::sync::Arc::new(OneshotHttpClient::new(axum::Router::new()));
    let brands = CatalogController::<_, Brands>::new(client, &config());
    let mut notices = brands.subscribe();

    assert_eq!(brands.refresh().await, FetchOutcome::Failed);
    assert!(brands.items().await.is_empty());
    assert_eq!(
        brands.load_state().await,
        LoadState::Error("Failed to fetch brands".to_string())
    );
    assert_eq!(notices.try_recv().unwrap().message, "Failed to fetch brands");
}

#[tokio::test(start_paused = true)]
async fn test_same_row_operation_is_rejected_while_busy() {
    let state = MockState::new();
    state.seed(ResourceKind::Brands, 3, |i| json!({ "name": format!("slow {i}") }));
    // the refetch after each delete is held up so the first delete stays in flight
    state.set_keyword_latency("slow", Duration::from_millis(100));
    let (state, client) = setup(state);
    let brands = CatalogController::<_, Brands>::new(client, &config())
        .with_query(ListQuery::new(1, 10).with_keyword("slow"));

    let (first, second, other) = tokio::join!(
        brands.delete(1, || true),
        brands.delete(1, || true),
        brands.delete(2, || true),
    );

    assert!(first.unwrap());
    assert!(matches!(second, Err(ClientError::Busy(ref key)) if key == "delete-1"));
    assert!(other.unwrap());
    assert_eq!(state.count(ResourceKind::Brands), 1);
    assert_eq!(state.request_count("DELETE", "/api/brands/1").await, 1);
}

#[tokio::test]
async fn test_full_record_status_toggle_passes_update_validation() {
    let state = MockState::new();
    state.insert(ResourceKind::SubCategories, json!({ "name": "Laptops", "cat_id": 1 }));
    let (state, client) = setup(state);
    let subs = CatalogController::<_, SubCategories>::new(client, &config());

    subs.refresh().await;
    let item = subs.items().await.remove(0);
    assert_eq!(subs.toggle_status(&item).await.unwrap(), Status::Inactive);

    let row = state.get(ResourceKind::SubCategories, 1).unwrap();
    assert_eq!(row["status"], "inactive");
    assert_eq!(row["cat_id"], 1);
}

#[tokio::test]
async fn test_update_with_attachment_uses_put_multipart() {
    let state = MockState::new();
    state.insert(ResourceKind::Brands, json!({ "name": "Acme" }));
    let (state, client) = setup(state);
    let brands = CatalogController::<_, Brands>::new(client, &config());

    brands.refresh().await;
    let brand = brands.items().await.remove(0);
    brands.open_edit(brand.clone()).await;
    assert!(brands.form().await.is_editing());

    let logo = Attachment::new("image", "acme.png", vec![0x89, 0x50, 0x4e, 0x47]);
    let message = brands
        .update(brand.id, &CatalogEntityCreate::new("Acme Corp"), Some(logo))
        .await
        .unwrap();
    assert_eq!(message, "Brand updated successfully");
    assert_eq!(state.request_count("PUT", "/api/brands/1").await, 1);

    let updated = brands.items().await.remove(0);
    assert_eq!(updated.name, "Acme Corp");
    assert_eq!(updated.image.as_deref(), Some("uploads/acme.png"));
    assert!(!brands.form().await.open);
}
