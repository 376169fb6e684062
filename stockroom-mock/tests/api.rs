// stockroom-mock/tests/api.rs
// Router tests through tower oneshot

use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use stockroom_mock::{MockState, ResourceKind, router};
use tower::ServiceExt;

async fn call(state: &MockState, request: Request<Body>) -> (StatusCode, Value) {
    let response = router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_catalog_list_uses_nested_envelope() {
    let state = MockState::new();
    state.seed(ResourceKind::Brands, 12, |i| json!({ "name": format!("Brand {i}") }));

    let (status, body) = call(&state, get("/api/brands?page=2&limit=5")).await;
    assert_eq!(status, StatusCode::OK);
    let page = &body["pagination"];
    assert_eq!(page["current_page"], 2);
    assert_eq!(page["total_items"], 12);
    assert_eq!(page["total_pages"], 3);
    assert_eq!(page["data"][0]["name"], "Brand 6");
}

#[tokio::test]
async fn test_stock_list_uses_flat_envelope() {
    let state = MockState::new();
    state.insert(
        ResourceKind::Stocks,
        json!({ "product_id": 1, "vendor_id": 1, "warehouse_id": 1, "quantity": 1 }),
    );

    let (_, body) = call(&state, get("/api/stocks")).await;
    assert_eq!(body["totalItems"], 1);
    assert_eq!(body["perPage"], 10);
    assert!(body.get("pagination").is_none());
}

#[tokio::test]
async fn test_create_validation_and_missing_rows() {
    let state = MockState::new();

    let (status, body) = call(&state, json_request("POST", "/api/categories", json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["name"][0], "The name field is required.");

    let (status, body) = call(&state, json_request("POST", "/api/categories", json!({ "name": "Computers" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Category created successfully");
    assert_eq!(body["data"]["status"], "active");

    let (status, body) = call(&state, json_request("PUT", "/api/categories/99", json!({ "name": "X" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Category 99 not found");

    let (status, _) = call(&state, get("/api/orders")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_multipart_create_stores_image_path() {
    let state = MockState::new();
    let boundary = "XBOUNDARY";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nPhones\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"cat_id\"\r\n\r\n4\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"phones.png\"\r\n\
         Content-Type: image/png\r\n\r\nPNG\r\n--{b}--\r\n",
        b = boundary
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/sub-categories")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();

    let (status, body) = call(&state, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["image"], "uploads/phones.png");
    assert_eq!(body["data"]["cat_id"], 4);
}

#[tokio::test]
async fn test_reports_and_dashboard() {
    let state = MockState::with_demo_data();

    let (status, body) = call(&state, get("/api/reports/employees")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 2);

    let (status, _) = call(&state, get("/api/reports/payroll")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = call(&state, get("/api/dashboard")).await;
    assert_eq!(body["data"]["total_products"], 2);

    assert_eq!(state.request_count("GET", "/api/dashboard").await, 1);
}

#[tokio::test]
async fn test_huge_page_number_returns_empty_page() {
    let state = MockState::new();
    state.seed(ResourceKind::Brands, 3, |i| json!({ "name": format!("Brand {i}") }));

    let (status, body) = call(
        &state,
        get("/api/brands?page=18446744073709551615&limit=10"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["data"], json!([]));
    assert_eq!(body["pagination"]["total_items"], 3);

    let (_, body) = call(&state, get("/api/brands?limit=999999")).await;
    assert_eq!(body["pagination"]["per_page"], 1000);
    assert_eq!(body["pagination"]["data"].as_array().map(Vec::len), Some(3));
}
