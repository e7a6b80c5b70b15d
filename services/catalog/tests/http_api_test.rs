//! HTTP 接口测试（进程内路由 + 内存仓储）

mod support;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use sportshop_catalog::application::CategoryPolicy;
use tower::ServiceExt;

use support::{TestCatalog, unavailable_router};

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

fn running_shoes() -> Value {
    json!({
        "name": "Running Shoes",
        "category": "Footwear",
        "price": 29.99,
        "stock": 10,
        "brand": "Acme"
    })
}

#[tokio::test]
async fn test_create_returns_created_product() {
    let catalog = TestCatalog::new(CategoryPolicy::AutoCreate, &[]);
    let app = catalog.router();

    let (status, body) = send(&app, Method::POST, "/products", Some(running_shoes())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Running Shoes");
    assert_eq!(body["price"], 29.99);
    assert_eq!(body["stock"], 10);
    assert_eq!(body["category_id"], 1);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_with_invalid_fields_lists_them() {
    let catalog = TestCatalog::new(CategoryPolicy::AutoCreate, &[]);
    let app = catalog.router();

    let (status, body) = send(
        &app,
        Method::POST,
        "/products",
        Some(json!({ "name": "", "category": "Footwear", "price": 0, "stock": -3 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_object().unwrap();
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("price"));
    assert!(errors.contains_key("stock"));
    assert!(errors.contains_key("brand"));
    assert!(!errors.contains_key("category"));
    assert!(catalog.products.all().is_empty());
}

#[tokio::test]
async fn test_create_with_sub_cent_price_is_rejected() {
    let catalog = TestCatalog::new(CategoryPolicy::AutoCreate, &[]);
    let app = catalog.router();

    let mut body = running_shoes();
    body["price"] = json!(0.001);
    let (status, body) = send(&app, Method::POST, "/products", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["price"], json!(["Price must be greater than 0."]));
    assert!(catalog.products.all().is_empty());

    let mut body = running_shoes();
    body["price"] = json!(0.01);
    let (status, body) = send(&app, Method::POST, "/products", Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["price"], 0.01);
}

#[tokio::test]
async fn test_create_with_malformed_json_is_bad_request() {
    let catalog = TestCatalog::new(CategoryPolicy::AutoCreate, &[]);
    let app = catalog.router();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_under_strict_policy_with_unknown_category() {
    let catalog = TestCatalog::new(CategoryPolicy::Strict, &[]);
    let app = catalog.router();

    let (status, body) = send(&app, Method::POST, "/products", Some(running_shoes())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Category 'Footwear' does not exist.");
}

#[tokio::test]
async fn test_get_product_found_and_missing() {
    let catalog = TestCatalog::new(CategoryPolicy::AutoCreate, &[]);
    let app = catalog.router();
    send(&app, Method::POST, "/products", Some(running_shoes())).await;

    let (status, body) = send(&app, Method::GET, "/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brand"], "Acme");

    let (status, _) = send(&app, Method::GET, "/products/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_product_with_non_numeric_id_is_rejected() {
    let catalog = TestCatalog::new(CategoryPolicy::Strict, &[]);
    let (status, _) = send(&catalog.router(), Method::GET, "/products/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_and_filter_by_category() {
    let catalog = TestCatalog::new(CategoryPolicy::AutoCreate, &[]);
    let app = catalog.router();
    send(&app, Method::POST, "/products", Some(running_shoes())).await;
    send(
        &app,
        Method::POST,
        "/products",
        Some(json!({
            "name": "Jersey",
            "category": "Ropa",
            "price": 45.0,
            "stock": 3,
            "brand": "Acme"
        })),
    )
    .await;

    let (status, all) = send(&app, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (status, ropa) = send(&app, Method::GET, "/products/category/ROPA", None).await;
    assert_eq!(status, StatusCode::OK);
    let ropa = ropa.as_array().unwrap();
    assert_eq!(ropa.len(), 1);
    assert_eq!(ropa[0]["name"], "Jersey");
    assert_eq!(ropa[0]["category"]["code"], "Ropa");

    let (status, none) = send(&app, Method::GET, "/products/category/Golf", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn test_update_and_delete() {
    let catalog = TestCatalog::new(CategoryPolicy::AutoCreate, &[]);
    let app = catalog.router();
    send(&app, Method::POST, "/products", Some(running_shoes())).await;

    let mut changed = running_shoes();
    changed["stock"] = json!(0);
    let (status, _) = send(&app, Method::PUT, "/products/1", Some(changed)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, Method::GET, "/products/1", None).await;
    assert_eq!(body["stock"], 0);
    assert!(body["updated_at"].is_string());

    let (status, body) = send(&app, Method::PUT, "/products/77", Some(running_shoes())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Product with ID 77 not found.");

    let (status, _) = send(&app, Method::DELETE, "/products/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::DELETE, "/products/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(catalog.products.all().is_empty());
}

#[tokio::test]
async fn test_update_with_invalid_fields_lists_them() {
    let catalog = TestCatalog::new(CategoryPolicy::AutoCreate, &[]);
    let app = catalog.router();
    send(&app, Method::POST, "/products", Some(running_shoes())).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/products/1",
        Some(json!({ "name": "Trail Shoes", "category": "", "price": -5, "brand": "Acme" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_object().unwrap();
    assert!(errors.contains_key("category"));
    assert!(errors.contains_key("price"));
    assert!(errors.contains_key("stock"));
    assert!(!errors.contains_key("name"));
    assert!(!errors.contains_key("brand"));

    let stored = catalog.products.all();
    assert_eq!(stored[0].name(), "Running Shoes");
    assert!(stored[0].updated_at().is_none());
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let catalog = TestCatalog::new(CategoryPolicy::AutoCreate, &[]);
    let app = catalog.router();

    let (status, body) = send(&app, Method::GET, "/metrics/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "total_products": 0,
            "top_categories": [],
            "total_stock": 0,
            "average_price": 0.0
        })
    );

    send(&app, Method::POST, "/products", Some(running_shoes())).await;
    let (_, body) = send(&app, Method::GET, "/metrics/products", None).await;
    assert_eq!(body["total_products"], 1);
    assert_eq!(body["top_categories"], json!(["Footwear"]));
    assert_eq!(body["average_price"], 29.99);
}

#[tokio::test]
async fn test_unavailable_store_degrades_reads() {
    let app = unavailable_router();

    let (status, body) = send(&app, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, _) = send(&app, Method::GET, "/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, "/metrics/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "Error getting metrics." }));
}

#[tokio::test]
async fn test_unavailable_store_fails_writes() {
    let app = unavailable_router();

    let (status, _) = send(&app, Method::POST, "/products", Some(running_shoes())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::DELETE, "/products/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "An error occurred while deleting the product.");
}
