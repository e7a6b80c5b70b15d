//! 商品处理器

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sportshop_errors::AppError;

use crate::api::state::AppState;
use crate::application::ProductDraft;
use crate::domain::entities::Product;
use crate::domain::value_objects::ProductId;

const DELETE_FAILED: &str = "An error occurred while deleting the product.";

/// GET /products
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.product_service.get_all().await.into_value())
}

/// GET /products/{id}
pub async fn get_product(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let id = ProductId(id);
    match state.product_service.get_by_id(id).await.into_value() {
        Some(product) => Json(product).into_response(),
        None => AppError::not_found(format!("Product with ID {} not found.", id)).into_response(),
    }
}

/// GET /products/category/{name}
pub async fn list_products_by_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Vec<Product>> {
    Json(
        state
            .product_service
            .get_by_category_name(&name)
            .await
            .into_value(),
    )
}

/// POST /products
pub async fn create_product(State(state): State<AppState>, draft: ProductDraft) -> Response {
    match state.product_service.create(draft).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => e.respond_with(StatusCode::BAD_REQUEST),
    }
}

/// PUT /products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    draft: ProductDraft,
) -> Response {
    match state.product_service.update(ProductId(id), draft).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.respond_with(StatusCode::BAD_REQUEST),
    }
}

/// DELETE /products/{id}
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.product_service.delete(ProductId(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(_) => AppError::internal(DELETE_FAILED).into_response(),
    }
}
