//! 路由定义

use axum::{Router, routing::get};

use super::handlers::{metrics, products};
use super::state::AppState;

/// 构建商品目录 API 路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/products/category/{name}",
            get(products::list_products_by_category),
        )
        .route("/metrics/products", get(metrics::product_metrics))
        .with_state(state)
}
