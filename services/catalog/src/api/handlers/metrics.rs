//! 指标处理器

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::application::MetricsOutcome;

/// GET /metrics/products
///
/// 统计失败时仍返回 200，响应体为错误标识
pub async fn product_metrics(State(state): State<AppState>) -> Json<MetricsOutcome> {
    Json(state.metrics_service.get_product_metrics().await)
}
