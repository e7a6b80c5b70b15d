//! HTTP 处理器共享状态

use std::sync::Arc;

use crate::application::{MetricsService, ProductService};

#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService>,
    pub metrics_service: Arc<MetricsService>,
}

impl AppState {
    pub fn new(product_service: Arc<ProductService>, metrics_service: Arc<MetricsService>) -> Self {
        Self {
            product_service,
            metrics_service,
        }
    }
}
