//! 商品指标统计服务

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use sportshop_domain_core::Entity;
use sportshop_errors::AppResult;
use tracing::error;

use crate::domain::repositories::{CategoryRepository, ProductRepository};
use crate::domain::value_objects::CategoryId;

/// 热门分类数量
const TOP_CATEGORY_LIMIT: usize = 2;

const METRICS_UNAVAILABLE: &str = "Error getting metrics.";

/// 商品汇总指标
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductMetrics {
    pub total_products: usize,
    /// 按商品数量降序，最多两个分类编码
    pub top_categories: Vec<String>,
    pub total_stock: i64,
    pub average_price: Decimal,
}

/// 指标查询结果，序列化时不带标签
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricsOutcome {
    Report(ProductMetrics),
    Unavailable { error: String },
}

pub struct MetricsService {
    product_repo: Arc<dyn ProductRepository>,
    category_repo: Arc<CategoryRepository>,
}

impl MetricsService {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        category_repo: Arc<CategoryRepository>,
    ) -> Self {
        Self {
            product_repo,
            category_repo,
        }
    }

    /// 计算商品指标；任何失败都返回错误标识而不是向上传递
    pub async fn get_product_metrics(&self) -> MetricsOutcome {
        match self.compute().await {
            Ok(metrics) => MetricsOutcome::Report(metrics),
            Err(e) => {
                error!(error = %e, "Failed to compute product metrics");
                MetricsOutcome::Unavailable {
                    error: METRICS_UNAVAILABLE.to_string(),
                }
            }
        }
    }

    async fn compute(&self) -> AppResult<ProductMetrics> {
        let products = self.product_repo.get_all().await?;

        let total_products = products.len();
        let total_stock: i64 = products.iter().map(|p| i64::from(p.stock())).sum();
        let average_price = if products.is_empty() {
            Decimal::ZERO
        } else {
            let total: Decimal = products.iter().map(|p| p.price()).sum();
            total / Decimal::from(total_products as u64)
        };

        let mut counts: HashMap<CategoryId, usize> = HashMap::new();
        for product in &products {
            *counts.entry(product.category_id()).or_default() += 1;
        }

        // 数量相同时分类 ID 小的在前
        let mut ranked: Vec<(CategoryId, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(TOP_CATEGORY_LIMIT);

        let top_categories = if ranked.is_empty() {
            Vec::new()
        } else {
            let categories = self.category_repo.get_all().await?;
            ranked
                .iter()
                .filter_map(|(id, _)| {
                    categories
                        .iter()
                        .find(|c| c.id() == id)
                        .map(|c| c.code().to_string())
                })
                .collect()
        };

        Ok(ProductMetrics {
            total_products,
            top_categories,
            total_stock,
            average_price,
        })
    }
}
