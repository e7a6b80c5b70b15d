//! 商品业务服务
//!
//! 读操作把故障降级为空结果并记录日志；写操作记录日志后向上传递错误。

use std::sync::Arc;

use sportshop_domain_core::Entity;
use sportshop_errors::{AppError, AppResult};
use tracing::{error, info};

use crate::application::dto::ProductDraft;
use crate::application::outcome::ReadOutcome;
use crate::domain::entities::{Category, Product};
use crate::domain::repositories::{CategoryRepository, ProductRepository};
use crate::domain::value_objects::ProductId;

pub use sportshop_config::CategoryPolicy;

pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
    category_repo: Arc<CategoryRepository>,
    policy: CategoryPolicy,
}

impl ProductService {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        category_repo: Arc<CategoryRepository>,
        policy: CategoryPolicy,
    ) -> Self {
        Self {
            product_repo,
            category_repo,
            policy,
        }
    }

    /// 根据 ID 查询商品
    pub async fn get_by_id(&self, id: ProductId) -> ReadOutcome<Option<Product>> {
        match self.product_repo.get_by_id(id).await {
            Ok(product) => ReadOutcome::ok(product),
            Err(e) => {
                error!(product_id = %id, error = %e, "Failed to get product");
                ReadOutcome::empty_on(e)
            }
        }
    }

    /// 查询全部商品
    pub async fn get_all(&self) -> ReadOutcome<Vec<Product>> {
        match self.product_repo.get_all().await {
            Ok(products) => ReadOutcome::ok(products),
            Err(e) => {
                error!(error = %e, "Failed to get products");
                ReadOutcome::empty_on(e)
            }
        }
    }

    /// 按分类名称查询（不区分大小写的精确匹配）
    pub async fn get_by_category_name(&self, name: &str) -> ReadOutcome<Vec<Product>> {
        match self.product_repo.get_products_with_category().await {
            Ok(products) => ReadOutcome::ok(
                products
                    .into_iter()
                    .filter(|p| p.category().is_some_and(|c| c.matches_code(name)))
                    .collect(),
            ),
            Err(e) => {
                error!(category = %name, error = %e, "Failed to get products by category");
                ReadOutcome::empty_on(e)
            }
        }
    }

    /// 创建商品
    pub async fn create(&self, draft: ProductDraft) -> AppResult<Product> {
        let result = self.try_create(draft).await;
        if let Err(e) = &result {
            error!(error = %e, "Failed to create product");
        }
        result
    }

    async fn try_create(&self, draft: ProductDraft) -> AppResult<Product> {
        let category = self.resolve_category(&draft.category).await?;

        let product = Product::new(
            draft.name,
            draft.price,
            draft.stock,
            draft.brand,
            *category.id(),
        );
        let created = self.product_repo.add(product).await?;

        info!(product_id = %created.id(), category = %category.code(), "Product created");
        Ok(created.with_category(category))
    }

    /// 更新商品，覆盖全部可变字段
    pub async fn update(&self, id: ProductId, draft: ProductDraft) -> AppResult<()> {
        let result = self.try_update(id, draft).await;
        if let Err(e) = &result {
            error!(product_id = %id, error = %e, "Failed to update product");
        }
        result
    }

    async fn try_update(&self, id: ProductId, draft: ProductDraft) -> AppResult<()> {
        let mut product = self
            .product_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product with ID {} not found.", id)))?;

        let category = self.resolve_category(&draft.category).await?;

        product.apply_changes(
            draft.name,
            draft.price,
            draft.stock,
            draft.brand,
            *category.id(),
        );
        self.product_repo.update(&product).await?;

        info!(product_id = %id, "Product updated");
        Ok(())
    }

    /// 删除商品；不存在的 ID 不视为错误
    pub async fn delete(&self, id: ProductId) -> AppResult<()> {
        self.product_repo.delete(id).await.inspect_err(|e| {
            error!(product_id = %id, error = %e, "Failed to delete product");
        })
    }

    /// 按编码查找分类，未找到时按策略拒绝或自动创建
    async fn resolve_category(&self, name: &str) -> AppResult<Category> {
        let categories = self.category_repo.get_all().await?;
        if let Some(category) = categories.into_iter().find(|c| c.matches_code(name)) {
            return Ok(category);
        }

        match self.policy {
            CategoryPolicy::Strict => Err(AppError::business_rule(format!(
                "Category '{name}' does not exist."
            ))),
            CategoryPolicy::AutoCreate => {
                let category = self.category_repo.add(Category::new(name, name)).await?;
                info!(category_id = %category.id(), category = %name, "Category created");
                Ok(category)
            }
        }
    }
}
