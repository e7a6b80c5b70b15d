//! 内存仓储实现（集成测试用）

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sportshop_catalog::api::{AppState, router};
use sportshop_catalog::application::{CategoryPolicy, MetricsService, ProductService};
use sportshop_catalog::domain::{
    Category, CategoryId, Product, ProductId, ProductRepository, Repository,
};
use sportshop_domain_core::Entity;
use sportshop_errors::{AppError, AppResult};

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    rows: Mutex<Vec<Category>>,
    next_id: Mutex<i64>,
}

impl InMemoryCategoryRepository {
    pub fn seeded(codes: &[&str]) -> Self {
        let repo = Self::default();
        for code in codes {
            repo.insert(Category::new(*code, *code));
        }
        repo
    }

    fn insert(&self, category: Category) -> Category {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let stored = category.with_id(CategoryId(*next_id));
        self.rows.lock().unwrap().push(stored.clone());
        stored
    }

    pub fn all(&self) -> Vec<Category> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl Repository<Category> for InMemoryCategoryRepository {
    async fn get_by_id(&self, id: CategoryId) -> AppResult<Option<Category>> {
        Ok(self.all().into_iter().find(|c| *c.id() == id))
    }

    async fn get_all(&self) -> AppResult<Vec<Category>> {
        Ok(self.all())
    }

    async fn add(&self, category: Category) -> AppResult<Category> {
        Ok(self.insert(category))
    }

    async fn update(&self, category: &Category) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|c| c.id() == category.id()) {
            Some(row) => {
                *row = category.clone();
                Ok(())
            }
            None => Err(AppError::not_found(format!(
                "Category with ID {} not found.",
                category.id()
            ))),
        }
    }

    async fn delete(&self, id: CategoryId) -> AppResult<()> {
        self.rows.lock().unwrap().retain(|c| *c.id() != id);
        Ok(())
    }
}

pub struct InMemoryProductRepository {
    rows: Mutex<Vec<Product>>,
    next_id: Mutex<i64>,
    categories: Arc<InMemoryCategoryRepository>,
}

impl InMemoryProductRepository {
    pub fn new(categories: Arc<InMemoryCategoryRepository>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(0),
            categories,
        }
    }

    pub fn all(&self) -> Vec<Product> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl Repository<Product> for InMemoryProductRepository {
    async fn get_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        Ok(self.all().into_iter().find(|p| *p.id() == id))
    }

    async fn get_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.all())
    }

    async fn add(&self, product: Product) -> AppResult<Product> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let stored = product.with_id(ProductId(*next_id));
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|p| p.id() == product.id()) {
            Some(row) => {
                *row = product.clone();
                Ok(())
            }
            None => Err(AppError::not_found(format!(
                "Product with ID {} not found.",
                product.id()
            ))),
        }
    }

    async fn delete(&self, id: ProductId) -> AppResult<()> {
        self.rows.lock().unwrap().retain(|p| *p.id() != id);
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_products_with_category(&self) -> AppResult<Vec<Product>> {
        let categories = self.categories.all();
        Ok(self
            .all()
            .into_iter()
            .filter_map(|p| {
                categories
                    .iter()
                    .find(|c| *c.id() == p.category_id())
                    .cloned()
                    .map(|c| p.with_category(c))
            })
            .collect())
    }

    async fn get_products_by_category_id(
        &self,
        category_id: CategoryId,
    ) -> AppResult<Vec<Product>> {
        Ok(self
            .all()
            .into_iter()
            .filter(|p| p.category_id() == category_id)
            .collect())
    }
}

/// 所有操作都失败的仓储，模拟存储不可用
pub struct UnavailableStore;

fn unavailable() -> AppError {
    AppError::database("connection refused")
}

#[async_trait]
impl Repository<Category> for UnavailableStore {
    async fn get_by_id(&self, _id: CategoryId) -> AppResult<Option<Category>> {
        Err(unavailable())
    }

    async fn get_all(&self) -> AppResult<Vec<Category>> {
        Err(unavailable())
    }

    async fn add(&self, _category: Category) -> AppResult<Category> {
        Err(unavailable())
    }

    async fn update(&self, _category: &Category) -> AppResult<()> {
        Err(unavailable())
    }

    async fn delete(&self, _id: CategoryId) -> AppResult<()> {
        Err(unavailable())
    }
}

#[async_trait]
impl Repository<Product> for UnavailableStore {
    async fn get_by_id(&self, _id: ProductId) -> AppResult<Option<Product>> {
        Err(unavailable())
    }

    async fn get_all(&self) -> AppResult<Vec<Product>> {
        Err(unavailable())
    }

    async fn add(&self, _product: Product) -> AppResult<Product> {
        Err(unavailable())
    }

    async fn update(&self, _product: &Product) -> AppResult<()> {
        Err(unavailable())
    }

    async fn delete(&self, _id: ProductId) -> AppResult<()> {
        Err(unavailable())
    }
}

#[async_trait]
impl ProductRepository for UnavailableStore {
    async fn get_products_with_category(&self) -> AppResult<Vec<Product>> {
        Err(unavailable())
    }

    async fn get_products_by_category_id(
        &self,
        _category_id: CategoryId,
    ) -> AppResult<Vec<Product>> {
        Err(unavailable())
    }
}

/// 内存存储 + 服务装配
pub struct TestCatalog {
    pub categories: Arc<InMemoryCategoryRepository>,
    pub products: Arc<InMemoryProductRepository>,
    pub product_service: Arc<ProductService>,
    pub metrics_service: Arc<MetricsService>,
}

impl TestCatalog {
    pub fn new(policy: CategoryPolicy, category_codes: &[&str]) -> Self {
        let categories = Arc::new(InMemoryCategoryRepository::seeded(category_codes));
        let products = Arc::new(InMemoryProductRepository::new(categories.clone()));
        let product_service = Arc::new(ProductService::new(
            products.clone(),
            categories.clone(),
            policy,
        ));
        let metrics_service = Arc::new(MetricsService::new(products.clone(), categories.clone()));

        Self {
            categories,
            products,
            product_service,
            metrics_service,
        }
    }

    pub fn router(&self) -> axum::Router {
        router(AppState::new(
            self.product_service.clone(),
            self.metrics_service.clone(),
        ))
    }
}

/// 存储不可用时的路由
pub fn unavailable_router() -> axum::Router {
    let store = Arc::new(UnavailableStore);
    let product_service = Arc::new(ProductService::new(
        store.clone(),
        store.clone(),
        CategoryPolicy::Strict,
    ));
    let metrics_service = Arc::new(MetricsService::new(store.clone(), store));
    router(AppState::new(product_service, metrics_service))
}
