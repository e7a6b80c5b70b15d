//! 仓储 mock（单元测试用）

use async_trait::async_trait;
use mockall::mock;
use sportshop_errors::AppResult;
use sportshop_ports::Repository;

use crate::domain::entities::{Category, Product};
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::{CategoryId, ProductId};

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl Repository<Category> for CategoryRepo {
        async fn get_by_id(&self, id: CategoryId) -> AppResult<Option<Category>>;
        async fn get_all(&self) -> AppResult<Vec<Category>>;
        async fn add(&self, entity: Category) -> AppResult<Category>;
        async fn update(&self, entity: &Category) -> AppResult<()>;
        async fn delete(&self, id: CategoryId) -> AppResult<()>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl Repository<Product> for ProductRepo {
        async fn get_by_id(&self, id: ProductId) -> AppResult<Option<Product>>;
        async fn get_all(&self) -> AppResult<Vec<Product>>;
        async fn add(&self, entity: Product) -> AppResult<Product>;
        async fn update(&self, entity: &Product) -> AppResult<()>;
        async fn delete(&self, id: ProductId) -> AppResult<()>;
    }

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_products_with_category(&self) -> AppResult<Vec<Product>>;
        async fn get_products_by_category_id(
            &self,
            category_id: CategoryId,
        ) -> AppResult<Vec<Product>>;
    }
}
