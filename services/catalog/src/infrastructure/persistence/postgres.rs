//! PostgreSQL repository implementation

use async_trait::async_trait;
use sportshop_bootstrap::DbQueryTimer;
use sportshop_domain_core::Entity;
use sportshop_errors::{AppError, AppResult};
use sportshop_ports::Repository;
use sqlx::PgPool;

use crate::domain::entities::{Category, Product};
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::{CategoryId, ProductId};

use super::converters::{category_from_row, product_from_row, product_with_category_from_row};
use super::rows::{CategoryRow, ProductRow, ProductWithCategoryRow};

const CATEGORY_COLUMNS: &str = "id, code, description, created_at, updated_at";

const PRODUCT_COLUMNS: &str =
    "id, name, price, stock, brand, category_id, created_at, updated_at";

// ============================================================================
// Category 仓储实现
// ============================================================================

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Category> for PostgresCategoryRepository {
    async fn get_by_id(&self, id: CategoryId) -> AppResult<Option<Category>> {
        let sql = format!("SELECT {} FROM categories WHERE id = $1", CATEGORY_COLUMNS);
        let row = DbQueryTimer::new("select", "categories")
            .observe(
                sqlx::query_as::<_, CategoryRow>(&sql)
                    .bind(id.0)
                    .fetch_optional(&self.pool)
                    .await,
            )
            .map_err(|e| AppError::database(format!("Failed to get category: {}", e)))?;

        Ok(row.map(category_from_row))
    }

    async fn get_all(&self) -> AppResult<Vec<Category>> {
        let sql = format!("SELECT {} FROM categories ORDER BY id", CATEGORY_COLUMNS);
        let rows = DbQueryTimer::new("select", "categories")
            .observe(
                sqlx::query_as::<_, CategoryRow>(&sql)
                    .fetch_all(&self.pool)
                    .await,
            )
            .map_err(|e| AppError::database(format!("Failed to list categories: {}", e)))?;

        Ok(rows.into_iter().map(category_from_row).collect())
    }

    async fn add(&self, category: Category) -> AppResult<Category> {
        let sql = format!(
            r#"
            INSERT INTO categories (code, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );
        let row = DbQueryTimer::new("insert", "categories")
            .observe(
                sqlx::query_as::<_, CategoryRow>(&sql)
                    .bind(category.code())
                    .bind(category.description())
                    .bind(category.created_at())
                    .bind(category.updated_at())
                    .fetch_one(&self.pool)
                    .await,
            )
            .map_err(|e| AppError::database(format!("Failed to save category: {}", e)))?;

        Ok(category_from_row(row))
    }

    async fn update(&self, category: &Category) -> AppResult<()> {
        let result = DbQueryTimer::new("update", "categories")
            .observe(
                sqlx::query(
                    r#"
                    UPDATE categories SET
                        code = $1,
                        description = $2,
                        created_at = $3,
                        updated_at = $4
                    WHERE id = $5
                    "#,
                )
                .bind(category.code())
                .bind(category.description())
                .bind(category.created_at())
                .bind(category.updated_at())
                .bind(category.id().0)
                .execute(&self.pool)
                .await,
            )
            .map_err(|e| AppError::database(format!("Failed to update category: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Category with ID {} not found.",
                category.id()
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> AppResult<()> {
        DbQueryTimer::new("delete", "categories")
            .observe(
                sqlx::query("DELETE FROM categories WHERE id = $1")
                    .bind(id.0)
                    .execute(&self.pool)
                    .await,
            )
            .map_err(|e| AppError::database(format!("Failed to delete category: {}", e)))?;

        Ok(())
    }
}

// ============================================================================
// Product 仓储实现
// ============================================================================

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product> for PostgresProductRepository {
    async fn get_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        let sql = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);
        let row = DbQueryTimer::new("select", "products")
            .observe(
                sqlx::query_as::<_, ProductRow>(&sql)
                    .bind(id.0)
                    .fetch_optional(&self.pool)
                    .await,
            )
            .map_err(|e| AppError::database(format!("Failed to get product: {}", e)))?;

        Ok(row.map(product_from_row))
    }

    async fn get_all(&self) -> AppResult<Vec<Product>> {
        let sql = format!("SELECT {} FROM products ORDER BY id", PRODUCT_COLUMNS);
        let rows = DbQueryTimer::new("select", "products")
            .observe(
                sqlx::query_as::<_, ProductRow>(&sql)
                    .fetch_all(&self.pool)
                    .await,
            )
            .map_err(|e| AppError::database(format!("Failed to list products: {}", e)))?;

        Ok(rows.into_iter().map(product_from_row).collect())
    }

    async fn add(&self, product: Product) -> AppResult<Product> {
        let sql = format!(
            r#"
            INSERT INTO products (name, price, stock, brand, category_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        );
        let row = DbQueryTimer::new("insert", "products")
            .observe(
                sqlx::query_as::<_, ProductRow>(&sql)
                    .bind(product.name())
                    .bind(product.price())
                    .bind(product.stock())
                    .bind(product.brand())
                    .bind(product.category_id().0)
                    .bind(product.created_at())
                    .bind(product.updated_at())
                    .fetch_one(&self.pool)
                    .await,
            )
            .map_err(|e| AppError::database(format!("Failed to save product: {}", e)))?;

        Ok(product_from_row(row))
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let result = DbQueryTimer::new("update", "products")
            .observe(
                sqlx::query(
                    r#"
                    UPDATE products SET
                        name = $1,
                        price = $2,
                        stock = $3,
                        brand = $4,
                        category_id = $5,
                        created_at = $6,
                        updated_at = $7
                    WHERE id = $8
                    "#,
                )
                .bind(product.name())
                .bind(product.price())
                .bind(product.stock())
                .bind(product.brand())
                .bind(product.category_id().0)
                .bind(product.created_at())
                .bind(product.updated_at())
                .bind(product.id().0)
                .execute(&self.pool)
                .await,
            )
            .map_err(|e| AppError::database(format!("Failed to update product: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Product with ID {} not found.",
                product.id()
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: ProductId) -> AppResult<()> {
        DbQueryTimer::new("delete", "products")
            .observe(
                sqlx::query("DELETE FROM products WHERE id = $1")
                    .bind(id.0)
                    .execute(&self.pool)
                    .await,
            )
            .map_err(|e| AppError::database(format!("Failed to delete product: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn get_products_with_category(&self) -> AppResult<Vec<Product>> {
        let rows = DbQueryTimer::new("select", "products")
            .observe(
                sqlx::query_as::<_, ProductWithCategoryRow>(
                    r#"
                    SELECT p.id, p.name, p.price, p.stock, p.brand, p.category_id,
                           p.created_at, p.updated_at,
                           c.code AS category_code,
                           c.description AS category_description,
                           c.created_at AS category_created_at,
                           c.updated_at AS category_updated_at
                    FROM products p
                    JOIN categories c ON c.id = p.category_id
                    ORDER BY p.id
                    "#,
                )
                .fetch_all(&self.pool)
                .await,
            )
            .map_err(|e| {
                AppError::database(format!("Failed to list products with category: {}", e))
            })?;

        Ok(rows.into_iter().map(product_with_category_from_row).collect())
    }

    async fn get_products_by_category_id(
        &self,
        category_id: CategoryId,
    ) -> AppResult<Vec<Product>> {
        let sql = format!(
            "SELECT {} FROM products WHERE category_id = $1 ORDER BY id",
            PRODUCT_COLUMNS
        );
        let rows = DbQueryTimer::new("select", "products")
            .observe(
                sqlx::query_as::<_, ProductRow>(&sql)
                    .bind(category_id.0)
                    .fetch_all(&self.pool)
                    .await,
            )
            .map_err(|e| {
                AppError::database(format!("Failed to list products by category: {}", e))
            })?;

        Ok(rows.into_iter().map(product_from_row).collect())
    }
}
