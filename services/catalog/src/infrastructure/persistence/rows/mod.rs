//! 数据库行映射结构

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// 分类数据库行
#[derive(Debug, FromRow)]
pub struct CategoryRow {
    pub id: i64,
    pub code: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// 商品数据库行
#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
    pub brand: String,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// 商品 + 分类关联查询行
#[derive(Debug, FromRow)]
pub struct ProductWithCategoryRow {
    #[sqlx(flatten)]
    pub product: ProductRow,
    pub category_code: String,
    pub category_description: String,
    pub category_created_at: DateTime<Utc>,
    pub category_updated_at: Option<DateTime<Utc>>,
}
