//! 商品实体

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sportshop_domain_core::Entity;

use crate::domain::entities::Category;
use crate::domain::value_objects::{CategoryId, ProductId};

/// 商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
    stock: i32,
    brand: String,
    category_id: CategoryId,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    /// 仅在关联查询时加载
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
}

impl Product {
    /// 创建新商品（尚未持久化），创建时间为当前时间
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        stock: i32,
        brand: impl Into<String>,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id: ProductId::default(),
            name: name.into(),
            price,
            stock,
            brand: brand.into(),
            category_id,
            created_at: Utc::now(),
            updated_at: None,
            category: None,
        }
    }

    /// 从持久化数据重建
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: ProductId,
        name: String,
        price: Decimal,
        stock: i32,
        brand: String,
        category_id: CategoryId,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            stock,
            brand,
            category_id,
            created_at,
            updated_at,
            category: None,
        }
    }

    /// 设置存储生成的 ID
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }

    /// 附加所属分类
    pub fn with_category(mut self, category: Category) -> Self {
        self.category_id = *category.id();
        self.category = Some(category);
        self
    }

    /// 覆盖全部可变字段并记录更新时间，创建时间保持不变
    pub fn apply_changes(
        &mut self,
        name: impl Into<String>,
        price: Decimal,
        stock: i32,
        brand: impl Into<String>,
        category_id: CategoryId,
    ) {
        self.name = name.into();
        self.price = price;
        self.stock = stock;
        self.brand = brand.into();
        if self.category_id != category_id {
            self.category = None;
        }
        self.category_id = category_id;
        self.updated_at = Some(Utc::now());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}
