//! 数据库行到领域对象的转换

use crate::domain::entities::{Category, Product};
use crate::domain::value_objects::{CategoryId, ProductId};

use super::rows::{CategoryRow, ProductRow, ProductWithCategoryRow};

/// 将 CategoryRow 转换为 Category
pub fn category_from_row(row: CategoryRow) -> Category {
    Category::from_parts(
        CategoryId(row.id),
        row.code,
        row.description,
        row.created_at,
        row.updated_at,
    )
}

/// 将 ProductRow 转换为 Product
pub fn product_from_row(row: ProductRow) -> Product {
    Product::from_parts(
        ProductId(row.id),
        row.name,
        row.price,
        row.stock,
        row.brand,
        CategoryId(row.category_id),
        row.created_at,
        row.updated_at,
    )
}

/// 将关联查询行转换为带分类的 Product
pub fn product_with_category_from_row(row: ProductWithCategoryRow) -> Product {
    let category = Category::from_parts(
        CategoryId(row.product.category_id),
        row.category_code,
        row.category_description,
        row.category_created_at,
        row.category_updated_at,
    );
    product_from_row(row.product).with_category(category)
}
