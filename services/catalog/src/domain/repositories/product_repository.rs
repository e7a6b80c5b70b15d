//! 商品仓储接口

use async_trait::async_trait;
use sportshop_errors::AppResult;
use sportshop_ports::Repository;

use crate::domain::entities::Product;
use crate::domain::value_objects::CategoryId;

/// 商品仓储接口
///
/// 在通用 CRUD 之上增加按分类的查询
#[async_trait]
pub trait ProductRepository: Repository<Product> {
    /// 查询全部商品，并附带所属分类
    async fn get_products_with_category(&self) -> AppResult<Vec<Product>>;

    /// 根据分类 ID 查询商品
    async fn get_products_by_category_id(
        &self,
        category_id: CategoryId,
    ) -> AppResult<Vec<Product>>;
}
