//! Repository trait 定义

use async_trait::async_trait;
use sportshop_domain_core::Entity;
use sportshop_errors::AppResult;

/// 通用 Repository trait
///
/// 每次调用独立提交，调用之间不共享事务
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Entity + Send + Sync + 'static,
{
    /// 根据 ID 查找
    async fn get_by_id(&self, id: T::Id) -> AppResult<Option<T>>;

    /// 查询全部
    async fn get_all(&self) -> AppResult<Vec<T>>;

    /// 新增实体，返回带生成 ID 的记录
    async fn add(&self, entity: T) -> AppResult<T>;

    /// 覆盖更新全部可变字段；记录不存在时返回 NotFound
    async fn update(&self, entity: &T) -> AppResult<()>;

    /// 删除实体；记录不存在时不做任何事
    async fn delete(&self, id: T::Id) -> AppResult<()>;
}
