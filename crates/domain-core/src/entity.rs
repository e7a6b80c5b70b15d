//! 实体基础 trait

/// 实体 trait
///
/// 标识由存储生成，未持久化的实体使用 `Id::default()`
pub trait Entity {
    type Id: Copy + Default + PartialEq + Send + Sync;

    fn id(&self) -> &Self::Id;

    /// 是否已持久化
    fn is_persisted(&self) -> bool {
        *self.id() != Self::Id::default()
    }
}
