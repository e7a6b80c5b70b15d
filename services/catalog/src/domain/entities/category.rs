//! 商品分类实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sportshop_domain_core::Entity;

use crate::domain::value_objects::CategoryId;

/// 商品分类
///
/// `code` 是对外查找用的名称，按不区分大小写的精确匹配使用。
/// 分类下的商品列表不作为字段建模，因此不会出现在序列化结果中。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    code: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Category {
    /// 创建新分类（尚未持久化）
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: CategoryId::default(),
            code: code.into(),
            description: description.into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// 从持久化数据重建
    pub fn from_parts(
        id: CategoryId,
        code: String,
        description: String,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            code,
            description,
            created_at,
            updated_at,
        }
    }

    /// 设置存储生成的 ID
    pub fn with_id(mut self, id: CategoryId) -> Self {
        self.id = id;
        self
    }

    /// 编码是否匹配（不区分大小写）
    pub fn matches_code(&self, name: &str) -> bool {
        self.code.to_lowercase() == name.to_lowercase()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }
}
