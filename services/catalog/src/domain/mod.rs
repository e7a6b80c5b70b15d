//! 领域层
//!
//! 包含商品、分类实体，强类型 ID 与仓储接口

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
