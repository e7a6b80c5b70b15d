//! 仓储接口

mod product_repository;

pub use product_repository::ProductRepository;

pub use sportshop_ports::Repository;

use crate::domain::entities::Category;

/// 分类仓储只需要通用 CRUD
pub type CategoryRepository = dyn Repository<Category>;
