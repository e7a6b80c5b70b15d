//! sportshop-catalog - 商品目录服务
//!
//! 商品与分类的 CRUD 接口及商品指标统计

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
