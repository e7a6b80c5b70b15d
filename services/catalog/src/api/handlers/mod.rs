//! HTTP 处理器

pub mod metrics;
pub mod products;
