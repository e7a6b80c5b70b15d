//! sportshop-bootstrap - 统一服务启动骨架
//!
//! 配置加载、日志、基础设施、健康检查与 HTTP 服务生命周期

mod health;
mod infrastructure;
mod metrics;
mod runtime;
mod starter;

pub use self::health::*;
pub use self::infrastructure::*;
pub use self::metrics::*;
pub use self::runtime::*;
pub use self::starter::*;
