//! 基础设施资源管理

use secrecy::ExposeSecret;
use sportshop_adapter_postgres::{
    MigrationManager, PostgresConfig, check_connection, create_pool,
};
use sportshop_config::AppConfig;
use sportshop_errors::AppResult;
use sqlx::PgPool;
use tracing::info;

pub use sportshop_adapter_postgres::Migration;

/// 基础设施资源容器
///
/// 由 bootstrap 统一初始化后交给服务构建路由
#[derive(Clone)]
pub struct Infrastructure {
    config: AppConfig,
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// 从配置创建基础设施资源
    ///
    /// 数据库不可达时直接返回错误，服务不会启动
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let pg_config = PostgresConfig::new(config.database.url.expose_secret())
            .with_max_connections(config.database.max_connections);
        let postgres_pool = create_pool(&pg_config).await?;
        check_connection(&postgres_pool).await?;

        info!(
            "PostgreSQL connection pool ready (max_connections: {})",
            config.database.max_connections
        );

        Ok(Self {
            config,
            postgres_pool,
        })
    }

    /// 应用服务的内嵌迁移；配置关闭时跳过
    pub async fn run_migrations(&self, migrations: &[Migration]) -> AppResult<()> {
        if !self.config.database.run_migrations {
            info!("Migrations disabled by configuration, skipping");
            return Ok(());
        }

        let result = MigrationManager::new(self.postgres_pool.clone())
            .run(migrations)
            .await?;
        info!(
            applied = result.applied_count(),
            skipped = result.skipped.len(),
            "Migrations completed"
        );
        Ok(())
    }

    /// 获取应用配置
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 获取 PostgreSQL 连接池
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }
}
