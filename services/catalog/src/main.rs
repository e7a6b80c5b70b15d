//! sportshop-catalog Service - 商品目录

use std::sync::Arc;

use sportshop_bootstrap::{Infrastructure, run_http};
use tracing::info;

use sportshop_catalog::api::{AppState, router};
use sportshop_catalog::application::{MetricsService, ProductService};
use sportshop_catalog::infrastructure::persistence::{
    PostgresCategoryRepository, PostgresProductRepository, migrations,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run_http("config", |infra: Infrastructure| async move {
        info!("Initializing catalog service...");

        infra.run_migrations(&migrations()).await?;

        let pool = infra.postgres_pool();
        let category_repo = Arc::new(PostgresCategoryRepository::new(pool.clone()));
        let product_repo = Arc::new(PostgresProductRepository::new(pool));
        info!("Repositories initialized");

        let policy = infra.config().catalog.category_policy;
        info!(?policy, "Category policy configured");

        let product_service = Arc::new(ProductService::new(
            product_repo.clone(),
            category_repo.clone(),
            policy,
        ));
        let metrics_service = Arc::new(MetricsService::new(product_repo, category_repo));

        Ok(router(AppState::new(product_service, metrics_service)))
    })
    .await
}
