use secrecy::ExposeSecret;
use service_core::observability::init_tracing;
use std::sync::Arc;
use user_service::config::UserConfig;
use user_service::services::{init_metrics, MongoUserStore};
use user_service::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = UserConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "user-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );
    init_metrics()?;

    let store = MongoUserStore::connect(
        config.mongodb.uri.expose_secret(),
        &config.mongodb.database,
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to connect to MongoDB: {}", e);
        anyhow::anyhow!("Database connection error: {}", e)
    })?;

    let application = Application::build(config, Arc::new(store)).await?;
    application.run_until_stopped().await?;

    Ok(())
}
