use ferrous_visits_domain::config::DatabaseConfig;
use ferrous_visits_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", cfg.path);

    if let Some(parent) = Path::new(&cfg.path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                error!("Failed to create database directory {}: {}", parent.display(), e);
                anyhow::anyhow!(e)
            })?;
        }
    }

    let pool = create_pool(cfg).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Database initialized successfully (max_connections={})",
        cfg.max_connections
    );

    Ok(pool)
}
