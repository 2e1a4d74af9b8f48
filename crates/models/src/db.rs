use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && (url.contains(":memory:") || url.contains("mode=memory"))
}

/// Open a pool sized and timed by `cfg`.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    // Every connection to an in-memory SQLite URL is a separate database.
    let memory = is_sqlite_memory(&cfg.url);
    let max = if memory { 1 } else { cfg.max_connections };
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(max)
        .min_connections(cfg.min_connections.min(max))
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if !memory {
        opt.idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    let db = Database::connect(opt).await?;
    info!(backend = ?db.get_database_backend(), max_connections = max, "database pool ready");
    Ok(db)
}
