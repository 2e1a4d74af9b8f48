use std::{future::Future, sync::Arc};

use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::employee::{repo::seaorm::SeaOrmEmployeeRepository, repository::EmployeeRepository};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the database, bring the schema up to date and wire the SeaORM store.
pub async fn build_state(cfg: &DatabaseConfig) -> anyhow::Result<ServerState> {
    common::env::ensure_env(&cfg.url).await?;
    let db = models::db::connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");
    let repo: Arc<dyn EmployeeRepository> = Arc::new(SeaOrmEmployeeRepository::new(db));
    Ok(ServerState::new(repo))
}

/// Bind `host:port` and serve `state` until `shutdown` resolves.
pub async fn serve<F>(cfg: &AppConfig, state: ServerState, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
    let listener = TcpListener::bind((cfg.server.host.as_str(), cfg.server.port))
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(%addr, "starting server");
    let app = routes::build_router(state, build_cors());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, shutting down");
    }
}

/// Run with an already loaded and validated configuration.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg.database).await?;
    serve(&cfg, state, shutdown_signal()).await?;
    Ok(())
}
