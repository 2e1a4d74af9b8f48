//! Environment/runtime helpers
//!
//! Sanity checks run before the database pool is opened.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// File backing a `sqlite:` URL, if the URL names one.
pub fn sqlite_file(url: &str) -> Option<PathBuf> {
    let rest = url.strip_prefix("sqlite:")?;
    let rest = rest.trim_start_matches("//");
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the directory holding a file-backed SQLite database exists.
/// Server URLs and in-memory databases need nothing.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file(database_url) else {
        return Ok(());
    };
    let dir = file.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    if tokio::fs::metadata(dir).await.is_err() {
        warn!(dir = %dir.display(), "sqlite data directory missing; creating it");
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    }
    info!(file = %file.display(), "using sqlite database file");
    Ok(())
}
