use std::path::Path;

use anyhow::Context;
use potato_config::PotatoConfig;
use potato_db::PotatoDb;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub db: PotatoDb,
    pub config: PotatoConfig,
}

impl AppContext {
    /// Open (and migrate) the tracking store named by `database.path`.
    pub async fn init(config: PotatoConfig) -> anyhow::Result<Self> {
        let path = config.database.path.clone();
        let parent = Path::new(&path)
            .parent()
            .filter(|dir| path != ":memory:" && !dir.as_os_str().is_empty());
        if let Some(parent) = parent {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let db = PotatoDb::open_local(&path)
            .await
            .with_context(|| format!("failed to open tracking store at {path}"))?;
        tracing::debug!(path = %path, "application context ready");

        Ok(Self { db, config })
    }
}
