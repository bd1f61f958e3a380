use potato_config::PotatoConfig;

use crate::cli::GlobalFlags;

/// Load layered config (`.env`, TOML files, `POTATO_*` env) and apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PotatoConfig> {
    let mut config = PotatoConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut PotatoConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        tracing::debug!(path = %db, "database path overridden on the command line");
        config.database.path.clone_from(db);
    }
}
