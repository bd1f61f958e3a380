use anyhow::Context;
use potato_core::entities::Scenario;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitReport {
    database: String,
    uploads_dir: String,
    seeded: Vec<Scenario>,
}

/// Handle `potato init`. The store itself is opened and migrated by the context.
pub async fn handle(args: &InitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = run(args.seed, ctx).await?;
    output(&report, flags.format)
}

async fn run(seed: bool, ctx: &AppContext) -> anyhow::Result<InitReport> {
    let uploads_dir = ctx.config.uploads.dir.clone();
    std::fs::create_dir_all(&uploads_dir)
        .with_context(|| format!("failed to create upload directory {uploads_dir}"))?;

    // Seeding only touches an empty store so repeated `init --seed` is harmless.
    let seeded = if seed && ctx.db.list_scenarios(1, 1).await?.total == 0 {
        ctx.db.seed_sample_data().await?
    } else {
        if seed {
            tracing::info!("store already has scenarios; skipping sample data");
        }
        Vec::new()
    };

    Ok(InitReport {
        database: ctx.config.database.path.clone(),
        uploads_dir,
        seeded,
    })
}
