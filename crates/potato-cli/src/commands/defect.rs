mod add;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DefectCommands;
use crate::context::AppContext;

/// Handle `potato defect`.
pub async fn handle(
    action: &DefectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DefectCommands::Add {
            scenario,
            step,
            title,
            reported_by,
        } => add::run(*scenario, *step, title, reported_by.as_deref(), ctx, flags).await,
        DefectCommands::Update { id, status } => update::run(*id, status, ctx, flags).await,
        DefectCommands::List { scenario } => list::run(*scenario, ctx, flags).await,
    }
}
