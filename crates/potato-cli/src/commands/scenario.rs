mod create;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ScenarioCommands;
use crate::context::AppContext;

/// Handle `potato scenario`.
pub async fn handle(
    action: &ScenarioCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ScenarioCommands::Create {
            name,
            area,
            scenario_type,
            assigned_to,
            steps,
        } => create::run(name, area, scenario_type, assigned_to, *steps, ctx, flags).await,
        ScenarioCommands::List { page, per_page } => list::run(*page, *per_page, ctx, flags).await,
        ScenarioCommands::Get { id } => get::run(*id, ctx, flags).await,
    }
}
