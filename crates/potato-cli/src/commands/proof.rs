mod add;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProofCommands;
use crate::context::AppContext;

/// Handle `potato proof`.
pub async fn handle(action: &ProofCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ProofCommands::Add {
            scenario,
            step,
            file,
        } => add::run(*scenario, *step, file, ctx, flags).await,
        ProofCommands::List { scenario } => list::run(*scenario, ctx, flags).await,
    }
}
