use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Init(args) => commands::init::handle(&args, ctx, flags).await,
        Commands::Scenario { action } => commands::scenario::handle(&action, ctx, flags).await,
        Commands::Step { action } => commands::step::handle(&action, ctx, flags).await,
        Commands::Defect { action } => commands::defect::handle(&action, ctx, flags).await,
        Commands::Proof { action } => commands::proof::handle(&action, ctx, flags).await,
        Commands::Ask(args) => commands::ask::handle(&args, ctx, flags).await,
    }
}
