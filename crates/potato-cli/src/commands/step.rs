use potato_core::enums::StepStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StepCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `potato step`.
pub async fn handle(action: &StepCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        StepCommands::Update {
            scenario,
            step,
            status,
            assigned_to,
        } => {
            let status: StepStatus = status.parse()?;
            let updated = ctx
                .db
                .update_step(*scenario, *step, status, assigned_to.as_deref())
                .await?;
            output(&updated, flags.format)
        }
    }
}
