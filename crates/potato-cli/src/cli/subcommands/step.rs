use clap::Subcommand;

/// Step commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StepCommands {
    /// Set a step's status and assignee.
    Update {
        #[arg(long)]
        scenario: i64,
        #[arg(long)]
        step: u32,
        /// not-started, in-progress, passed, failed, blocked
        #[arg(long)]
        status: String,
        #[arg(long)]
        assigned_to: Option<String>,
    },
}
