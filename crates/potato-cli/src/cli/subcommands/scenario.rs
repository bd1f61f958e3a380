use clap::Subcommand;

/// Scenario commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ScenarioCommands {
    /// Create a scenario with numbered default steps.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        area: String,
        #[arg(long = "type")]
        scenario_type: String,
        #[arg(long)]
        assigned_to: String,
        /// Number of steps (defaults to `general.default_steps`).
        #[arg(long)]
        steps: Option<u32>,
    },
    /// List scenarios, newest first.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Page size (defaults to `general.page_size`).
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Show a scenario with its steps, defects, and proofs.
    Get { id: i64 },
}
