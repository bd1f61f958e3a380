use clap::Subcommand;

/// Defect commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DefectCommands {
    /// Raise an open defect against a step.
    Add {
        #[arg(long)]
        scenario: i64,
        #[arg(long)]
        step: u32,
        #[arg(long)]
        title: String,
        #[arg(long)]
        reported_by: Option<String>,
    },
    /// Change a defect's status (open, closed, resolved).
    Update {
        id: i64,
        #[arg(long)]
        status: String,
    },
    /// List a scenario's defects, newest first.
    List {
        #[arg(long)]
        scenario: i64,
    },
}
