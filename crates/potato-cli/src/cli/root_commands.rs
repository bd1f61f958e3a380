use clap::{Args, Subcommand};

use crate::cli::subcommands::{DefectCommands, ProofCommands, ScenarioCommands, StepCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the tracking database and upload directory.
    Init(InitArgs),
    /// Test scenarios.
    Scenario {
        #[command(subcommand)]
        action: ScenarioCommands,
    },
    /// Scenario steps.
    Step {
        #[command(subcommand)]
        action: StepCommands,
    },
    /// Defects raised against steps.
    Defect {
        #[command(subcommand)]
        action: DefectCommands,
    },
    /// Evidence files attached to steps.
    Proof {
        #[command(subcommand)]
        action: ProofCommands,
    },
    /// Ask a question about scenarios, defects, failed steps, or missing proofs.
    Ask(AskArgs),
}

/// Arguments for `potato init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Insert three sample scenarios with steps and defects.
    #[arg(long)]
    pub seed: bool,
}

/// Arguments for `potato ask`.
#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// Read questions line by line from stdin, sharing one explanation cache.
    /// Also the mode used when no question is given.
    #[arg(short, long)]
    pub interactive: bool,

    /// The question, quoted or as separate words.
    #[arg(trailing_var_arg = true)]
    pub question: Vec<String>,
}
