use clap::Subcommand;

/// Proof commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProofCommands {
    /// Copy a file into the upload directory and attach it to a step.
    Add {
        #[arg(long)]
        scenario: i64,
        #[arg(long)]
        step: u32,
        /// File to upload.
        file: String,
    },
    /// List a scenario's proofs, newest first.
    List {
        #[arg(long)]
        scenario: i64,
    },
}
