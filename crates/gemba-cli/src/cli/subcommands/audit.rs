use clap::Subcommand;

/// Audit history commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuditCommands {
    /// List finalized audits, newest first.
    List {
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an audit report with the department's previous score.
    Get { id: String },
}
