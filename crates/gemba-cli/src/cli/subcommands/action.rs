use clap::Subcommand;

/// Corrective action commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ActionCommands {
    /// List actions, pending first then newest.
    List {
        #[arg(long)]
        department: Option<String>,
        /// pending, executed, approved or rejected
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an action with its full log.
    Get { id: String },
    /// Record the department's execution of an action.
    Execute {
        id: String,
        #[arg(long)]
        text: String,
        #[arg(long)]
        evidence: String,
    },
    /// Approve or reject an executed action.
    Decide {
        id: String,
        /// approved or rejected
        decision: String,
        /// Required when rejecting.
        #[arg(long, default_value = "")]
        note: String,
    },
}
