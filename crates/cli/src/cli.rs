use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "wfqueue")]
#[command(version, about = "Queue workflows and inspect their executions", long_about = None)]
pub struct Cli {
    /// API root (overrides WFQUEUE_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token (overrides WFQUEUE_API_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List playbooks and the workflows they define
    Playbooks,

    /// Queue a workflow for execution
    Enqueue {
        /// Workflow ID to queue
        workflow_id: String,
    },

    /// Show full detail for one execution
    Status {
        /// Execution ID to query
        execution_id: String,
    },

    /// List execution statuses
    List {
        /// Page to fetch (1-based)
        #[arg(short = 'p', long, default_value_t = 1, conflicts_with = "all")]
        page: u32,

        /// Fetch every page
        #[arg(short = 'a', long)]
        all: bool,
    },

    /// Request a status change (pause, resume, abort, ...)
    Action {
        /// Execution ID to act on
        execution_id: String,

        /// Action token, passed to the server as-is
        action: String,
    },

    /// Re-poll an execution until it completes or is aborted
    Watch {
        /// Execution ID to watch
        execution_id: String,
    },
}
