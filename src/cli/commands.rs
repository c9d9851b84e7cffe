use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "ideario")]
#[command(version, about = "Captura de ideas: API REST y cliente de doble modo")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Port to listen on (the PORT env var is honored when omitted)
        #[arg(long)]
        port: Option<u16>,

        /// Include failure detail in 500 responses
        #[arg(long)]
        debug: bool,
    },

    /// List all ideas
    List {
        #[command(flatten)]
        backend: BackendArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get a single idea by id
    Get {
        /// Idea id
        id: u64,

        #[command(flatten)]
        backend: BackendArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new idea
    Add {
        /// Idea title
        title: String,

        /// Idea description
        description: String,

        /// Category (tecnologia, negocio, personal, creativo, ...)
        #[arg(long, short = 'c')]
        category: Option<String>,

        #[command(flatten)]
        backend: BackendArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update fields of an existing idea
    Update {
        /// Idea id
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New status
        #[arg(long)]
        status: Option<String>,

        #[command(flatten)]
        backend: BackendArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an idea
    Delete {
        /// Idea id
        id: u64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        backend: BackendArgs,
    },
}

/// Backend selection shared by all client commands.
#[derive(Args, Debug)]
pub struct BackendArgs {
    /// Backing strategy for idea data
    #[arg(long, value_enum, default_value_t = BackendKind::Local)]
    pub backend: BackendKind,

    /// Base URL of the API (remote backend)
    #[arg(long, default_value = "http://localhost:5000")]
    pub api_url: String,

    /// Path of the JSON data file (local backend)
    #[arg(long, default_value = ".ideario/ideas.json")]
    pub data_file: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    Remote,
    Local,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Remote => write!(f, "remote"),
            BackendKind::Local => write!(f, "local"),
        }
    }
}
