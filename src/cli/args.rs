//! cli::args
//!
//! Command-line argument definitions using clap derive.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// driftwood - unified status, staging, commits, and credentialed sync for
/// a git working tree
#[derive(Parser, Debug)]
#[command(name = "dw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Operate on this directory instead of the current one
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show unified working-tree status as JSON
    Status {
        /// Include incoming/outgoing commit listings
        #[arg(long)]
        full: bool,
    },

    /// Stage the given files
    Stage {
        /// Files to stage, relative to the repository root
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Remove the given files from the index
    Unstage {
        /// Files to unstage, relative to the repository root
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Record a commit
    Commit {
        /// Commit message
        #[arg(short, long)]
        message: String,
    },

    /// Push to the tracking remote
    Push {
        /// Authenticate with stored credentials
        #[arg(long)]
        auth: bool,
    },

    /// Pull from the tracking remote
    Pull {
        /// Authenticate with stored credentials
        #[arg(long)]
        auth: bool,
    },

    /// Update tracking information from the remote
    Fetch {
        /// Authenticate with stored credentials
        #[arg(long)]
        auth: bool,
    },

    /// Clone a repository
    Clone {
        /// Source URL
        url: String,
        /// Target directory (must not exist)
        target: PathBuf,
        /// Authenticate with stored credentials
        #[arg(long)]
        auth: bool,
    },

    /// Show commits ahead of and behind the tracking ref as JSON
    Diff,

    /// Show a cheap repository summary as JSON
    Info,

    /// Store credentials for authenticated remote operations
    Login,
}
