//! CLI command definitions and dispatch for the `hrly` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod invoke;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Bridge synchronous callers to asynchronous webhook delivery.
#[derive(Parser)]
#[command(name = "hrly", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stage a webhook call and wait for its response.
    Invoke {
        /// Target URL the external worker will call.
        url: String,

        /// HTTP method for the worker to use.
        #[arg(short, long, default_value = "POST")]
        method: String,

        /// Request body, passed through untouched.
        #[arg(short, long, default_value = "")]
        payload: String,

        /// Milliseconds between response polls (default from config.toml,
        /// stock 50).
        #[arg(long)]
        poll_interval_ms: Option<u64>,

        /// Milliseconds to wait for a response before reporting absence
        /// (default from config.toml, stock 15000).
        #[arg(long)]
        deadline_ms: Option<u64>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
