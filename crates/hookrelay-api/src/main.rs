//! Hookrelay CLI entry point.
//!
//! Binary name: `hrly`
//!
//! Parses CLI arguments, initializes tracing and the bridge state, then
//! dispatches to the command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,hookrelay_core=debug,hookrelay_infra=debug",
        _ => "trace",
    };
    hookrelay_observe::tracing_setup::init_tracing(filter, cli.json)?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "hrly", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;

    match cli.command {
        Commands::Invoke {
            url,
            method,
            payload,
            poll_interval_ms,
            deadline_ms,
        } => {
            cli::invoke::run_invoke(
                &state,
                &url,
                &method,
                &payload,
                poll_interval_ms,
                deadline_ms,
                cli.json,
                cli.quiet,
            )
            .await?;
        }

        // Handled before state initialization above.
        Commands::Completions { .. } => {}
    }

    Ok(())
}
