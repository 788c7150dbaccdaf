//! Tracing subscriber initialization with structured logging.
//!
//! # Usage
//!
//! ```no_run
//! // Human-readable logs at the given default level
//! hookrelay_observe::tracing_setup::init_tracing("warn", false).unwrap();
//!
//! // One JSON object per line, for machine consumption
//! hookrelay_observe::tracing_setup::init_tracing("info", true).unwrap();
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Initialize the global tracing subscriber.
///
/// - `directives` is the default filter, overridden by `RUST_LOG` when set.
/// - When `json` is true, events are emitted as one JSON object per line;
///   otherwise as human-readable text.
/// - All log output goes to stderr, keeping stdout free for command
///   results (response bodies, `--json` documents).
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_tracing(directives: &str, json: bool) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    }
}
