//! The `hrly invoke` command: run one bridge call end to end.

use std::time::Duration;

use anyhow::Result;
use console::style;
use tokio_util::sync::CancellationToken;

use hookrelay_core::call::bridge::InvokeOptions;

use crate::state::AppState;

/// Stage the call, wait for the response, print the result.
///
/// A missing response is a normal outcome: the command prints an absence
/// report and exits 0. Use `--json` to distinguish the cases mechanically.
pub async fn run_invoke(
    state: &AppState,
    url: &str,
    method: &str,
    payload: &str,
    poll_interval_ms: Option<u64>,
    deadline_ms: Option<u64>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let options = InvokeOptions {
        poll_interval: poll_interval_ms.map(Duration::from_millis),
        deadline: deadline_ms.map(Duration::from_millis),
    };

    // Ctrl-C resolves the poll early; staging cleanup still runs before
    // the command returns.
    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    let response = state
        .bridge
        .invoke_with(url, method, payload, options, &cancel)
        .await?;

    if json {
        let result = serde_json::json!({
            "delivered": response.is_some(),
            "response": response,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match response {
        Some(body) => println!("{body}"),
        None if quiet => {}
        None => {
            let response_dir = state.data_dir.join("webhook_calls").join("response");
            eprintln!();
            eprintln!(
                "  {} no response before the deadline",
                style("absent").yellow()
            );
            eprintln!(
                "  the worker may still deliver under {}",
                style(response_dir.display()).dim()
            );
            eprintln!();
        }
    }

    Ok(())
}
