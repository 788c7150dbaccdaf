//! The call bridge: one synchronous webhook invocation, end to end.
//!
//! Sequence: generate a correlation ID, create and write the staging
//! record, export the request blob, poll for the response blob, destroy
//! the staging record, return the response (or its absence) to the caller.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use hookrelay_types::config::BridgeConfig;
use hookrelay_types::correlation::CorrelationId;
use hookrelay_types::error::BridgeError;
use hookrelay_types::request::WebhookRequest;

use crate::call::export::export_request;
use crate::call::poll::{PollConfig, PollOutcome, poll_for_response};
use crate::storage::blob_store::BlobStore;
use crate::storage::staging_store::StagingStore;

/// Per-call overrides for the poll phase. Unset fields fall back to the
/// bridge's `BridgeConfig`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvokeOptions {
    pub poll_interval: Option<Duration>,
    pub deadline: Option<Duration>,
}

/// Bridges a synchronous caller to the asynchronous webhook worker.
///
/// Both stores are injected handles -- there is no ambient session state,
/// so tests substitute in-memory fakes and hosts pick their own backends.
/// The bridge keeps no per-call state between invocations: concurrent
/// calls are isolated purely by correlation ID, each owning its staging
/// record and blob paths, so no locking is needed.
pub struct CallBridge<S, B> {
    staging: S,
    blobs: B,
    config: BridgeConfig,
}

impl<S, B> CallBridge<S, B>
where
    S: StagingStore,
    B: BlobStore,
{
    /// Create a bridge with stock timing (50ms interval, 15s deadline).
    pub fn new(staging: S, blobs: B) -> Self {
        Self::with_config(staging, blobs, BridgeConfig::default())
    }

    /// Create a bridge with explicit timing defaults.
    pub fn with_config(staging: S, blobs: B, config: BridgeConfig) -> Self {
        Self {
            staging,
            blobs,
            config,
        }
    }

    /// Invoke one webhook call with the configured defaults and no
    /// external cancellation.
    pub async fn invoke(
        &self,
        url: &str,
        method: &str,
        payload: &str,
    ) -> Result<Option<String>, BridgeError> {
        self.invoke_with(
            url,
            method,
            payload,
            InvokeOptions::default(),
            &CancellationToken::new(),
        )
        .await
    }

    /// Invoke one webhook call: stage, export, poll, clean up.
    ///
    /// Returns `Ok(Some(body))` when the response blob appeared in time,
    /// `Ok(None)` when it did not -- deadline expiry and cancellation both
    /// mean "no response yet", which is a normal outcome the caller
    /// interprets, not a fault. Storage and export failures are the only
    /// errors.
    ///
    /// The staging record is destroyed on every path out of this function,
    /// including cancellation; the request and response blobs are left in
    /// place, since those belong to the external worker's contract.
    pub async fn invoke_with(
        &self,
        url: &str,
        method: &str,
        payload: &str,
        options: InvokeOptions,
        cancel: &CancellationToken,
    ) -> Result<Option<String>, BridgeError> {
        let id = CorrelationId::generate();
        info!(call_id = %id, url, method, "webhook call started");

        self.staging.create(&id).await?;

        // Everything fallible after the record exists runs behind this one
        // await, so the destroy below cannot be skipped by any exit path.
        let outcome = self
            .run_staged(&id, url, method, payload, options, cancel)
            .await;

        if let Err(err) = self.staging.destroy(&id).await {
            // Cleanup failure is reported but never masks the primary
            // outcome: a response already in hand stays a success.
            warn!(call_id = %id, %err, "failed to drop staging record");
        }

        match &outcome {
            Ok(Some(_)) => info!(call_id = %id, "webhook call completed with response"),
            Ok(None) => info!(call_id = %id, "webhook call completed without response"),
            Err(err) => warn!(call_id = %id, %err, "webhook call failed"),
        }
        outcome
    }

    /// The fallible middle of a call: write the staging record, export the
    /// request blob, poll for the response.
    async fn run_staged(
        &self,
        id: &CorrelationId,
        url: &str,
        method: &str,
        payload: &str,
        options: InvokeOptions,
        cancel: &CancellationToken,
    ) -> Result<Option<String>, BridgeError> {
        let request = WebhookRequest {
            id: id.clone(),
            url: url.to_string(),
            method: method.to_string(),
            payload: payload.to_string(),
        };
        self.staging.insert(id, &request).await?;

        export_request(&self.staging, &self.blobs, id).await?;

        let poll = PollConfig {
            interval: options
                .poll_interval
                .unwrap_or_else(|| self.config.poll_interval()),
            deadline: options.deadline.unwrap_or_else(|| self.config.deadline()),
        };
        match poll_for_response(&self.blobs, id, poll, cancel).await {
            PollOutcome::Found(body) => Ok(Some(body)),
            PollOutcome::TimedOut | PollOutcome::Cancelled => Ok(None),
        }
    }
}
