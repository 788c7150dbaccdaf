//! Deadline-bounded response polling.
//!
//! The temporal core of the bridge: sleep a fixed interval, check the
//! response blob path, repeat until content appears or the wall-clock
//! deadline passes. The sleep precedes the first check, so the first read
//! happens no earlier than one interval after the poll starts -- the
//! request blob has only just landed, and an immediate read would always
//! miss.

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use hookrelay_types::correlation::CorrelationId;

use crate::storage::blob_store::BlobStore;

/// Timing parameters for one poll phase.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    /// Fixed sleep between attempts. No backoff: call latency must stay
    /// low and bounded.
    pub interval: Duration,

    /// Wall-clock budget, measured once from the start of the poll. Under
    /// slow storage fewer attempts fit before expiry; that is acceptable.
    pub deadline: Duration,
}

/// How a poll phase ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The response blob appeared; its content, decoded as UTF-8.
    Found(String),
    /// The deadline elapsed with no response. A normal outcome, not a
    /// fault: the caller decides what absence means.
    TimedOut,
    /// The caller cancelled the operation mid-poll.
    Cancelled,
}

/// Poll state machine: either still waiting, or settled on an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PollState {
    Polling,
    Done(PollOutcome),
}

/// Poll `response/{id}` until content appears, the deadline elapses, or the
/// token is cancelled.
///
/// A transient read error counts as "absent" for that attempt: the store
/// gets another chance on the next tick, still under the same deadline, so
/// flaky storage cannot extend the wall-clock bound. The contract is
/// at-least-one-check-within-one-interval-of-appearance, not real-time
/// delivery.
pub async fn poll_for_response<B: BlobStore>(
    blobs: &B,
    id: &CorrelationId,
    config: PollConfig,
    cancel: &CancellationToken,
) -> PollOutcome {
    let deadline_at = Instant::now() + config.deadline;
    let path = id.response_path();

    let mut state = PollState::Polling;
    loop {
        match state {
            PollState::Done(outcome) => {
                if outcome == PollOutcome::TimedOut {
                    tracing::debug!(call_id = %id, "poll deadline elapsed with no response");
                }
                return outcome;
            }
            PollState::Polling => {
                state = tokio::select! {
                    () = cancel.cancelled() => PollState::Done(PollOutcome::Cancelled),
                    () = tokio::time::sleep(config.interval) => {
                        match blobs.get(&path).await {
                            Ok(Some(bytes)) => PollState::Done(PollOutcome::Found(
                                String::from_utf8_lossy(&bytes).into_owned(),
                            )),
                            Ok(None) if Instant::now() >= deadline_at => {
                                PollState::Done(PollOutcome::TimedOut)
                            }
                            Ok(None) => PollState::Polling,
                            Err(err) => {
                                tracing::debug!(
                                    call_id = %id,
                                    %err,
                                    "response check failed, treating as absent"
                                );
                                if Instant::now() >= deadline_at {
                                    PollState::Done(PollOutcome::TimedOut)
                                } else {
                                    PollState::Polling
                                }
                            }
                        }
                    }
                };
            }
        }
    }
}
