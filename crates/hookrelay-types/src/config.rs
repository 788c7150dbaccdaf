//! Bridge timing configuration.
//!
//! `BridgeConfig` represents the `config.toml` knobs controlling the
//! response poller. Every field has a default, so a missing or empty file
//! yields the stock behavior.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing configuration for the call bridge.
///
/// Loaded from `{data_dir}/config.toml`. The defaults (50ms poll interval,
/// 15s deadline) bound a caller's worst-case wait at roughly
/// `deadline + one interval` plus storage latencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Fixed delay between response polls, in milliseconds. No backoff:
    /// call latency must stay low and bounded.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Wall-clock budget for the poll phase, in milliseconds. Expiry is a
    /// normal outcome ("no response yet"), not an error.
    #[serde(default = "default_deadline_ms")]
    pub deadline_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    50
}

fn default_deadline_ms() -> u64 {
    15_000
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            deadline_ms: default_deadline_ms(),
        }
    }
}

impl BridgeConfig {
    /// Poll interval as a `Duration`.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Poll deadline as a `Duration`.
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }
}
