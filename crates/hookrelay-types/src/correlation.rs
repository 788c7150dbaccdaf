//! Correlation IDs and the storage names derived from them.
//!
//! A `CorrelationId` is the sole join key between a call's staging record
//! and its request/response blobs. All name derivation lives here so the
//! staging store, the exporter, and the poller can never disagree on paths.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Logical blob bucket holding request and response artifacts.
///
/// Blob store implementations root themselves under this prefix; the paths
/// passed through the `BlobStore` trait are relative to it.
pub const BLOB_BUCKET: &str = "webhook_calls";

/// Opaque per-call identifier correlating a staged request with the response
/// blob an external worker eventually writes.
///
/// Generated fresh for every invocation and never reused. UUID v4 gives
/// 122 bits of entropy, so uniqueness across historical and concurrent
/// calls holds without any coordination between callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    /// Generate a fresh random ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Name of the call-scoped staging record: `webhook-{id}`.
    pub fn staging_name(&self) -> String {
        format!("webhook-{}", self.0)
    }

    /// Blob path the request is exported to: `request/{id}`.
    pub fn request_path(&self) -> String {
        format!("request/{}", self.0)
    }

    /// Blob path the external worker writes the response to: `response/{id}`.
    pub fn response_path(&self) -> String {
        format!("response/{}", self.0)
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for CorrelationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
