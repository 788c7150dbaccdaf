//! The staged webhook request.

use serde::{Deserialize, Serialize};

use crate::correlation::CorrelationId;

/// One outbound webhook call, as staged and exported.
///
/// The serde field names are the wire format of the request blob: the
/// external worker consumes `{"id": …, "url": …, "method": …, "payload": …}`
/// verbatim. Immutable once staged; owned by a single invocation for its
/// whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookRequest {
    /// Correlation ID joining this request to its response blob.
    pub id: CorrelationId,
    /// Target URL the external worker will call.
    pub url: String,
    /// HTTP method for the worker to use (e.g. "POST").
    pub method: String,
    /// Serialized request body, passed through untouched.
    pub payload: String,
}
