use thiserror::Error;

/// Errors from the staging store (create/insert/fetch/destroy).
///
/// The staging store is treated as an ordinary transactional scratch space;
/// any backend rejection, including a naming collision on create, is
/// surfaced as `Unavailable` and is fatal for the call. IDs are assumed
/// unique, so collisions are not retried.
#[derive(Debug, Error)]
pub enum StagingError {
    #[error("staging store unavailable: {0}")]
    Unavailable(String),
}

/// Errors from the blob store (put/get).
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("blob store unavailable: {0}")]
    Unavailable(String),

    /// The path escapes the bucket (absolute, or contains `..`).
    #[error("invalid blob path: '{0}'")]
    InvalidPath(String),
}

/// Errors surfaced by `CallBridge::invoke`.
///
/// A poll deadline expiring is deliberately absent: the bridge maps it to a
/// successful call returning no response, because absence after the
/// deadline is a normal outcome of webhook delivery.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Staging store create/write/drop failed.
    #[error("staging store unavailable: {0}")]
    StorageUnavailable(String),

    /// The request blob could not be published. No external worker will
    /// ever see the request, so the call aborts without polling.
    #[error("request export failed: {0}")]
    ExportFailed(String),
}

impl From<StagingError> for BridgeError {
    fn from(err: StagingError) -> Self {
        match err {
            StagingError::Unavailable(msg) => Self::StorageUnavailable(msg),
        }
    }
}
