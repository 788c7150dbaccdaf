//! Blob store trait.
//!
//! Defines the interface for the durable blob store shared with the
//! external webhook worker. Implementations live in hookrelay-infra.

use hookrelay_types::error::BlobError;

/// Trait for the path-addressed durable blob store.
///
/// Paths are relative to the `webhook_calls` bucket: the bridge writes
/// `request/{id}` and reads `response/{id}`. Absence is modeled as
/// `Ok(None)`, never as an error -- a response that has not appeared yet is
/// the common case, not a fault.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in hookrelay-infra.
pub trait BlobStore: Send + Sync {
    /// Write a blob at the given path. Request blobs are write-once and
    /// never read back by this system.
    fn put(
        &self,
        path: &str,
        bytes: &[u8],
    ) -> impl std::future::Future<Output = Result<(), BlobError>> + Send;

    /// Read a blob. Returns None when nothing exists at the path.
    fn get(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<u8>>, BlobError>> + Send;
}
