//! Staging store trait.
//!
//! Defines the interface for the call-scoped durable staging store.
//! Implementations live in hookrelay-infra.

use hookrelay_types::correlation::CorrelationId;
use hookrelay_types::error::StagingError;
use hookrelay_types::request::WebhookRequest;

/// Trait for the durable staging store holding one record per call.
///
/// The record is named `webhook-{id}`, created empty, written exactly once,
/// read once by the exporter, and destroyed unconditionally when the call
/// ends. A record outliving its call is a resource-correctness bug.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in hookrelay-infra.
pub trait StagingStore: Send + Sync {
    /// Allocate a fresh, empty call-scoped record.
    ///
    /// A naming collision is a backend error, not something to retry: IDs
    /// are assumed unique, so creation doubles as the existence check.
    fn create(
        &self,
        id: &CorrelationId,
    ) -> impl std::future::Future<Output = Result<(), StagingError>> + Send;

    /// Write the staged request into the record. Called exactly once per
    /// call, after `create`.
    fn insert(
        &self,
        id: &CorrelationId,
        request: &WebhookRequest,
    ) -> impl std::future::Future<Output = Result<(), StagingError>> + Send;

    /// Read the staged request back. Returns None when the record exists
    /// but has not been written yet.
    fn fetch(
        &self,
        id: &CorrelationId,
    ) -> impl std::future::Future<Output = Result<Option<WebhookRequest>, StagingError>> + Send;

    /// Drop the record. Idempotent: destroying a record that is already
    /// gone is not an error.
    fn destroy(
        &self,
        id: &CorrelationId,
    ) -> impl std::future::Future<Output = Result<(), StagingError>> + Send;
}
