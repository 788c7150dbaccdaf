//! Request blob export.
//!
//! Reads the one staged record and publishes it at `request/{id}` as the
//! JSON object the external worker consumes.

use hookrelay_types::correlation::CorrelationId;
use hookrelay_types::error::BridgeError;

use crate::storage::blob_store::BlobStore;
use crate::storage::staging_store::StagingStore;

/// Serialize the staged request and commit it to the request blob path.
///
/// Any failure -- record read, serialization, blob write -- maps to
/// `ExportFailed` and is fatal for the call: a request blob that never
/// landed means no worker will ever respond, so the bridge skips polling
/// entirely rather than waiting out a deadline that cannot be met.
pub async fn export_request<S, B>(
    staging: &S,
    blobs: &B,
    id: &CorrelationId,
) -> Result<(), BridgeError>
where
    S: StagingStore,
    B: BlobStore,
{
    let request = staging
        .fetch(id)
        .await
        .map_err(|e| BridgeError::ExportFailed(format!("staged record read failed: {e}")))?
        .ok_or_else(|| BridgeError::ExportFailed("staged record is empty".to_string()))?;

    let bytes = serde_json::to_vec(&request)
        .map_err(|e| BridgeError::ExportFailed(format!("request serialization failed: {e}")))?;

    blobs
        .put(&id.request_path(), &bytes)
        .await
        .map_err(|e| BridgeError::ExportFailed(e.to_string()))?;

    tracing::debug!(call_id = %id, bytes = bytes.len(), "request blob exported");
    Ok(())
}
