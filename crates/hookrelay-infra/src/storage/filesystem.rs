//! Filesystem blob store implementation.
//!
//! Implements `BlobStore` from `hookrelay-core` with blobs stored at
//! `{data_dir}/webhook_calls/{path}`. The external worker watches the
//! `request/` side of the bucket and writes the `response/` side; both
//! live in the same directory tree, so a local worker needs nothing but
//! filesystem access.

use std::path::{Component, Path, PathBuf};

use hookrelay_core::storage::blob_store::BlobStore;
use hookrelay_types::correlation::BLOB_BUCKET;
use hookrelay_types::error::BlobError;

/// Filesystem-backed implementation of `BlobStore`.
pub struct FsBlobStore {
    bucket_dir: PathBuf,
}

impl FsBlobStore {
    /// Create a blob store rooted at `{data_dir}/webhook_calls`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            bucket_dir: data_dir.join(BLOB_BUCKET),
        }
    }

    /// Resolve a bucket-relative path, rejecting anything that could
    /// escape the bucket (absolute paths, `..`, empty paths).
    fn resolve(&self, path: &str) -> Result<PathBuf, BlobError> {
        let rel = Path::new(path);
        let escapes = path.is_empty()
            || rel.is_absolute()
            || rel.components().any(|c| !matches!(c, Component::Normal(_)));
        if escapes {
            return Err(BlobError::InvalidPath(path.to_string()));
        }
        Ok(self.bucket_dir.join(rel))
    }
}

impl BlobStore for FsBlobStore {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), BlobError> {
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                BlobError::Unavailable(format!("create dir {}: {e}", parent.display()))
            })?;
        }
        tokio::fs::write(&target, bytes)
            .await
            .map_err(|e| BlobError::Unavailable(format!("write {}: {e}", target.display())))?;

        Ok(())
    }

    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, BlobError> {
        let target = self.resolve(path)?;
        match tokio::fs::read(&target).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BlobError::Unavailable(format!(
                "read {}: {err}",
                target.display()
            ))),
        }
    }
}
