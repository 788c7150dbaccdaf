//! In-memory store fakes for poller and bridge tests.
//!
//! Both fakes are cheap clones sharing state through `Arc<DashMap>`, so a
//! test can hold a handle while the bridge owns another. `MemoryBlobStore`
//! can also play the external worker: with `respond_with` set, every
//! exported request is immediately answered at the derived response path.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use dashmap::DashMap;

use hookrelay_types::correlation::CorrelationId;
use hookrelay_types::error::{BlobError, StagingError};
use hookrelay_types::request::WebhookRequest;

use crate::storage::blob_store::BlobStore;
use crate::storage::staging_store::StagingStore;

/// In-memory staging store keyed by the derived `webhook-{id}` name.
#[derive(Clone, Default)]
pub(crate) struct MemoryStagingStore {
    records: Arc<DashMap<String, Option<WebhookRequest>>>,
    fail_creates: Arc<AtomicBool>,
    fail_inserts: Arc<AtomicBool>,
    fail_destroys: Arc<AtomicBool>,
}

impl MemoryStagingStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_count(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn fail_creates(&self) {
        self.fail_creates.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_inserts(&self) {
        self.fail_inserts.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_destroys(&self) {
        self.fail_destroys.store(true, Ordering::SeqCst);
    }
}

impl StagingStore for MemoryStagingStore {
    async fn create(&self, id: &CorrelationId) -> Result<(), StagingError> {
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(StagingError::Unavailable("create rejected".to_string()));
        }
        let name = id.staging_name();
        if self.records.contains_key(&name) {
            return Err(StagingError::Unavailable(format!(
                "record '{name}' already exists"
            )));
        }
        self.records.insert(name, None);
        Ok(())
    }

    async fn insert(
        &self,
        id: &CorrelationId,
        request: &WebhookRequest,
    ) -> Result<(), StagingError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(StagingError::Unavailable("insert rejected".to_string()));
        }
        match self.records.get_mut(&id.staging_name()) {
            Some(mut slot) => {
                *slot = Some(request.clone());
                Ok(())
            }
            None => Err(StagingError::Unavailable(format!(
                "record '{}' does not exist",
                id.staging_name()
            ))),
        }
    }

    async fn fetch(&self, id: &CorrelationId) -> Result<Option<WebhookRequest>, StagingError> {
        match self.records.get(&id.staging_name()) {
            Some(slot) => Ok(slot.value().clone()),
            None => Err(StagingError::Unavailable(format!(
                "record '{}' does not exist",
                id.staging_name()
            ))),
        }
    }

    async fn destroy(&self, id: &CorrelationId) -> Result<(), StagingError> {
        if self.fail_destroys.load(Ordering::SeqCst) {
            return Err(StagingError::Unavailable("destroy rejected".to_string()));
        }
        self.records.remove(&id.staging_name());
        Ok(())
    }
}

/// In-memory blob store with fault injection and an optional echo worker.
#[derive(Clone, Default)]
pub(crate) struct MemoryBlobStore {
    blobs: Arc<DashMap<String, Vec<u8>>>,
    /// When set, a `put` of `request/{id}` immediately writes this body at
    /// `response/{id}`, simulating a worker that answers before the first
    /// poll. `{payload}` is replaced with the request's payload.
    respond_with: Arc<RwLock<Option<String>>>,
    reject_puts: Arc<AtomicBool>,
    get_errors_remaining: Arc<AtomicU32>,
    gets: Arc<AtomicUsize>,
}

impl MemoryBlobStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Seed a blob directly, bypassing the `BlobStore` interface.
    pub(crate) fn seed(&self, path: &str, bytes: &[u8]) {
        self.blobs.insert(path.to_string(), bytes.to_vec());
    }

    pub(crate) fn contains(&self, path: &str) -> bool {
        self.blobs.contains_key(path)
    }

    pub(crate) fn contains_prefix(&self, prefix: &str) -> bool {
        self.blobs.iter().any(|b| b.key().starts_with(prefix))
    }

    pub(crate) fn blob(&self, path: &str) -> Option<Vec<u8>> {
        self.blobs.get(path).map(|b| b.value().clone())
    }

    /// Number of `get` calls observed, failed attempts included.
    pub(crate) fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub(crate) fn reject_puts(&self) {
        self.reject_puts.store(true, Ordering::SeqCst);
    }

    /// Make the next `n` reads fail with a transient error.
    pub(crate) fn fail_next_gets(&self, n: u32) {
        self.get_errors_remaining.store(n, Ordering::SeqCst);
    }

    /// Answer every exported request with `body` (`{payload}` expands to
    /// the request's payload).
    pub(crate) fn respond_with(&self, body: &str) {
        *self.respond_with.write().unwrap() = Some(body.to_string());
    }
}

impl BlobStore for MemoryBlobStore {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), BlobError> {
        if self.reject_puts.load(Ordering::SeqCst) {
            return Err(BlobError::Unavailable("put rejected".to_string()));
        }
        self.blobs.insert(path.to_string(), bytes.to_vec());

        if let (Some(call_id), Some(template)) = (
            path.strip_prefix("request/"),
            self.respond_with.read().unwrap().clone(),
        ) {
            let payload = serde_json::from_slice::<WebhookRequest>(bytes)
                .map(|request| request.payload)
                .unwrap_or_default();
            self.blobs.insert(
                format!("response/{call_id}"),
                template.replace("{payload}", &payload).into_bytes(),
            );
        }
        Ok(())
    }

    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, BlobError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        let remaining = self.get_errors_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.get_errors_remaining
                .store(remaining - 1, Ordering::SeqCst);
            return Err(BlobError::Unavailable("transient read failure".to_string()));
        }
        Ok(self.blobs.get(path).map(|b| b.value().clone()))
    }
}
