//! End-to-end tests: the call bridge over the real SQLite staging store
//! and filesystem blob store, with a task standing in for the external
//! worker.
//!
//! These run against real IO, so they assert outcomes and the cleanup
//! invariant rather than precise timing (timing bounds are covered by the
//! virtual-clock tests in hookrelay-core).

use std::time::Duration;

use hookrelay_core::call::bridge::{CallBridge, InvokeOptions};
use hookrelay_core::storage::blob_store::BlobStore;
use hookrelay_core::storage::staging_store::StagingStore;
use hookrelay_types::config::BridgeConfig;
use hookrelay_types::request::WebhookRequest;
use tokio_util::sync::CancellationToken;

use crate::sqlite::pool::{DatabasePool, database_url};
use crate::sqlite::staging::SqliteStagingStore;
use crate::storage::filesystem::FsBlobStore;

struct Stack {
    bridge: CallBridge<SqliteStagingStore, FsBlobStore>,
    pool: DatabasePool,
    data_dir: std::path::PathBuf,
}

async fn fast_stack() -> Stack {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().to_path_buf();
    std::mem::forget(dir);

    let pool = DatabasePool::new(&database_url(&data_dir)).await.unwrap();
    let bridge = CallBridge::with_config(
        SqliteStagingStore::new(pool.clone()),
        FsBlobStore::new(&data_dir),
        BridgeConfig {
            poll_interval_ms: 10,
            deadline_ms: 2_000,
        },
    );
    Stack {
        bridge,
        pool,
        data_dir,
    }
}

/// Stand-in for the external worker: watch the request side of the bucket,
/// answer the first request with `pong:{payload}` on the response side.
///
/// The worker does not know the correlation ID in advance; it scans the
/// request directory like a real queue consumer would.
fn spawn_echo_worker(data_dir: &std::path::Path) -> tokio::task::JoinHandle<()> {
    let blobs = FsBlobStore::new(data_dir);
    let request_dir = data_dir
        .join(hookrelay_types::correlation::BLOB_BUCKET)
        .join("request");
    tokio::spawn(async move {
        for _ in 0..200 {
            tokio::time::sleep(Duration::from_millis(10)).await;
            let Ok(mut entries) = std::fs::read_dir(&request_dir) else {
                continue;
            };
            if let Some(Ok(entry)) = entries.next() {
                let name = entry.file_name().to_string_lossy().into_owned();
                let Ok(Some(bytes)) = blobs.get(&format!("request/{name}")).await else {
                    continue;
                };
                let request: WebhookRequest = serde_json::from_slice(&bytes).unwrap();
                blobs
                    .put(
                        &format!("response/{name}"),
                        format!("pong:{}", request.payload).as_bytes(),
                    )
                    .await
                    .unwrap();
                return;
            }
        }
        panic!("no request blob appeared for the worker to answer");
    })
}

async fn staging_is_gone(pool: &DatabasePool) -> bool {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type='table' AND name LIKE 'webhook-%'",
    )
    .fetch_all(&pool.reader)
    .await
    .unwrap();
    tables.is_empty()
}

#[tokio::test]
async fn test_roundtrip_with_echo_worker() {
    let stack = fast_stack().await;
    let worker = spawn_echo_worker(&stack.data_dir);

    let response = stack
        .bridge
        .invoke("https://example.com/hook", "POST", "hello")
        .await
        .unwrap();
    worker.await.unwrap();

    assert_eq!(response.as_deref(), Some("pong:hello"));
    assert!(staging_is_gone(&stack.pool).await, "staging record leaked");
}

#[tokio::test]
async fn test_timeout_leaves_no_staging_but_keeps_request_blob() {
    let stack = fast_stack().await;

    let response = stack
        .bridge
        .invoke_with(
            "https://example.com/hook",
            "POST",
            "{}",
            InvokeOptions {
                poll_interval: Some(Duration::from_millis(10)),
                deadline: Some(Duration::from_millis(100)),
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(response, None);
    assert!(staging_is_gone(&stack.pool).await, "staging record leaked");

    // The request blob belongs to the worker's contract and stays behind.
    let request_dir = stack.data_dir.join("webhook_calls").join("request");
    let count = std::fs::read_dir(&request_dir).unwrap().count();
    assert_eq!(count, 1, "expected exactly one exported request blob");
}

#[tokio::test]
async fn test_concurrent_calls_use_disjoint_records_and_paths() {
    let stack = fast_stack().await;
    let staging = SqliteStagingStore::new(stack.pool.clone());
    let blobs = FsBlobStore::new(&stack.data_dir);

    let a = hookrelay_types::correlation::CorrelationId::generate();
    let b = hookrelay_types::correlation::CorrelationId::generate();

    staging.create(&a).await.unwrap();
    staging.create(&b).await.unwrap();
    blobs.put(&a.response_path(), b"for a").await.unwrap();

    // B's response path is untouched by A's blob.
    assert_eq!(blobs.get(&b.response_path()).await.unwrap(), None);

    staging.destroy(&a).await.unwrap();
    staging.destroy(&b).await.unwrap();
}
