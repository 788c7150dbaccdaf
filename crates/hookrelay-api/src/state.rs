//! Application state wiring the bridge to its concrete backends.
//!
//! The bridge is generic over the staging and blob store traits; AppState
//! pins it to the SQLite and filesystem implementations from
//! `hookrelay-infra`.

use std::path::PathBuf;

use hookrelay_core::call::bridge::CallBridge;
use hookrelay_infra::config::{load_config, resolve_data_dir};
use hookrelay_infra::sqlite::pool::{DatabasePool, database_url};
use hookrelay_infra::sqlite::staging::SqliteStagingStore;
use hookrelay_infra::storage::filesystem::FsBlobStore;

/// The bridge generics pinned to the concrete infra implementations.
pub type ConcreteBridge = CallBridge<SqliteStagingStore, FsBlobStore>;

/// Shared application state for CLI commands.
pub struct AppState {
    pub bridge: ConcreteBridge,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: resolve the data directory, open
    /// the database, load config.toml, wire the bridge.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let pool = DatabasePool::new(&database_url(&data_dir)).await?;
        let config = load_config(&data_dir).await;

        let bridge = CallBridge::with_config(
            SqliteStagingStore::new(pool),
            FsBlobStore::new(&data_dir),
            config,
        );

        Ok(Self { bridge, data_dir })
    }
}
