//! Configuration loading and data directory resolution.
//!
//! Reads `config.toml` from the data directory (`~/.hookrelay/` in
//! production) and deserializes it into [`BridgeConfig`]. Falls back to
//! the stock 50ms/15000ms timing when the file is missing or malformed.

use std::path::{Path, PathBuf};

use hookrelay_types::config::BridgeConfig;

/// Resolve the data directory from `HOOKRELAY_DATA_DIR`, falling back to
/// `~/.hookrelay`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("HOOKRELAY_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".hookrelay");
    }

    // Last resort: current directory
    PathBuf::from(".hookrelay")
}

/// Load bridge configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`BridgeConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default -- a broken config file must not take the bridge
///   down.
pub async fn load_config(data_dir: &Path) -> BridgeConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            return BridgeConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return BridgeConfig::default();
        }
    };

    match toml::from_str::<BridgeConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            BridgeConfig::default()
        }
    }
}
