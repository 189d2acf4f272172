//! Configuration loader for Colloquy.
//!
//! Reads `config.toml` from the data directory (`~/.colloquy/` by default)
//! and deserializes it into [`AppConfig`]. Falls back to defaults when the
//! file is missing or malformed. The Gemini API key is read from the
//! environment only and wrapped in [`SecretString`] so it never reaches
//! Debug output or logs.

use std::path::{Path, PathBuf};

use colloquy_types::config::AppConfig;
use secrecy::SecretString;

/// Environment variable naming the Gemini API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Load application configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_app_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

/// Resolve the data directory from `COLLOQUY_DATA_DIR`, falling back to
/// `~/.colloquy`.
pub fn resolve_data_dir() -> PathBuf {
    match std::env::var("COLLOQUY_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".colloquy")
        }
    }
}

/// Read the Gemini API key from the environment.
///
/// Returns `None` when the variable is unset or blank; the generator turns
/// that into an authentication failure at call time rather than refusing to
/// start, so the rest of the API stays usable without a key.
pub fn gemini_api_key() -> Option<SecretString> {
    std::env::var(GEMINI_API_KEY_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .map(SecretString::from)
}
