//! Application configuration types.
//!
//! [`AppConfig`] is deserialized from `{data_dir}/config.toml`; every field
//! has a default so a missing or partial file still yields a working
//! configuration. The Gemini API key is NOT part of this struct -- it comes
//! from the environment only and is wrapped in a secret type by the loader.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Deployment mode controlling how much error detail reaches clients.
///
/// `Development` exposes underlying error text in 500 responses;
/// `Production` replaces it with a generic sentence. Full detail is always
/// logged server-side in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Whether 500-class responses may carry the underlying error text.
    pub fn expose_error_detail(self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            other => Err(format!("invalid environment: '{other}'")),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

/// Server configuration, read from `config.toml` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bind address for the HTTP server.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port for the HTTP server.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Gemini model identifier used for reply generation.
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound on a single generator call, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Deployment mode (error detail exposure).
    #[serde(default)]
    pub environment: Environment,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            model: default_model(),
            request_timeout_secs: default_request_timeout_secs(),
            environment: Environment::default(),
        }
    }
}
