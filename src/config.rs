//! Application configuration.
//!
//! Loaded once at startup from a JSON file and passed explicitly into the
//! layers that need it; there is no process-wide settings singleton.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const APP_NAME: &str = "Wardview";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Get the application data directory
/// ~/Wardview/ on all platforms (user-visible, offline deployment)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Wardview")
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Server configuration. Every field has a default so a missing config
/// file yields a runnable development setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub bind_addr: String,
    /// Front-end bundle directory; served with an index.html fallback
    /// when set.
    pub static_dir: Option<PathBuf>,
    /// Deployment switch: gate the dashboard routes behind bearer tokens.
    pub require_auth: bool,
    pub auth: AuthConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: app_data_dir().join("wardview.db"),
            bind_addr: "127.0.0.1:8080".into(),
            static_dir: None,
            require_auth: true,
            auth: AuthConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Staff levels accepted at login; levels are directory-defined strings.
    pub allowed_staff_levels: Vec<String>,
    pub token_secret: String,
    pub token_expiry_minutes: i64,
    pub issuer: String,
    pub audience: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            allowed_staff_levels: vec!["1".into(), "2".into()],
            token_secret: "insecure-dev-secret".into(),
            token_expiry_minutes: 480,
            issuer: "wardview".into(),
            audience: "wardview-dashboard".into(),
        }
    }
}

impl AppConfig {
    /// Read the config file at `path`; a missing file yields the defaults,
    /// a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// True when the deployment still runs on the built-in dev secret.
    pub fn using_dev_secret(&self) -> bool {
        self.auth.token_secret == AuthConfig::default().token_secret
    }
}
