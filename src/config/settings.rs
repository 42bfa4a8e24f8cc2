//! Application settings loading.
//!
//! Three layers, lowest priority first: built-in defaults, an optional
//! `config.toml` next to the binary, and environment variables
//! (`PM_API_BASE_URL`, `PM_REQUEST_TIMEOUT_SECS`, `PM_EXPORT_DIR`).
//! A missing config file is fine; a malformed one is an error.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Default API server address, matching the development server.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the PM API server
    pub api_base_url: String,
    /// Per-request timeout applied to every gateway call
    pub request_timeout: Duration,
    /// Directory the PDF export is written into
    pub export_dir: PathBuf,
}

/// Structure of the optional config.toml file.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    api: ApiSection,
    #[serde(default)]
    export: ExportSection,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct ExportSection {
    dir: Option<PathBuf>,
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|failure| Error::Config {
        message: format!("Failed to read {}: {failure}", path.display()),
    })?;
    toml::from_str(&contents).map_err(|failure| Error::Config {
        message: format!("Failed to parse {}: {failure}", path.display()),
    })
}

/// Loads configuration from `./config.toml` plus the environment.
pub fn load_app_configuration() -> Result<AppConfig> {
    load_from(Path::new("config.toml"))
}

/// Loads configuration from the given file path plus the environment.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    let file = read_file_config(path)?;

    let api_base_url = std::env::var("PM_API_BASE_URL")
        .ok()
        .or(file.api.base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    let timeout_secs = match std::env::var("PM_REQUEST_TIMEOUT_SECS") {
        Ok(raw) => raw.parse().map_err(|_| Error::Config {
            message: format!("PM_REQUEST_TIMEOUT_SECS is not a number: {raw}"),
        })?,
        Err(_) => file.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
    };

    let export_dir = std::env::var("PM_EXPORT_DIR")
        .ok()
        .map(PathBuf::from)
        .or(file.export.dir)
        .unwrap_or_else(|| PathBuf::from("."));

    info!("Using API base URL {api_base_url}");
    Ok(AppConfig {
        api_base_url,
        request_timeout: Duration::from_secs(timeout_secs),
        export_dir,
    })
}
