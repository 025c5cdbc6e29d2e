//! Process configuration.
//!
//! Settings are layered (highest wins): CLI flags / environment variables
//! (both handled by clap), then an optional TOML file, then defaults.
//! Resolved once at startup; nothing here is mutated afterwards.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Environment variable that switches the server into discover mode.
pub const DATA_SOURCE_ENV: &str = "DYNAMIC_SPACE_DATA";

/// Default Hugging Face hub endpoint.
pub const DEFAULT_HUB_URL: &str = "https://huggingface.co";

/// Contents of the optional `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub data_source: Option<String>,
    pub hf_token: Option<String>,
    pub hub_url: Option<String>,
    pub http_timeout_secs: Option<u64>,
    pub invoke_timeout_secs: Option<u64>,
    pub schema_cache_ttl_secs: Option<u64>,
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_source: Option<String>,
    pub hf_token: Option<String>,
    pub hub_url: Option<String>,
}

/// Fully resolved settings for one process.
#[derive(Debug, Clone)]
pub struct SpaceSettings {
    /// Location of the curated spaces CSV. Presence selects discover mode.
    pub data_source: Option<String>,
    pub hf_token: Option<String>,
    pub hub_url: String,
    pub http_timeout: Duration,
    pub invoke_timeout: Duration,
    pub schema_cache_ttl: Duration,
}

impl Default for SpaceSettings {
    fn default() -> Self {
        Self {
            data_source: None,
            hf_token: None,
            hub_url: DEFAULT_HUB_URL.to_string(),
            http_timeout: Duration::from_secs(30),
            invoke_timeout: Duration::from_secs(300),
            schema_cache_ttl: Duration::from_secs(300),
        }
    }
}

impl SpaceSettings {
    /// Merge overrides over a file config over defaults.
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Self {
        let defaults = Self::default();

        Self {
            data_source: non_empty(overrides.data_source).or_else(|| non_empty(file.data_source)),
            hf_token: non_empty(overrides.hf_token).or_else(|| non_empty(file.hf_token)),
            hub_url: non_empty(overrides.hub_url)
                .or_else(|| non_empty(file.hub_url))
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.hub_url),
            http_timeout: file
                .http_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
            invoke_timeout: file
                .invoke_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.invoke_timeout),
            schema_cache_ttl: file
                .schema_cache_ttl_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.schema_cache_ttl),
        }
    }

    /// Load settings: explicit config path > `<config_dir>/dynaspace/config.toml`.
    pub fn load(overrides: Overrides, config_path: Option<&Path>) -> Self {
        let path = config_path
            .map(Path::to_path_buf)
            .or_else(default_config_path);
        let file = path.as_deref().map(load_file_config).unwrap_or_default();
        Self::resolve(overrides, file)
    }
}

/// Default config file location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dynaspace").join("config.toml"))
}

/// Read a TOML config file. Missing files are silent; broken ones warn.
pub fn load_file_config(path: &Path) -> FileConfig {
    if !path.exists() {
        return FileConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<FileConfig>(&contents) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                FileConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}. Using defaults.", path.display(), e);
            FileConfig::default()
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
