//! Configuration management for Marquee

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Default TMDB v3 API host.
pub const TMDB_API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default TMDB image host. Poster paths are appended after a size segment.
pub const MOVIE_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Catalog responses are requested in this locale.
pub const DEFAULT_LANGUAGE: &str = "ko-KR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    /// API key from the config file. The `TMDB_API_KEY` environment variable
    /// takes precedence; see [`Config::api_key`].
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            language: default_language(),
            api_base_url: default_api_base_url(),
            image_base_url: default_image_base_url(),
        }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_api_base_url() -> String {
    TMDB_API_BASE_URL.to_string()
}

fn default_image_base_url() -> String {
    MOVIE_IMAGE_BASE_URL.to_string()
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing config file is not an error; defaults are used so the API
    /// key can come entirely from the environment.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            Ok(Self::default_config())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self {
            tmdb: TmdbConfig::default(),
        }
    }

    /// Resolve the API key, preferring `TMDB_API_KEY` over the config file.
    ///
    /// Absence is a startup misconfiguration, reported as
    /// [`ConfigError::MissingField`].
    pub fn api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var("TMDB_API_KEY") {
            if !key.is_empty() {
                return Ok(key);
            }
        }

        self.tmdb
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingField("tmdb.api_key".to_string()).into())
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("MARQUEE_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("marquee").join("config.toml"))
}
