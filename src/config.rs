//! Tool configuration.
//!
//! Loaded from `icon-namer.toml`, looked up in the target folder first and
//! the current directory second. Config files are sparse; set only the
//! values you want to override:
//!
//! ```toml
//! [provider]
//! backend = "deepai"        # or "ollama"
//! api_key = "..."           # DeepAI key; DEEPAI_API_KEY env var wins
//! # endpoint = "https://..."  # override the backend's default endpoint
//! # model = "llava"           # Ollama model name
//! delay_ms = 500            # pause between description calls
//!
//! [naming]
//! prefix = "ic_"            # prepended to every generated stem
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::naming::DEFAULT_PREFIX;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config filename looked up next to the icons and in the working directory.
pub const CONFIG_FILENAME: &str = "icon-namer.toml";

/// Environment variable overriding `provider.api_key`.
pub const API_KEY_ENV: &str = "DEEPAI_API_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    DeepAi,
    Ollama,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Description backend selection and credentials.
    pub provider: ProviderConfig,
    /// Filename generation settings.
    pub naming: NamingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    pub backend: Backend,
    /// API key for hosted backends. Overridden by `DEEPAI_API_KEY`.
    pub api_key: Option<String>,
    /// Endpoint override; each backend has its own default.
    pub endpoint: Option<String>,
    /// Model name for the Ollama backend.
    pub model: Option<String>,
    /// Pause between successive description calls, in milliseconds.
    pub delay_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            api_key: None,
            endpoint: None,
            model: None,
            delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    /// Prefix prepended to every generated stem.
    pub prefix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Checks values a run cannot recover from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.backend == Backend::DeepAi
            && self.provider.api_key.as_deref().unwrap_or("").is_empty()
        {
            return Err(ConfigError::Validation(format!(
                "the deepai backend needs an API key: set provider.api_key in \
                 {CONFIG_FILENAME} or the {API_KEY_ENV} environment variable"
            )));
        }
        Ok(())
    }
}

/// Loads config for a run against `folder`.
///
/// Resolution order: explicit `--config` path (must exist), else
/// `icon-namer.toml` in the target folder, else in the current directory,
/// else defaults. The `DEEPAI_API_KEY` environment variable overrides the
/// file's key in every case. Validation is a separate step so the caller can
/// apply CLI overrides first.
pub fn load_config(folder: &Path, explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = match explicit {
        Some(path) => parse_file(path)?,
        None => {
            let candidates = [folder.join(CONFIG_FILENAME), PathBuf::from(CONFIG_FILENAME)];
            match candidates.iter().find(|p| p.is_file()) {
                Some(path) => parse_file(path)?,
                None => Config::default(),
            }
        }
    };

    if let Ok(key) = std::env::var(API_KEY_ENV)
        && !key.is_empty()
    {
        config.provider.api_key = Some(key);
    }

    Ok(config)
}

fn parse_file(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
