//! Configuration loading for chavrutad.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.chavruta/config.toml` (user)
//! 3. `/etc/chavruta/config.toml` (system)
//!
//! The API key is loaded separately with mandatory permission checks:
//! 1. `~/.chavruta/secrets.toml` (user, must be 0600)
//! 2. `/etc/chavruta/secrets.toml` (system, must be 0600)
//! 3. `OPENAI_API_KEY` environment variable

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::cache::CacheConfig;
use crate::providers::RetryConfig;
use crate::{ChavrutaError, Result};

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub retry: RetrySettings,
}

/// Server network configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8741).
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            limits: LimitsConfig::default(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1:8741".to_string()
}

/// Per-endpoint deadlines and body limits.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Chat request deadline in seconds (default: 40).
    #[serde(default = "default_chat_timeout")]
    pub chat_timeout_secs: u64,
    /// Popular-topics request deadline in seconds (default: 15).
    #[serde(default = "default_topics_timeout")]
    pub topics_timeout_secs: u64,
    /// Maximum request body size in bytes (default: 64 KiB).
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            chat_timeout_secs: default_chat_timeout(),
            topics_timeout_secs: default_topics_timeout(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_chat_timeout() -> u64 {
    40
}

fn default_topics_timeout() -> u64 {
    15
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

/// Generation provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the generation API (default: https://api.openai.com).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used when a request does not name one.
    #[serde(default = "default_model")]
    pub default_model: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

/// Response-cache tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_entries")]
    pub max_entries: usize,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_entries: default_cache_entries(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_cache_entries() -> usize {
    100
}

fn default_cache_ttl() -> u64 {
    300
}

impl From<&CacheSettings> for CacheConfig {
    fn from(settings: &CacheSettings) -> Self {
        CacheConfig::new()
            .max_entries(settings.max_entries)
            .ttl(Duration::from_secs(settings.ttl_secs))
    }
}

/// Retry policy tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrySettings {
    #[serde(default = "default_retry_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: default_retry_attempts(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    5000
}

impl From<&RetrySettings> for RetryConfig {
    fn from(settings: &RetrySettings) -> Self {
        RetryConfig::new()
            .max_attempts(settings.max_attempts)
            .initial_delay(Duration::from_millis(settings.initial_delay_ms))
            .max_delay(Duration::from_millis(settings.max_delay_ms))
    }
}

/// Secrets configuration (API key).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Secrets {
    #[serde(default)]
    pub openai: Option<ApiKeySecret>,
}

/// A single API key secret.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeySecret {
    pub api_key: String,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Falls back to defaults if no config file exists anywhere; an
    /// explicit `--config` path that does not exist is an error.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit_path)? else {
            return Ok(Config::default());
        };
        let content = fs::read_to_string(&path).map_err(|e| {
            ChavrutaError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            ChavrutaError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path, if any file exists.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(ChavrutaError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".chavruta").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        let system_config = PathBuf::from("/etc/chavruta/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}

impl Secrets {
    /// Load secrets from the standard locations with permission checks.
    ///
    /// Returns empty secrets if no file exists (the key may come from the
    /// environment instead).
    pub fn load() -> Result<Self> {
        if let Some(home) = dirs::home_dir() {
            let user_secrets = home.join(".chavruta").join("secrets.toml");
            if user_secrets.exists() {
                Self::check_permissions(&user_secrets)?;
                return Self::load_from_file(&user_secrets);
            }
        }

        let system_secrets = PathBuf::from("/etc/chavruta/secrets.toml");
        if system_secrets.exists() {
            Self::check_permissions(&system_secrets)?;
            return Self::load_from_file(&system_secrets);
        }

        Ok(Secrets::default())
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ChavrutaError::Configuration(format!("Failed to read secrets file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            ChavrutaError::Configuration(format!("Failed to parse secrets file {path:?}: {e}"))
        })
    }

    /// Check that the secrets file has secure permissions (0600 or 0400).
    #[cfg(unix)]
    fn check_permissions(path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(path).map_err(|e| {
            ChavrutaError::Configuration(format!("Failed to stat secrets file {path:?}: {e}"))
        })?;

        let mode = metadata.permissions().mode();
        // Reject if group or other bits are set
        if mode & 0o077 != 0 {
            return Err(ChavrutaError::Configuration(format!(
                "Secrets file {path:?} has insecure permissions {:o}. Must be 0600 or 0400.",
                mode & 0o777
            )));
        }

        Ok(())
    }

    #[cfg(not(unix))]
    fn check_permissions(_path: &Path) -> Result<()> {
        Ok(())
    }

    /// The API key, from the secrets file or the `OPENAI_API_KEY`
    /// environment variable.
    pub fn api_key(&self) -> Option<String> {
        self.openai
            .as_ref()
            .map(|s| s.api_key.clone())
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
    }
}
