//! Configuration management for forgekit.
//!
//! Handles loading and saving configuration from TOML files.
//! Config files are stored in platform-specific locations:
//!
//! - **macOS/Linux**: `~/.config/forgekit/config.toml`
//! - **Windows**: `%APPDATA%\forgekit\config.toml`
//!
//! Only instance locations live here. Access tokens are passed on the
//! command line or through the environment and are never written to disk.
//!
//! # Example
//!
//! ```ignore
//! use forgekit_core::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("gitlab.url", "https://gitlab.example.com")?;
//! config.save()?;
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{Error, ProviderType, Result};

/// Config file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Config directory name.
const CONFIG_DIR_NAME: &str = "forgekit";

// =============================================================================
// Configuration structures
// =============================================================================

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<GitHubConfig>,

    /// GitLab configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitlab: Option<GitLabConfig>,
}

/// GitHub provider configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// GitHub API base URL (for GitHub Enterprise)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// GitLab provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitLabConfig {
    /// GitLab instance URL
    #[serde(default = "default_gitlab_url")]
    pub url: String,
}

impl Default for GitLabConfig {
    fn default() -> Self {
        Self {
            url: default_gitlab_url(),
        }
    }
}

fn default_gitlab_url() -> String {
    "https://gitlab.com".to_string()
}

// =============================================================================
// Config implementation
// =============================================================================

impl Config {
    /// Get the configuration directory path.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(CONFIG_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default location.
    ///
    /// Returns a default (empty) config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// Returns a default (empty) config if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = ?path, "Config file does not exist, using defaults");
            return Ok(Self::default());
        }

        debug!(path = ?path, "Loading config");

        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;

        info!(path = ?path, "Config loaded successfully");
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        debug!(path = ?path, "Saving config");

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        info!(path = ?path, "Config saved successfully");
        Ok(())
    }

    /// Check if any provider is configured.
    pub fn has_any_provider(&self) -> bool {
        self.github.is_some() || self.gitlab.is_some()
    }

    /// Get a list of configured provider names.
    pub fn configured_providers(&self) -> Vec<&'static str> {
        let mut providers = Vec::new();
        if self.github.is_some() {
            providers.push(ProviderType::Github.as_str());
        }
        if self.gitlab.is_some() {
            providers.push(ProviderType::Gitlab.as_str());
        }
        providers
    }

    /// Instance URL configured for a provider, if any.
    pub fn host_for(&self, provider: ProviderType) -> Option<String> {
        match provider {
            ProviderType::Gitlab => self.gitlab.as_ref().map(|c| c.url.clone()),
            ProviderType::Github => self.github.as_ref().and_then(|c| c.base_url.clone()),
        }
    }

    /// Set a configuration value by key path.
    ///
    /// Key format: `provider.field` (e.g., `gitlab.url`, `github.base_url`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let (provider, field) = split_key(key)?;

        match provider {
            ProviderType::Github => {
                let config = self.github.get_or_insert_with(GitHubConfig::default);
                match field {
                    "base_url" | "url" => config.base_url = Some(value.to_string()),
                    _ => {
                        return Err(Error::Config(format!(
                            "Unknown GitHub config field: {}",
                            field
                        )))
                    }
                }
            }
            ProviderType::Gitlab => {
                let config = self.gitlab.get_or_insert_with(GitLabConfig::default);
                match field {
                    "url" => config.url = value.to_string(),
                    _ => {
                        return Err(Error::Config(format!(
                            "Unknown GitLab config field: {}",
                            field
                        )))
                    }
                }
            }
        }

        Ok(())
    }

    /// Get a configuration value by key path.
    ///
    /// Key format: `provider.field` (e.g., `gitlab.url`, `github.base_url`)
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let (provider, field) = split_key(key)?;

        match provider {
            ProviderType::Github => {
                let Some(config) = &self.github else {
                    return Ok(None);
                };
                match field {
                    "base_url" | "url" => Ok(config.base_url.clone()),
                    _ => Err(Error::Config(format!(
                        "Unknown GitHub config field: {}",
                        field
                    ))),
                }
            }
            ProviderType::Gitlab => {
                let Some(config) = &self.gitlab else {
                    return Ok(None);
                };
                match field {
                    "url" => Ok(Some(config.url.clone())),
                    _ => Err(Error::Config(format!(
                        "Unknown GitLab config field: {}",
                        field
                    ))),
                }
            }
        }
    }
}

fn split_key(key: &str) -> Result<(ProviderType, &str)> {
    let parts: Vec<&str> = key.split('.').collect();
    if parts.len() != 2 {
        return Err(Error::Config(format!(
            "Invalid config key '{}'. Expected format: provider.field",
            key
        )));
    }

    let provider = parts[0]
        .parse::<ProviderType>()
        .map_err(|_| Error::Config(format!("Unknown provider: {}", parts[0])))?;

    Ok((provider, parts[1]))
}

// =============================================================================
// Tests
// =============================================================================
