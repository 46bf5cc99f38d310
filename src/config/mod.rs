// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for modseek.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. modseek.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. MODSEEK_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODSEEK_API__BASE_URL=http://...  → api.base_url
//! MODSEEK_SEARCH__LIMIT=50          → search.limit = 50
//! MODSEEK_DOWNLOAD__DIRECTORY=mods  → download.directory = "mods"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::query::MAX_LIMIT;

use loader::ConfigLoader;
use types::{ApiConfig, DownloadConfig, GlobalConfig, SearchConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// API endpoint.
    pub api: ApiConfig,
    /// Search defaults.
    pub search: SearchConfig,
    /// Download defaults.
    pub download: DownloadConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modseek::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("modseek.toml")
    ///     .with_env_prefix("MODSEEK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `search.limit` exceeds the
    /// API maximum.
    pub fn validate(&self) -> Result<()> {
        if self.search.limit > MAX_LIMIT {
            return Err(ConfigError::InvalidValue {
                section: "search".to_string(),
                key: "limit".to_string(),
                message: format!("must be at most {MAX_LIMIT}, got {}", self.search.limit),
            }
            .into());
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert(
            "global.log_level".to_string(),
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("api.base_url".to_string(), self.api.base_url.clone());
        options.insert(
            "api.user_agent".to_string(),
            self.api
                .user_agent
                .clone()
                .unwrap_or_else(|| crate::net::DEFAULT_USER_AGENT.to_string()),
        );
        if let Some(secs) = self.api.connect_timeout_secs {
            options.insert("api.connect_timeout_secs".to_string(), secs.to_string());
        }
        options.insert("search.limit".to_string(), self.search.limit.to_string());
        options.insert("search.index".to_string(), self.search.index.to_string());
        options.insert(
            "download.directory".to_string(),
            self.download.directory.display().to_string(),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
