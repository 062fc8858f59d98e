// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file, and turns it into
//! the settings used by the catalog client and the search debouncer.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::{
    api::{DEFAULT_BASE_URL, TmdbSettings},
    debounce::DEFAULT_QUIET_INTERVAL,
};

pub(crate) const CONFIG_NAME: &str = "movieui";

pub(crate) const API_KEY_ENV: &str = "TMDB_API_KEY";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) image_base_url: String,
    pub(crate) debounce_ms: u64,
    pub(crate) request_timeout_secs: u64,
    pub(crate) log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
            debounce_ms: DEFAULT_QUIET_INTERVAL.as_millis() as u64,
            request_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Resolves the API bearer token, preferring the environment over the
    /// configuration file.
    pub(crate) fn api_key(&self, from_env: Option<String>) -> Result<String> {
        let key = from_env
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| self.api_key.clone());

        let key = key.trim();
        if key.is_empty() {
            bail!("No TMDB API key configured, set {API_KEY_ENV} or `api_key` in the configuration file");
        }

        Ok(key.to_string())
    }

    pub(crate) fn tmdb_settings(&self, from_env: Option<String>) -> Result<TmdbSettings> {
        let timeout = match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Ok(TmdbSettings::new(self.api_key(from_env)?)
            .with_base_url(self.base_url.clone())
            .with_timeout(timeout))
    }

    pub(crate) fn debounce_interval(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

pub(crate) fn config_path() -> Result<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .context("Failed to locate configuration file")
}

/// Loads the configuration at `path`, writing defaults if it does not exist.
pub(crate) fn load_config_from(path: &Path) -> Result<AppConfig> {
    confy::load_path(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movieui.toml");

        let config = load_config_from(&path).unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn partial_file_takes_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movieui.toml");
        std::fs::write(&path, "api_key = \"abc\"\ndebounce_ms = 250\n").unwrap();

        let config = load_config_from(&path).unwrap();

        assert_eq!(config.api_key, "abc");
        assert_eq!(config.debounce_interval(), Duration::from_millis(250));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn environment_key_overrides_file() {
        let config = AppConfig {
            api_key: "from-file".to_string(),
            ..AppConfig::default()
        };

        assert_eq!(config.api_key(Some("from-env".to_string())).unwrap(), "from-env");
        assert_eq!(config.api_key(Some("  ".to_string())).unwrap(), "from-file");
        assert_eq!(config.api_key(None).unwrap(), "from-file");
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = AppConfig::default().api_key(None).unwrap_err();

        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn zero_timeout_disables_it() {
        let config = AppConfig {
            request_timeout_secs: 0,
            base_url: "http://localhost:9999".to_string(),
            ..AppConfig::default()
        };

        let settings = config.tmdb_settings(Some("k".to_string())).unwrap();

        assert_eq!(settings.timeout, None);
        assert_eq!(settings.base_url, "http://localhost:9999");
        assert_eq!(settings.api_key, "k");
        assert_eq!(
            AppConfig::default().tmdb_settings(Some("k".to_string())).unwrap().timeout,
            Some(Duration::from_secs(30))
        );
    }
}
