//! Configuration loading.
//!
//! Settings are resolved in three layers, each overriding the previous
//! one: built-in defaults, an optional JSON file, and environment
//! variables. The file is looked up at an explicit path when the caller
//! provides one, otherwise in the XDG config directory
//! (`$XDG_CONFIG_HOME/trellis/config.json`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrellisError};

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "TRELLIS_API_URL";

/// Environment variable overriding the API token.
pub const TOKEN_ENV: &str = "TRELLIS_TOKEN";

const CONFIG_FILE: &str = "config.json";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend connection settings.
    pub api: ApiConfig,
}

/// Connection settings for the HR backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub base_url: String,
    /// Bearer token presented on every request.
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api/v1".to_string(),
            token: None,
        }
    }
}

impl ApiConfig {
    /// Returns the configured token, or a configuration error telling the
    /// user how to supply one.
    pub fn bearer_token(&self) -> Result<&str> {
        self.token.as_deref().ok_or_else(|| TrellisError::Configuration {
            message: format!(
                "No API token configured. Set {TOKEN_ENV} or add \"token\" to the config file"
            ),
        })
    }
}

impl Config {
    /// Loads configuration from `path` when given, otherwise from the XDG
    /// config directory, otherwise defaults. Environment variables are
    /// applied on top in every case.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(explicit) => Self::from_file(explicit)?,
            None => match Self::default_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };
        config.apply_env();
        Ok(config)
    }

    /// Parses a configuration file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| TrellisError::FileSystem {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("trellis").find_config_file(CONFIG_FILE)
    }

    fn apply_env(&mut self) {
        self.apply_overrides(env_var(API_URL_ENV), env_var(TOKEN_ENV));
    }

    fn apply_overrides(&mut self, base_url: Option<String>, token: Option<String>) {
        if let Some(url) = base_url {
            self.api.base_url = url;
        }
        if let Some(token) = token {
            self.api.token = Some(token);
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_config_points_at_localhost() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8080/api/v1");
        assert!(config.api.token.is_none());
    }

    #[test]
    fn bearer_token_error_names_the_env_var() {
        let config = ApiConfig::default();
        let err = config.bearer_token().unwrap_err();
        assert!(err.to_string().contains("TRELLIS_TOKEN"));
    }

    #[test]
    fn bearer_token_returns_configured_value() {
        let config = ApiConfig {
            token: Some("secret".to_string()),
            ..Default::default()
        };
        assert_eq!(config.bearer_token().unwrap(), "secret");
    }

    #[test]
    fn from_file_reads_full_config() {
        let file = write_config(
            r#"{"api": {"base_url": "https://hr.example.com/api/v1", "token": "abc"}}"#,
        );
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://hr.example.com/api/v1");
        assert_eq!(config.api.token.as_deref(), Some("abc"));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let file = write_config(r#"{"api": {"token": "abc"}}"#);
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.api.token.as_deref(), Some("abc"));
    }

    #[test]
    fn empty_object_is_a_valid_config() {
        let file = write_config("{}");
        let config = Config::from_file(file.path()).unwrap();
        assert!(config.api.token.is_none());
    }

    #[test]
    fn invalid_json_is_a_serialization_error() {
        let file = write_config("{not json");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, TrellisError::Serialization { .. }));
    }

    #[test]
    fn missing_file_is_a_file_system_error() {
        let err = Config::from_file(Path::new("/nonexistent/trellis.json")).unwrap_err();
        assert!(matches!(err, TrellisError::FileSystem { .. }));
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = Config::default();
        config.apply_overrides(Some("https://override.example".to_string()), None);
        assert_eq!(config.api.base_url, "https://override.example");
        assert!(config.api.token.is_none());

        config.apply_overrides(None, Some("tok".to_string()));
        assert_eq!(config.api.base_url, "https://override.example");
        assert_eq!(config.api.token.as_deref(), Some("tok"));
    }
}
