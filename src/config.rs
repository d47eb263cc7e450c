use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_LOG_FILE, NUMBERS_PATH};

/// Runtime configuration, loaded once at startup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::from(DEFAULT_BASE_URL),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Load defaults, then `~/.euromillions/config.yaml`, then the environment
    pub fn load() -> Result<Self> {
        let mut config = match config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Config::default(),
        };
        config.apply_env(std::env::var(BASE_URL_ENV).ok());
        Ok(config)
    }

    /// Read a YAML config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Override the base URL with a non-empty environment value
    pub fn apply_env(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url {
            let url = url.trim();
            if !url.is_empty() {
                self.base_url = url.to_string();
            }
        }
    }

    /// Full URL of the number endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), NUMBERS_PATH)
    }
}

/// Location of the user config file
fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".euromillions").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::from_file(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "base_url: http://localhost:8000\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "base_url: [unterminated\n").unwrap();
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_env_overrides_base_url() {
        let mut config = Config::default();
        config.apply_env(Some("  http://127.0.0.1:9000 ".into()));
        assert_eq!(config.base_url, "http://127.0.0.1:9000");

        config.apply_env(Some(String::new()));
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_endpoint_joins_path() {
        let mut config = Config::default();
        assert_eq!(
            config.endpoint(),
            "https://lottery-fastapi-backend.onrender.com/api/lottery-numbers"
        );
        config.base_url = "http://localhost:8000/".into();
        assert_eq!(config.endpoint(), "http://localhost:8000/api/lottery-numbers");
    }
}
