// Rust guideline compliant 2026-10-18

//! Configuration management for the playground.

use crate::models::Record;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the playground state and logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// File that log lines are appended to instead of stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Values the record starts with and returns to on reset.
    #[serde(default)]
    pub seed: Record,
}

/// Default log level.
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
            seed: Record::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/config.toml`
    /// 3. Environment variables with `WIF_PLAYGROUND_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory holding `config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `WIF_PLAYGROUND_LOG_LEVEL` - Maximum log level
    /// - `WIF_PLAYGROUND_LOG_FILE` - Log file path; empty disables file logging
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("WIF_PLAYGROUND_LOG_LEVEL") {
            self.log_level = val;
        }

        if let Ok(val) = std::env::var("WIF_PLAYGROUND_LOG_FILE") {
            self.log_file = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `log_level` is not a known level name.
    fn validate(&self) -> Result<()> {
        crate::telemetry::parse_log_level(&self.log_level)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("WIF_PLAYGROUND_LOG_LEVEL");
        std::env::remove_var("WIF_PLAYGROUND_LOG_FILE");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert!(config.log_file.is_none());
        assert_eq!(config.seed, Record::default());
    }

    #[test]
    fn test_config_load_missing_file() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
log_level = "debug"
log_file = "/tmp/playground.log"

[seed]
mapping = "google.subject=assertion.sub"
input = "{}"
"#;
        std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/playground.log")));
        assert_eq!(config.seed.mapping, "google.subject=assertion.sub");
        assert_eq!(config.seed.input, "{}");
        assert_eq!(config.seed.output, "");
    }

    #[test]
    fn test_config_invalid_toml() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "log_level = [").unwrap();

        let err = Config::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidConfig(_)));
    }

    #[test]
    fn test_config_validation_invalid_level() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "log_level = \"loud\"").unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_env_override_level() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "log_level = \"warn\"").unwrap();

        std::env::set_var("WIF_PLAYGROUND_LOG_LEVEL", "trace");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.log_level, "trace");

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_level() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("WIF_PLAYGROUND_LOG_LEVEL", "invalid");
        assert!(Config::load(temp_dir.path()).is_err());

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_empty_log_file_disables_file() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "log_file = \"/tmp/playground.log\"",
        )
        .unwrap();

        std::env::set_var("WIF_PLAYGROUND_LOG_FILE", "");
        let config = Config::load(temp_dir.path()).unwrap();
        assert!(config.log_file.is_none());

        clear_all_env_vars();
    }
}
