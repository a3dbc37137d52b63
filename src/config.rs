// src/config.rs

use crate::core::scanner::vulnerability_scanner::SelectionStrategy;
use crate::core::scanner::GeneratorOptions;
use crate::logging::{get_config_dir, get_data_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILE: &str = "config.toml";
pub const HISTORY_FILE: &str = "history.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid config file {path}: {source}")]
    Toml { path: PathBuf, source: toml::de::Error },
}

/// Runtime settings. Every field is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Cosmetic delay before a report is shown, in milliseconds.
    pub latency_ms: u64,
    pub strategy: SelectionStrategy,
    /// Defaults to `history.json` in the data directory.
    pub history_file: Option<PathBuf>,
    /// The signed-in user, as handed over by the identity provider. Scans are
    /// only persisted when this is set.
    pub user_id: Option<String>,
    pub show_disclaimer: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            latency_ms: 3500,
            strategy: SelectionStrategy::Legacy,
            history_file: None,
            user_id: None,
            show_disclaimer: true,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from the default config location when
    /// `path` is `None`. A missing default file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (get_config_dir().join(CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults.");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
        let settings = Self::from_toml(&contents).map_err(|source| ConfigError::Toml { path: path.clone(), source })?;
        info!(path = %path.display(), "Loaded config file.");
        Ok(settings)
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn history_path(&self) -> PathBuf {
        self.history_file
            .clone()
            .unwrap_or_else(|| get_data_dir().join(HISTORY_FILE))
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions { strategy: self.strategy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let settings = Settings::from_toml(
            r#"
latency_ms = 0
strategy = "shuffled"
user_id = "user-42"
"#,
        )
        .unwrap();
        assert_eq!(settings.latency_ms, 0);
        assert_eq!(settings.strategy, SelectionStrategy::Shuffled);
        assert_eq!(settings.user_id.as_deref(), Some("user-42"));
        assert!(settings.show_disclaimer);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(Settings::from_toml(r#"strategy = "random""#).is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "show_disclaimer = false\nhistory_file = \"/tmp/h.json\"\n").unwrap();
        let settings = Settings::load(Some(&path)).unwrap();
        assert!(!settings.show_disclaimer);
        assert_eq!(settings.history_path(), PathBuf::from("/tmp/h.json"));
    }
}
