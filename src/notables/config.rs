use crate::error::{NotablesError, Result};
use crate::model::Language;
use crate::summary::{DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const HOME_VAR: &str = "NOTABLES_HOME";

/// Configuration for notables, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotablesConfig {
    /// Display language when none is given on the command line
    #[serde(default)]
    pub default_language: Language,

    /// Collection JSON to load instead of the built-in one
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    #[serde(default = "default_summary_model")]
    pub summary_model: String,

    #[serde(default = "default_summary_timeout")]
    pub summary_timeout_secs: u64,
}

fn default_summary_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_summary_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for NotablesConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            data_file: None,
            summary_model: default_summary_model(),
            summary_timeout_secs: default_summary_timeout(),
        }
    }
}

impl NotablesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotablesError::Io)?;
        let config: NotablesConfig =
            serde_json::from_str(&content).map_err(NotablesError::Serialization)?;
        Ok(config)
    }
}

/// `NOTABLES_HOME` when set, otherwise the platform data directory.
pub fn home_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "notables", "notables")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| NotablesError::Store("could not determine data directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = NotablesConfig::default();
        assert_eq!(config.default_language, Language::Fr);
        assert_eq!(config.summary_model, "gemini-2.5-flash");
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = NotablesConfig::load(dir.path()).unwrap();
        assert_eq!(config, NotablesConfig::default());
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{
                "default_language": "ar",
                "data_file": "/tmp/people.json",
                "summary_model": "gemini-2.5-pro",
                "summary_timeout_secs": 5
            }"#,
        )
        .unwrap();

        let loaded = NotablesConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_language, Language::Ar);
        assert_eq!(loaded.data_file, Some(PathBuf::from("/tmp/people.json")));
        assert_eq!(loaded.summary_model, "gemini-2.5-pro");
        assert_eq!(loaded.summary_timeout_secs, 5);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"default_language":"en"}"#).unwrap();

        let loaded = NotablesConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_language, Language::En);
        assert_eq!(loaded.summary_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            NotablesConfig::load(dir.path()),
            Err(NotablesError::Serialization(_))
        ));
    }
}
