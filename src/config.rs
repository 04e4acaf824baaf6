//! Run configuration
//!
//! Loaded from an optional JSON file. Command line flags override file values.

use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::scss::error::{IoContext, ScssError, ScssResult};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScssConfig {
    /// Extra directory searched before the importing file's directory
    pub include_path: Option<PathBuf>,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`
    pub log_level: Option<String>,
}

impl ScssConfig {
    pub fn load(path: &Path) -> ScssResult<Self> {
        let content = fs::read_to_string(path).with_io_context(path)?;
        serde_json::from_str(&content).map_err(|source| ScssError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Configured log level, `Info` when unset or unrecognized
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_fixture;
    use tempfile::TempDir;

    #[test]
    fn test_load_config() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            dir.path(),
            "scss_tree.json",
            r#"{ "includePath": "styles/shared", "logLevel": "debug" }"#,
        );

        let config = ScssConfig::load(&path).unwrap();
        assert_eq!(config.include_path, Some(PathBuf::from("styles/shared")));
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_missing_fields_default() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(dir.path(), "scss_tree.json", "{}");

        let config = ScssConfig::load(&path).unwrap();
        assert_eq!(config, ScssConfig::default());
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(dir.path(), "scss_tree.json", "{ includePath: ");

        let err = ScssConfig::load(&path).unwrap_err();
        assert_eq!(err.kind(), "ConfigError");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_missing_config_file() {
        let dir = TempDir::new().unwrap();
        let err = ScssConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.kind(), "IOError");
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = ScssConfig {
            log_level: Some("chatty".to_string()),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
