use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::harness::UnitLabel;

/// Default location of the optional config file, relative to the working
/// directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/imult.yaml";

/// Logging and report settings. Benchmark operands and the iteration count
/// are constants in the binary and deliberately absent here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    /// File logging is off unless a directory is set
    pub log_dir: Option<String>,
    pub log_file: String,
    pub use_json: bool,
    /// "hourly", "daily", anything else never rotates
    pub rotation: String,
    pub unit_label: UnitLabel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
            log_file: "imult.log".to_string(),
            use_json: false,
            rotation: "never".to_string(),
            unit_label: UnitLabel::default(),
        }
    }
}

impl AppConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load `path`, or fall back to defaults if the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load_or_default("does/not/exist/imult.yaml").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.unit_label, UnitLabel::Micros);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml_str("log_level: debug\nunit_label: legacy_ms\n").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.unit_label, UnitLabel::LegacyMs);
        assert_eq!(config.log_file, "imult.log");
        assert!(!config.use_json);
    }

    #[test]
    fn test_file_logging_settings() {
        let yaml = "log_dir: ./logs\nlog_file: bench.log\nrotation: daily\nuse_json: true\n";
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.log_dir.as_deref(), Some("./logs"));
        assert_eq!(config.log_file, "bench.log");
        assert_eq!(config.rotation, "daily");
        assert!(config.use_json);
    }

    #[test]
    fn test_bad_unit_label_is_parse_error() {
        let err = AppConfig::from_yaml_str("unit_label: seconds\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
