//! Engine configuration.
//!
//! Thresholds of both automata, loadable from JSON. Every field has a
//! default, so `{}` is a complete configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::email::{EmailAutomaton, DEFAULT_MIN_TLD_LENGTH};
use crate::password::{PasswordAutomaton, DEFAULT_MIN_LENGTH};

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {field} must be at least 1 (got {value})")]
    BelowMinimum { field: &'static str, value: usize },
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub password: PasswordConfig,
}

/// Email automaton settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Shortest accepted TLD.
    #[serde(default = "default_min_tld_length")]
    pub min_tld_length: usize,
}

fn default_min_tld_length() -> usize {
    DEFAULT_MIN_TLD_LENGTH
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            min_tld_length: default_min_tld_length(),
        }
    }
}

/// Password automaton settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// Shortest accepted password.
    #[serde(default = "default_min_length")]
    pub min_length: usize,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), "Loaded engine config");
        Ok(config)
    }

    /// Reject thresholds that would make a length check meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.email.min_tld_length == 0 {
            return Err(ConfigError::BelowMinimum {
                field: "email.min_tld_length",
                value: self.email.min_tld_length,
            });
        }
        if self.password.min_length == 0 {
            return Err(ConfigError::BelowMinimum {
                field: "password.min_length",
                value: self.password.min_length,
            });
        }
        Ok(())
    }

    pub fn email_automaton(&self) -> EmailAutomaton {
        EmailAutomaton::with_min_tld_length(self.email.min_tld_length)
    }

    pub fn password_automaton(&self) -> PasswordAutomaton {
        PasswordAutomaton::with_min_length(self.password.min_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Automaton;

    #[test]
    fn empty_object_uses_defaults() {
        let config = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.email.min_tld_length, 2);
        assert_eq!(config.password.min_length, 8);
    }

    #[test]
    fn default_automata_match_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.email_automaton(), EmailAutomaton::default());
        assert_eq!(config.password_automaton(), PasswordAutomaton::default());
    }

    #[test]
    fn partial_config_overrides_one_field() {
        let config = EngineConfig::from_json_str(r#"{"password": {"min_length": 12}}"#).unwrap();
        assert_eq!(config.password.min_length, 12);
        assert_eq!(config.email.min_tld_length, 2);

        let password = config.password_automaton();
        assert!(!password.accepts("Abcdefg1"));
        assert!(password.accepts("Abcdefghijk1"));
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let err = EngineConfig::from_json_str(r#"{"email": {"min_tld_length": 0}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::BelowMinimum {
                field: "email.min_tld_length",
                value: 0
            }
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = EngineConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "form-automata-config-{}.json",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&path, r#"{"email": {"min_tld_length": 3}}"#).unwrap();

        let config = EngineConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.email.min_tld_length, 3);
        assert!(!config.email_automaton().accepts("a@b.co"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = EngineConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
