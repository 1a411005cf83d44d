//! Core configuration.
//!
//! Loaded from an optional TOML file; every field has a default, so an empty
//! file is a valid configuration.
//!
//! ```toml
//! log_level = "debug"
//! log_dir = "/var/tmp/notegenius"
//!
//! [summary_delay]
//! min_ms = 2000
//! max_ms = 4000
//! ```

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_DELAY_MIN_MS: u64 = 2_000;
const DEFAULT_DELAY_MAX_MS: u64 = 4_000;

/// Top-level core settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// One of `trace|debug|info|warn|error`.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Absolute directory for rolling log files. Logging stays off when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Simulated "analyzing" delay before a summary is produced.
    #[serde(default)]
    pub summary_delay: DelayConfig,
}

/// Bounds of the randomized summary delay, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayConfig {
    #[serde(default = "default_delay_min_ms")]
    pub min_ms: u64,
    #[serde(default = "default_delay_max_ms")]
    pub max_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            min_ms: DEFAULT_DELAY_MIN_MS,
            max_ms: DEFAULT_DELAY_MAX_MS,
        }
    }
}

impl DelayConfig {
    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            summary_delay: DelayConfig::default(),
        }
    }
}

/// Configuration load/validation failure.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    InvalidDelay { min_ms: u64, max_ms: u64 },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::InvalidDelay { min_ms, max_ms } => write!(
                f,
                "summary_delay.min_ms ({min_ms}) must be <= summary_delay.max_ms ({max_ms})"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidDelay { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

impl CoreConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.summary_delay.min_ms > self.summary_delay.max_ms {
            return Err(ConfigError::InvalidDelay {
                min_ms: self.summary_delay.min_ms,
                max_ms: self.summary_delay.max_ms,
            });
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    crate::logging::default_log_level().to_string()
}

fn default_delay_min_ms() -> u64 {
    DEFAULT_DELAY_MIN_MS
}

fn default_delay_max_ms() -> u64 {
    DEFAULT_DELAY_MAX_MS
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig};
    use std::path::PathBuf;

    #[test]
    fn empty_document_uses_defaults() {
        let config = CoreConfig::from_toml_str("").unwrap();
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.summary_delay.min_ms, 2_000);
        assert_eq!(config.summary_delay.max_ms, 4_000);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn partial_delay_table_keeps_other_default() {
        let config = CoreConfig::from_toml_str(
            "log_level = \"warn\"\nlog_dir = \"/tmp/ng\"\n[summary_delay]\nmax_ms = 9000\n",
        )
        .unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/ng")));
        assert_eq!(config.summary_delay.min_ms, 2_000);
        assert_eq!(config.summary_delay.max_ms, 9_000);
    }

    #[test]
    fn reversed_delay_bounds_are_rejected() {
        let err = CoreConfig::from_toml_str("[summary_delay]\nmin_ms = 5\nmax_ms = 1\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDelay {
                min_ms: 5,
                max_ms: 1
            }
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = CoreConfig::from_toml_str("log_level = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
