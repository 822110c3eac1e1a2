//! Logging configuration module
//!
//! Loaded as the `log` section of the smscode configuration, so
//! `SMSCODE__LOG__LEVEL=debug` or `SMSCODE__LOG__FORMAT=json` work as overrides.

use serde::{Deserialize, Serialize};
use std::env;

/// Logging configuration
///
/// The filter string is handed to `tracing_subscriber::EnvFilter` by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty, compact)
    #[serde(default = "default_log_format")]
    pub format: LogFormat,

    /// Include source location in logs
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Filter directive, preferring `RUST_LOG` when set
    pub fn filter_directive(&self) -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| self.level.clone())
    }
}

/// Log format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default() {
        let log = LoggingConfig::default();
        assert_eq!(log.level, "info");
        assert_eq!(log.format, LogFormat::Pretty);
        assert!(!log.source_location);
    }

    #[test]
    fn test_logging_config_partial_section() {
        let log: LoggingConfig = serde_json::from_str(r#"{"format": "json"}"#).unwrap();
        assert_eq!(log.format, LogFormat::Json);
        assert_eq!(log.level, "info");
    }
}
