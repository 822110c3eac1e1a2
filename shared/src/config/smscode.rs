//! Verification code configuration module
//!
//! Recognized options:
//! - `length` - number of digits in a generated code (default 6)
//! - `expire` - code lifetime in seconds (default 900)
//! - `platforms` - SMS providers, either an ordered list of names or a map of
//!   provider name to template settings
//! - `cache_path` - directory of the file-backed verification cache
//! - `log` - [`LoggingConfig`] for hosts installing a subscriber

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{ConfigError, LoggingConfig};

/// Upper bound for `length`, the size of the shuffled digit pool
pub const MAX_CODE_LENGTH: usize = 30;

/// Environment variable prefix for overrides, e.g. `SMSCODE__EXPIRE=600`
pub const ENV_PREFIX: &str = "SMSCODE";

/// Verification code configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmscodeConfig {
    /// Number of digits in a generated code
    #[serde(default = "default_length")]
    pub length: usize,

    /// Lifetime of an issued code in seconds
    #[serde(default = "default_expire")]
    pub expire: u64,

    /// SMS providers tried in random order until one succeeds
    #[serde(default)]
    pub platforms: PlatformsConfig,

    /// Directory backing the file cache
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,

    /// Logging settings
    #[serde(default)]
    pub log: LoggingConfig,
}

impl Default for SmscodeConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            expire: default_expire(),
            platforms: PlatformsConfig::default(),
            cache_path: default_cache_path(),
            log: LoggingConfig::default(),
        }
    }
}

impl SmscodeConfig {
    /// Load configuration from an optional file and `SMSCODE__*` environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        let loaded: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length == 0 || self.length > MAX_CODE_LENGTH {
            return Err(ConfigError::OutOfRange {
                field: "length".to_string(),
                min: 1,
                max: MAX_CODE_LENGTH as u64,
                actual: self.length as u64,
            });
        }
        if self.expire == 0 {
            return Err(ConfigError::OutOfRange {
                field: "expire".to_string(),
                min: 1,
                max: u64::MAX,
                actual: 0,
            });
        }
        Ok(())
    }

    pub fn with_platforms(mut self, platforms: PlatformsConfig) -> Self {
        self.platforms = platforms;
        self
    }

    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = path.into();
        self
    }
}

/// Raw provider configuration as written by operators
///
/// Either a list of provider names using their default templates, or a map of
/// provider name to a [`PlatformSetting`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PlatformsConfig {
    Names(Vec<String>),
    Keyed(BTreeMap<String, Option<PlatformSetting>>),
}

impl Default for PlatformsConfig {
    fn default() -> Self {
        PlatformsConfig::Keyed(BTreeMap::new())
    }
}

impl PlatformsConfig {
    pub fn is_empty(&self) -> bool {
        match self {
            PlatformsConfig::Names(names) => names.is_empty(),
            PlatformsConfig::Keyed(map) => map.is_empty(),
        }
    }

    /// Build a keyed configuration from `(name, template_id)` pairs
    pub fn from_templates<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        PlatformsConfig::Keyed(
            entries
                .into_iter()
                .map(|(name, template)| {
                    (name.into(), Some(PlatformSetting::TemplateId(template.into())))
                })
                .collect(),
        )
    }
}

/// Per-provider settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PlatformSetting {
    /// Bare template id
    TemplateId(String),
    /// Template id and the template variable that receives the code
    Detailed {
        #[serde(default)]
        template_id: Option<String>,
        #[serde(default)]
        code_var: Option<String>,
    },
}

fn default_length() -> usize {
    6
}

fn default_expire() -> u64 {
    900 // 15 minutes
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("runtime/cache/smscode")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smscode_config_default() {
        let config = SmscodeConfig::default();
        assert_eq!(config.length, 6);
        assert_eq!(config.expire, 900);
        assert!(config.platforms.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_length() {
        let mut config = SmscodeConfig::default();
        config.length = 0;
        assert!(config.validate().is_err());

        config.length = 31;
        match config.validate() {
            Err(ConfigError::OutOfRange { field, .. }) => assert_eq!(field, "length"),
            other => panic!("Expected out of range error, got {:?}", other),
        }

        config.length = 30;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_expire() {
        let mut config = SmscodeConfig::default();
        config.expire = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_platforms_keyed_shapes() {
        let json = r#"{
            "length": 4,
            "platforms": {
                "aliyun": "TPL_001",
                "qcloud": { "template_id": "1001", "code_var": "captcha" },
                "yunpian": null
            }
        }"#;
        let config: SmscodeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.length, 4);
        assert_eq!(config.expire, 900);

        let PlatformsConfig::Keyed(map) = config.platforms else {
            panic!("Expected keyed platforms");
        };
        assert_eq!(
            map.get("aliyun"),
            Some(&Some(PlatformSetting::TemplateId("TPL_001".to_string())))
        );
        assert_eq!(
            map.get("qcloud"),
            Some(&Some(PlatformSetting::Detailed {
                template_id: Some("1001".to_string()),
                code_var: Some("captcha".to_string()),
            }))
        );
        assert_eq!(map.get("yunpian"), Some(&None));
    }

    #[test]
    fn test_platforms_name_list() {
        let json = r#"{ "platforms": ["aliyun", "qiniu"] }"#;
        let config: SmscodeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.platforms,
            PlatformsConfig::Names(vec!["aliyun".to_string(), "qiniu".to_string()])
        );
    }

    #[test]
    fn test_from_templates() {
        let platforms = PlatformsConfig::from_templates([("aliyun", "TPL_001")]);
        assert!(!platforms.is_empty());
    }

    #[test]
    fn test_log_section() {
        let json = r#"{ "log": { "level": "debug", "format": "compact" } }"#;
        let config: SmscodeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, crate::config::LogFormat::Compact);
        assert_eq!(config.expire, 900);

        let defaulted: SmscodeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(defaulted.log, LoggingConfig::default());
    }
}
