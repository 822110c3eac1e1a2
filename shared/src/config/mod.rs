//! Configuration module
//!
//! - `smscode` - code length, lifetime, providers and cache location
//! - `cache` - Redis connection settings
//! - `logging` - log level and format

pub mod cache;
pub mod logging;
pub mod smscode;

use thiserror::Error;

pub use cache::CacheConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use smscode::{PlatformSetting, PlatformsConfig, SmscodeConfig, MAX_CODE_LENGTH};

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Out of range: {field} (min: {min}, max: {max}, actual: {actual})")]
    OutOfRange {
        field: String,
        min: u64,
        max: u64,
        actual: u64,
    },
}
