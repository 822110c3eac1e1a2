//! Shared configuration and utilities for the smscode workspace
//!
//! - Configuration types (verification options, logging)
//! - Phone number helpers used for validation and log masking

pub mod config;
pub mod utils;

pub use config::{
    CacheConfig, ConfigError, LogFormat, LoggingConfig,
    PlatformSetting, PlatformsConfig, SmscodeConfig,
};
pub use utils::phone;
