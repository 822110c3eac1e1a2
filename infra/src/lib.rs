//! # Infrastructure Layer
//!
//! Concrete collaborators for the smscode verification stores:
//! - **Cache**: file-backed TTL cache with expired-entry sweeping, in-memory
//!   cache, and a Redis client
//! - **Session**: in-memory request session
//! - **SMS**: provider trait, mock provider and a registry routing provider
//!   names to implementations

use sc_core::errors::DomainError;

/// Cache module - file, memory and Redis stores
pub mod cache;

/// Session module - request-scoped session stores
pub mod session;

/// SMS module - provider implementations and routing
pub mod sms;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// File cache I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache entry encoding error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Sms(message) => DomainError::Transport { message },
            InfrastructureError::Config(message) => DomainError::Config { message },
            other => DomainError::Storage {
                message: other.to_string(),
            },
        }
    }
}
