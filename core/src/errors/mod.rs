//! Domain error types
//!
//! `VerificationError` is the outcome taxonomy of issuance and validation; it is
//! carried as a value in results. `DomainError` covers collaborator failures
//! (store, transport, configuration).

use thiserror::Error;

/// Why an issuance or validation attempt did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("sending too frequent")]
    CooldownActive,

    #[error("sms sending failed")]
    AllProvidersFailed,

    /// No record for the mobile, or the code does not match
    #[error("verification failed")]
    ValidationMismatch,

    #[error("verification code expired")]
    ValidationExpired,

    #[error("verification state could not be saved")]
    Storage,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("SMS transport error: {message}")]
    Transport { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Verification(#[from] VerificationError),
}

impl From<sc_shared::ConfigError> for DomainError {
    fn from(err: sc_shared::ConfigError) -> Self {
        DomainError::Config {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;

pub type DomainResult<T> = Result<T, DomainError>;
