//! Types for verification results

use crate::errors::VerificationError;

/// Outcome of one issuance attempt
///
/// `code` carries the issued code for logging and tests. It must never be
/// shown to the end user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    /// Whether a provider accepted the message and the state was saved
    pub success: bool,
    /// Human-readable failure reason, empty on success
    pub error_message: String,
    /// The issued code, empty on failure
    pub code: String,
    /// Typed failure reason
    pub error: Option<VerificationError>,
}

impl SendResult {
    pub fn sent(code: impl Into<String>) -> Self {
        Self {
            success: true,
            error_message: String::new(),
            code: code.into(),
            error: None,
        }
    }

    pub fn failed(error: VerificationError) -> Self {
        Self {
            success: false,
            error_message: error.to_string(),
            code: String::new(),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn error(&self) -> Option<&VerificationError> {
        self.error.as_ref()
    }

    /// View as a `Result` for `?`-style callers
    pub fn into_result(self) -> Result<String, VerificationError> {
        match self.error {
            None => Ok(self.code),
            Some(error) => Err(error),
        }
    }
}
