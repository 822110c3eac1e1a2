//! Configuration for the verification stores

use sc_shared::SmscodeConfig;

use crate::domain::entities::{DEFAULT_CODE_LENGTH, DEFAULT_EXPIRE_SECONDS};
use crate::domain::ProviderConfig;
use crate::errors::DomainResult;

use super::provider_selector::ProviderSelector;

/// Validated settings shared by both store variants
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of digits in a generated code
    pub code_length: usize,
    /// Lifetime of an issued code in seconds
    pub expire_seconds: u64,
    /// Providers in configuration order, before shuffling
    pub providers: Vec<ProviderConfig>,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            expire_seconds: DEFAULT_EXPIRE_SECONDS,
            providers: Vec::new(),
        }
    }
}

impl VerificationServiceConfig {
    /// Validate raw configuration and normalize its providers
    pub fn from_settings(settings: &SmscodeConfig) -> DomainResult<Self> {
        settings.validate()?;

        Ok(Self {
            code_length: settings.length,
            expire_seconds: settings.expire,
            providers: ProviderSelector::from_config(&settings.platforms)
                .providers()
                .to_vec(),
        })
    }

    pub fn with_provider(mut self, provider: ProviderConfig) -> Self {
        self.providers.push(provider);
        self
    }
}

impl TryFrom<&SmscodeConfig> for VerificationServiceConfig {
    type Error = crate::errors::DomainError;

    fn try_from(settings: &SmscodeConfig) -> Result<Self, Self::Error> {
        Self::from_settings(settings)
    }
}
