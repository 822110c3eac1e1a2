//! SMS provider interface
//!
//! One implementation per vendor account. The [`ProviderRegistry`] routes
//! provider names from configuration to these implementations.
//!
//! [`ProviderRegistry`]: super::ProviderRegistry

use async_trait::async_trait;
use sc_core::services::TemplateVariables;

use crate::InfrastructureError;

/// Trait for a single SMS vendor
#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Send a templated message
    ///
    /// # Arguments
    ///
    /// * `mobile` - Recipient mobile number
    /// * `variables` - Template variables, including the verification code
    /// * `template_id` - Template to use; `None` selects the provider default
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier of the accepted message
    /// * `Err(InfrastructureError)` - If the provider refused or failed
    async fn send(
        &self,
        mobile: &str,
        variables: &TemplateVariables,
        template_id: Option<&str>,
    ) -> Result<String, InfrastructureError>;

    /// Name the provider is registered under
    fn provider_name(&self) -> &str;

    /// Check if the provider is available
    async fn is_available(&self) -> bool {
        true
    }
}
