//! Provider registry
//!
//! Implements the core [`SmsTransport`] by looking up the provider named in
//! configuration and delegating to it. The verification store decides the
//! order; the registry only dispatches.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

use sc_core::errors::{DomainError, DomainResult};
use sc_core::services::{SmsTransport, TemplateVariables};
use sc_shared::phone::mask_phone_number;

use super::sms_provider::SmsProvider;

/// SMS transport routing by provider name
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn SmsProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its own name, replacing any previous one
    pub fn register(&mut self, provider: Arc<dyn SmsProvider>) {
        self.providers
            .insert(provider.provider_name().to_string(), provider);
    }

    pub fn with_provider(mut self, provider: Arc<dyn SmsProvider>) -> Self {
        self.register(provider);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn SmsProvider>> {
        self.providers.get(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }
}

#[async_trait]
impl SmsTransport for ProviderRegistry {
    async fn send(
        &self,
        provider: &str,
        mobile: &str,
        variables: &TemplateVariables,
        template_id: Option<&str>,
    ) -> DomainResult<()> {
        let Some(sms) = self.providers.get(provider) else {
            error!(provider = provider, "SMS provider is configured but not registered");
            return Err(DomainError::Transport {
                message: format!("Unknown SMS provider: {}", provider),
            });
        };

        let message_id = sms
            .send(mobile, variables, template_id)
            .await
            .map_err(DomainError::from)?;

        debug!(
            provider = provider,
            phone = %mask_phone_number(mobile),
            message_id = %message_id,
            "Provider accepted message"
        );
        Ok(())
    }
}
