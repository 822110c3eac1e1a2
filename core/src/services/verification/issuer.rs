//! Code generation and provider failover shared by both store variants

use std::sync::Arc;

use sc_shared::phone::mask_phone_number;
use tracing::{debug, info, warn};

use super::code_generator::CodeGenerator;
use super::config::VerificationServiceConfig;
use super::provider_selector::ProviderSelector;
use super::traits::{SmsTransport, TemplateVariables};

/// Generates codes and delivers them through the first willing provider
pub struct CodeIssuer<T: SmsTransport> {
    transport: Arc<T>,
    generator: CodeGenerator,
    selector: ProviderSelector,
}

impl<T: SmsTransport> CodeIssuer<T> {
    pub fn new(transport: Arc<T>, config: &VerificationServiceConfig) -> Self {
        Self {
            transport,
            generator: CodeGenerator::new(config.code_length),
            selector: ProviderSelector::new(config.providers.clone()),
        }
    }

    /// Generate a code and try providers in random order until one succeeds
    ///
    /// Returns the delivered code and the provider that accepted it, or `None`
    /// when every provider failed or none is configured.
    pub async fn issue(&self, mobile: &str) -> Option<(String, String)> {
        let code = self.generator.generate();
        let masked = mask_phone_number(mobile);

        let providers = self.selector.ordered();
        if providers.is_empty() {
            warn!(phone = %masked, event = "no_sms_provider", "No SMS provider configured");
            return None;
        }

        for provider in providers {
            let mut variables = TemplateVariables::new();
            variables.insert(provider.code_var.clone(), code.clone());

            debug!(
                phone = %masked,
                provider = %provider.name,
                template_id = ?provider.template_id,
                "Dispatching verification code"
            );

            match self
                .transport
                .send(&provider.name, mobile, &variables, provider.template_id.as_deref())
                .await
            {
                Ok(()) => {
                    info!(
                        phone = %masked,
                        provider = %provider.name,
                        event = "sms_sent",
                        "Verification code sent"
                    );
                    return Some((code, provider.name));
                }
                Err(e) => {
                    warn!(
                        phone = %masked,
                        provider = %provider.name,
                        error = %e,
                        event = "sms_provider_failed",
                        "SMS provider failed, trying next"
                    );
                }
            }
        }

        None
    }
}
