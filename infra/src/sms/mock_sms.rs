//! Mock SMS provider
//!
//! Logs messages instead of sending them and keeps them in memory so tests
//! and local runs can read the delivered code.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use sc_core::services::TemplateVariables;
use sc_shared::phone::{is_valid_phone, mask_phone_number};

use super::sms_provider::SmsProvider;
use crate::InfrastructureError;

/// A message accepted by the mock provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockMessage {
    pub message_id: String,
    pub mobile: String,
    pub variables: TemplateVariables,
    pub template_id: Option<String>,
}

/// Mock SMS provider for development and testing
#[derive(Clone)]
pub struct MockSmsProvider {
    name: String,
    message_count: Arc<AtomicU64>,
    simulate_failure: Arc<AtomicBool>,
    outbox: Arc<Mutex<Vec<MockMessage>>>,
}

impl MockSmsProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: Arc::new(AtomicBool::new(false)),
            outbox: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider that refuses every message
    pub fn failing(name: impl Into<String>) -> Self {
        let provider = Self::new(name);
        provider.set_simulate_failure(true);
        provider
    }

    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Messages accepted so far
    pub fn messages(&self) -> Vec<MockMessage> {
        self.outbox.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Most recent message sent to `mobile`
    pub fn last_message_to(&self, mobile: &str) -> Option<MockMessage> {
        self.messages().into_iter().rev().find(|m| m.mobile == mobile)
    }
}

#[async_trait]
impl SmsProvider for MockSmsProvider {
    async fn send(
        &self,
        mobile: &str,
        variables: &TemplateVariables,
        template_id: Option<&str>,
    ) -> Result<String, InfrastructureError> {
        let masked = mask_phone_number(mobile);

        if !is_valid_phone(mobile) {
            return Err(InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                masked
            )));
        }

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(provider = %self.name, phone = %masked, "Mock SMS provider simulating failure");
            return Err(InfrastructureError::Sms(
                "Simulated SMS sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        self.message_count.fetch_add(1, Ordering::SeqCst);
        self.outbox
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(MockMessage {
                message_id: message_id.clone(),
                mobile: mobile.to_string(),
                variables: variables.clone(),
                template_id: template_id.map(str::to_string),
            });

        info!(
            target: "sms_service",
            provider = %self.name,
            phone = %masked,
            message_id = %message_id,
            template_id = ?template_id,
            "SMS sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        &self.name
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure.load(Ordering::SeqCst)
    }
}
