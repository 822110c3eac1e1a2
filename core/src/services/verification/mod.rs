//! Verification module for SMS-based phone confirmation
//!
//! This module provides the complete verification code workflow:
//! - Numeric code generation
//! - Random provider ordering with failover
//! - Cache-backed store with cooldown, token exchange and garbage collection
//! - Session-backed store with explicit expiry

mod cache_store;
mod code_generator;
mod config;
mod issuer;
mod locks;
mod provider_selector;
mod session_store;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use cache_store::CacheVerificationStore;
pub use code_generator::CodeGenerator;
pub use config::VerificationServiceConfig;
pub use provider_selector::ProviderSelector;
pub use session_store::{SessionVerificationStore, SESSION_KEY};
pub use traits::{KeyValueStore, SessionStore, SmsTransport, TemplateVariables};
pub use types::SendResult;
