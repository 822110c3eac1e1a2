//! SMS Module
//!
//! - **SmsProvider**: common interface for SMS vendors
//! - **MockSmsProvider**: logs and records messages for development
//! - **ProviderRegistry**: the transport used by the verification stores

pub mod mock_sms;
pub mod registry;
pub mod sms_provider;

pub use mock_sms::{MockMessage, MockSmsProvider};
pub use registry::ProviderRegistry;
pub use sms_provider::SmsProvider;

#[cfg(test)]
mod tests;
