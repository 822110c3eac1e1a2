//! Business services containing the verification use cases.

pub mod verification;

pub use verification::{
    CacheVerificationStore, CodeGenerator, KeyValueStore, ProviderSelector, SendResult,
    SessionStore, SessionVerificationStore, SmsTransport, TemplateVariables, SESSION_KEY,
    VerificationServiceConfig,
};
