//! Domain entities of the verification flow.

pub mod cooldown;
pub mod provider;
pub mod verification_record;

#[cfg(test)]
mod tests;

pub use cooldown::{CooldownMarker, COOLDOWN_SECONDS};
pub use provider::{ProviderConfig, DEFAULT_CODE_VAR};
pub use verification_record::{VerificationRecord, DEFAULT_CODE_LENGTH, DEFAULT_EXPIRE_SECONDS};
