//! # Smscode Core
//!
//! Issuance and validation of short-lived SMS verification codes.
//! This crate contains the domain entities, the verification stores, the
//! collaborator traits for SMS transport and storage, and the error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
