//! Session module
//!
//! Request-scoped stores used by the session-backed verification store.

pub mod memory_session;

#[cfg(test)]
mod tests;

pub use memory_session::MemorySession;
