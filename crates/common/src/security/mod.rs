//! Security primitives and memory hygiene utilities

pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecureZeroingType};
