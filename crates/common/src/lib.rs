//! Common implementations and shared functionality for tinyblake
//!
//! Wrappers that zeroize transient hashing material on drop.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecureZeroingType};
