//! Public API traits and types for the tinyblake library
//!
//! This crate provides the public API surface shared by the tinyblake crates:
//! the error taxonomy and the hash algorithm marker trait.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::HashAlgorithm;
