//! Size-optimized BLAKE2s engine
//!
//! This crate implements BLAKE2s-256 (RFC 7693) in its sequential, unkeyed
//! form, written for small code size on constrained targets rather than for
//! throughput. It is usable in both `std` and `no_std` environments and never
//! allocates while hashing.
//!
//! # Structure
//!
//! - [`hash::blake2s::round`]: the mixing function and the round schedule
//! - [`hash::blake2s::compress`]: the compression function
//! - [`hash::blake2s::Blake2s`]: the streaming state machine
//! - [`hash::blake2s::blake2s`] and [`hash::blake2s::blake2s_blocks`]: one-shot drivers
//!
//! The usual build switches of size-optimized BLAKE2s (streaming or
//! block-only input, strict or trusting precondition checks, 32- or 64-bit
//! byte counter) are expressed at construction time through
//! [`Blake2sConfig`].

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

mod trace;

// Hash function implementations
pub mod hash;
pub use hash::{blake2s, blake2s_blocks, blake2s_with_config, Blake2s, Blake2sConfig, HashFunction};

// Type system
pub mod types;
pub use types::Digest;

// Re-export security types from the common crate
pub use tinyblake_common::security::{EphemeralSecret, SecureZeroingType};
