//! # tinyblake
//!
//! A small, `no_std` BLAKE2s-256 implementation for constrained targets.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tinyblake = "0.3"
//! ```
//!
//! ```
//! use tinyblake::prelude::*;
//!
//! let digest = tinyblake::hash(b"abc").unwrap();
//! assert_eq!(
//!     digest.to_string(),
//!     "508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982"
//! );
//!
//! let mut hasher = Blake2s::new();
//! hasher.update(b"a").unwrap().update(b"bc").unwrap();
//! assert_eq!(hasher.finalize().unwrap(), digest);
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `alloc`: heap-backed helpers such as hex rendering without `std`
//! - `trace`: TRACE-level `tracing` events from the compression engine
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`tinyblake-algorithms`]: the BLAKE2s engine and one-shot drivers
//! - [`tinyblake-api`]: public error type and algorithm marker traits
//! - [`tinyblake-params`]: algorithm constants
//! - [`tinyblake-common`]: zeroizing wrappers
//! - [`tinyblake-internal`]: endian and constant-time helpers

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use tinyblake_algorithms as algorithms;
pub use tinyblake_api as api;
pub use tinyblake_common as common;
pub use tinyblake_internal as internal;
pub use tinyblake_params as params;

use tinyblake_algorithms::error::to_core_result;
use tinyblake_algorithms::{blake2s, blake2s_blocks, Digest};
use tinyblake_params::utils::hash::BLAKE2S_OUTPUT_SIZE;

/// BLAKE2s-256 digest
pub type Blake2sDigest = Digest<BLAKE2S_OUTPUT_SIZE>;

/// Hash `input` with the default configuration
pub fn hash(input: &[u8]) -> api::Result<Blake2sDigest> {
    let mut out = [0u8; BLAKE2S_OUTPUT_SIZE];
    to_core_result(blake2s(&mut out, input), "tinyblake::hash")?;
    Ok(Digest::new(out))
}

/// Hash the first `blocks` 64-byte blocks of `input`
pub fn hash_blocks(input: &[u8], blocks: usize) -> api::Result<Blake2sDigest> {
    let mut out = [0u8; BLAKE2S_OUTPUT_SIZE];
    to_core_result(blake2s_blocks(&mut out, input, blocks), "tinyblake::hash_blocks")?;
    Ok(Digest::new(out))
}

/// Common imports for tinyblake users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::algorithms::HashFunction;
    pub use crate::api::HashAlgorithm;

    // Hash engine and drivers
    pub use crate::algorithms::{
        blake2s, blake2s_blocks, blake2s_with_config, Blake2s, Blake2sConfig, Digest,
    };

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecureZeroingType};
    pub use zeroize::Zeroize;
}
