//! Hash function implementations
//!
//! The [`HashFunction`] trait is the streaming interface every hasher in this
//! crate implements: construct, feed any number of byte slices, finalize once.

use tinyblake_api::HashAlgorithm;

use crate::error::Result;

pub mod blake2s;

pub use blake2s::{
    blake2s, blake2s_blocks, blake2s_with_config, Blake2s, Blake2sAlgorithm, Blake2sConfig,
};

/// Streaming hash function interface
pub trait HashFunction: Sized {
    /// Marker type describing the algorithm
    type Algorithm: HashAlgorithm;

    /// Digest type produced by [`HashFunction::finalize`]
    type Output: AsRef<[u8]> + Clone;

    /// Create a new hasher with default configuration
    fn new() -> Self;

    /// Absorb more input
    fn update(&mut self, input: &[u8]) -> Result<&mut Self>;

    /// Finish the computation and return the digest
    ///
    /// A hasher must be finalized at most once.
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Digest size in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Internal block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }
}
