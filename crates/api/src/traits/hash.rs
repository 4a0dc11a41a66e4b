//! Hash algorithm marker trait

/// Compile-time description of a hash algorithm
///
/// Implemented by uninhabited marker types so that sizes and identifiers
/// are available without constructing a hasher.
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable algorithm identifier
    const ALGORITHM_ID: &'static str;

    /// Algorithm name
    fn name() -> &'static str {
        Self::ALGORITHM_ID
    }
}
