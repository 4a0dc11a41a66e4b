//! Type-safe wrappers for hash outputs

pub mod digest;

pub use digest::Digest;

/// Trait for types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}
