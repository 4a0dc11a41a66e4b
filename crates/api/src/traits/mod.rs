//! Trait definitions shared across tinyblake crates

pub mod hash;

pub use hash::HashAlgorithm;
