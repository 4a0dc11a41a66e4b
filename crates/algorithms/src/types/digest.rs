//! Type-safe digest implementation with size guarantees
//!
//! Provides the `Digest` type, the fixed-size output of a hash function.

use core::fmt;
use core::ops::Deref;
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};
use crate::types::ConstantTimeEq;
use tinyblake_common::security::SecureZeroingType;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

/// A hash digest with a fixed size
#[derive(Clone, Copy, Zeroize)]
pub struct Digest<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Digest<N> {
    /// Create a new digest from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Digest::from_slice", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Get the length of the digest
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the digest is empty
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrow the digest bytes as an array
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.data
    }

    /// Consume the digest and return its bytes
    pub fn into_bytes(self) -> [u8; N] {
        self.data
    }

    /// Convert to a hexadecimal string
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }

    /// Create from a hexadecimal string
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        validate::length("Digest::from_hex", hex_str.len(), N * 2)?;

        let mut data = [0u8; N];
        hex::decode_to_slice(hex_str, &mut data)
            .map_err(|_| Error::param("hex_str", "Invalid hexadecimal string"))?;
        Ok(Self { data })
    }

    /// Compare against an expected digest in constant time
    pub fn verify(&self, expected: &[u8]) -> bool {
        tinyblake_internal::constant_time::ct_eq(self.data, expected)
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> From<[u8; N]> for Digest<N> {
    fn from(data: [u8; N]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other)
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> PartialEq<[u8; N]> for Digest<N> {
    fn eq(&self, other: &[u8; N]) -> bool {
        &self.data == other
    }
}

impl<const N: usize> fmt::LowerHex for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.data {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>({:x})", N, self)
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self)
    }
}

impl<const N: usize> ConstantTimeEq for Digest<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        tinyblake_internal::constant_time::ct_eq(self.data, other.data)
    }
}

impl<const N: usize> SecureZeroingType for Digest<N> {
    fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }
}
