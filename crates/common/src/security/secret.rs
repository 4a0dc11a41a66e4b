//! Secret data types with zeroization on drop
//!
//! Zeroization here is best effort: it clears the memory this value owns when
//! it is dropped, but copies made by the compiler (register spills, moves)
//! are out of reach. It is hygiene, not a side-channel defense.

use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::Zeroize;

/// Trait for zeroizable types that have a canonical secret-free value
pub trait SecureZeroingType: Zeroize + Clone {
    /// Create an instance that holds no secret material
    ///
    /// For plain buffers this is all zeroes. Types whose all-zero bit pattern
    /// is not a usable value return their freshly initialized state instead.
    fn zeroed() -> Self;
}

/// Short-lived secret value that is zeroized when dropped
///
/// Used for intermediate values such as expanded message words and working
/// vectors that must not outlive the computation that produced them.
pub struct EphemeralSecret<T: Zeroize> {
    inner: T,
}

impl<T: Zeroize> EphemeralSecret<T> {
    /// Create a new ephemeral secret
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }
}

impl<T: Zeroize> AsRef<T> for EphemeralSecret<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}

impl<T: Zeroize> Drop for EphemeralSecret<T> {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl<T: Zeroize> Deref for EphemeralSecret<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: Zeroize> DerefMut for EphemeralSecret<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T: Zeroize> fmt::Debug for EphemeralSecret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EphemeralSecret([REDACTED])")
    }
}
