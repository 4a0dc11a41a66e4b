//! Constant-time operations

use subtle::ConstantTimeEq;

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. The length check is
/// not constant time; only the contents are compared without early exit.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Word mask for a boolean condition
///
/// Returns `0xFFFF_FFFF` if condition is true, `0` if false, without a branch.
#[inline(always)]
pub fn ct_mask_u32(condition: bool) -> u32 {
    0u32.wrapping_sub(condition as u32)
}
