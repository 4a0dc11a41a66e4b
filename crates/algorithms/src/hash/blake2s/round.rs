//! Mixing function and round schedule
//!
//! One round applies the mixing function eight times: four column steps
//! followed by four diagonal steps. Which words of the working vector a step
//! touches is computed from the step index instead of being read from a
//! table, and the message words come from the packed σ schedule.

use tinyblake_params::utils::hash::{
    BLAKE2S_ROTATIONS, BLAKE2S_SIGMA_PACKED, BLAKE2S_WORK_WORDS,
};

/// Mixing steps per round
pub const STEPS_PER_ROUND: usize = 8;

/// The BLAKE2s quarter-round mixer `G`
///
/// Takes four words of the working vector and two message words and returns
/// the updated four words.
#[inline(always)]
pub fn g(a: u32, b: u32, c: u32, d: u32, m1: u32, m2: u32) -> (u32, u32, u32, u32) {
    let [r1, r2, r3, r4] = BLAKE2S_ROTATIONS;

    let a = a.wrapping_add(b).wrapping_add(m1);
    let d = (d ^ a).rotate_right(r1);
    let c = c.wrapping_add(d);
    let b = (b ^ c).rotate_right(r2);

    let a = a.wrapping_add(b).wrapping_add(m2);
    let d = (d ^ a).rotate_right(r3);
    let c = c.wrapping_add(d);
    let b = (b ^ c).rotate_right(r4);

    (a, b, c, d)
}

/// Working vector indices `[a, b, c, d]` for mixing step `i` (0..8)
///
/// Steps 0..4 select the columns `(0,4,8,12)..(3,7,11,15)`, steps 4..8 the
/// diagonals `(0,5,10,15)..(3,4,9,14)`.
#[inline(always)]
pub const fn mix_indices(i: usize) -> [usize; 4] {
    let diag = i / 4;
    [
        i % 4,
        (i + diag) % 4 + 4,
        (i + 2 * diag) % 4 + 8,
        (i + 3 * diag) % 4 + 12,
    ]
}

/// Message word indices for mixing step `i` of round `r`
///
/// High nibble of the packed σ entry first, low nibble second.
#[inline(always)]
pub const fn message_indices(r: usize, i: usize) -> (usize, usize) {
    let packed = BLAKE2S_SIGMA_PACKED[r][i];
    ((packed >> 4) as usize, (packed & 0x0f) as usize)
}

/// Apply round `r` to the working vector `v` with message words `m`
pub fn round(r: usize, m: &[u32; BLAKE2S_WORK_WORDS], v: &mut [u32; BLAKE2S_WORK_WORDS]) {
    for i in 0..STEPS_PER_ROUND {
        let [ia, ib, ic, id] = mix_indices(i);
        let (s1, s2) = message_indices(r, i);
        let (a, b, c, d) = g(v[ia], v[ib], v[ic], v[id], m[s1], m[s2]);
        v[ia] = a;
        v[ib] = b;
        v[ic] = c;
        v[id] = d;
    }
}
