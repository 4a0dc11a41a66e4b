//! Little-endian word codec
//!
//! BLAKE2s reads and writes all words little-endian regardless of the host.
//! Every conversion goes through an explicit fixed-endianness codec; there is
//! no native-order fast path.

use byteorder::{ByteOrder, LittleEndian};

/// Read a u32 from the first four bytes of `bytes` in little-endian order
///
/// Panics if `bytes` is shorter than four bytes.
#[inline(always)]
pub fn load32_le(bytes: &[u8]) -> u32 {
    LittleEndian::read_u32(bytes)
}

/// Write `value` into the first four bytes of `dst` in little-endian order
///
/// Panics if `dst` is shorter than four bytes.
#[inline(always)]
pub fn store32_le(dst: &mut [u8], value: u32) {
    LittleEndian::write_u32(dst, value)
}

/// Decode a block of bytes into little-endian words.
pub fn words_from_le_bytes<const W: usize, const B: usize>(block: &[u8; B]) -> [u32; W] {
    debug_assert_eq!(W * 4, B);
    let mut words = [0u32; W];
    for (w, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *w = load32_le(chunk);
    }
    words
}

/// Encode words as consecutive little-endian bytes into `dst`.
///
/// `dst` may be shorter than the words; trailing words are truncated.
pub fn words_to_le_bytes(words: &[u32], dst: &mut [u8]) {
    for (chunk, &w) in dst.chunks_mut(4).zip(words.iter()) {
        if chunk.len() == 4 {
            store32_le(chunk, w);
        } else {
            chunk.copy_from_slice(&w.to_le_bytes()[..chunk.len()]);
        }
    }
}
