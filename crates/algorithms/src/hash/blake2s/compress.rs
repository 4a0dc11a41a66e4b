//! The BLAKE2s compression function

use tinyblake_common::security::EphemeralSecret;
use tinyblake_internal::constant_time::ct_mask_u32;
use tinyblake_internal::endian::words_from_le_bytes;
use tinyblake_params::utils::hash::{
    BLAKE2S_BLOCK_SIZE, BLAKE2S_CHAIN_WORDS, BLAKE2S_IV, BLAKE2S_ROUNDS, BLAKE2S_WORK_WORDS,
};

use super::round::round;
use crate::trace::trace_engine;

/// Finalization flags mixed into the last two words of the working vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Set for the final compression of a message
    pub last_block: bool,
    /// Set for the final compression of the last node of a tree level
    pub last_node: bool,
}

/// Compress one 64-byte block into the chaining value
///
/// `counter` is the byte counter as `[low, high]` words, already including
/// the bytes of `block` that belong to the message.
pub fn compress(
    chain: &mut [u32; BLAKE2S_CHAIN_WORDS],
    block: &[u8; BLAKE2S_BLOCK_SIZE],
    counter: [u32; 2],
    flags: Flags,
) {
    trace_engine!("compress", t0 = counter[0], t1 = counter[1], last = flags.last_block);

    let m = EphemeralSecret::new(
        words_from_le_bytes::<BLAKE2S_WORK_WORDS, BLAKE2S_BLOCK_SIZE>(block),
    );

    let mut v = EphemeralSecret::new([0u32; BLAKE2S_WORK_WORDS]);
    v[..BLAKE2S_CHAIN_WORDS].copy_from_slice(&chain[..]);
    v[BLAKE2S_CHAIN_WORDS..].copy_from_slice(&BLAKE2S_IV);
    v[12] ^= counter[0];
    v[13] ^= counter[1];
    v[14] ^= ct_mask_u32(flags.last_block);
    v[15] ^= ct_mask_u32(flags.last_node);

    for r in 0..BLAKE2S_ROUNDS {
        round(r, &m, &mut v);
    }

    for (i, h) in chain.iter_mut().enumerate() {
        *h ^= v[i] ^ v[i + BLAKE2S_CHAIN_WORDS];
    }
}
