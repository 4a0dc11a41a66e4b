//! Constants for BLAKE2s (RFC 7693)

/// Internal block size of BLAKE2s in bytes
pub const BLAKE2S_BLOCK_SIZE: usize = 64;

/// Output size of BLAKE2s-256 in bytes
pub const BLAKE2S_OUTPUT_SIZE: usize = 32;

/// Number of rounds in one BLAKE2s compression
pub const BLAKE2S_ROUNDS: usize = 10;

/// Number of 32-bit words in the chaining value
pub const BLAKE2S_CHAIN_WORDS: usize = 8;

/// Number of 32-bit words in the working vector and in a message block
pub const BLAKE2S_WORK_WORDS: usize = 16;

/// Largest total input the 32-bit counter can represent without carry
pub const BLAKE2S_MAX_INPUT_32BIT: u64 = u32::MAX as u64;

/// Parameter block word 0 for sequential unkeyed hashing:
/// depth = 1, fanout = 1, key length = 0, digest length = 32.
pub const BLAKE2S_PARAM_WORD: u32 = (1 << 24) | (1 << 16) | BLAKE2S_OUTPUT_SIZE as u32;

/// Initialization vector (the SHA-256 IV)
pub const BLAKE2S_IV: [u32; 8] = [
    0x6A09_E667,
    0xBB67_AE85,
    0x3C6E_F372,
    0xA54F_F53A,
    0x510E_527F,
    0x9B05_688C,
    0x1F83_D9AB,
    0x5BE0_CD19,
];

/// Message schedule (σ), packed two indices per byte.
///
/// Entry `[r][i]` holds the message word indices for mixing step `i` of
/// round `r`: the high nibble is the first index, the low nibble the second.
pub const BLAKE2S_SIGMA_PACKED: [[u8; 8]; BLAKE2S_ROUNDS] = [
    [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef],
    [0xea, 0x48, 0x9f, 0xd6, 0x1c, 0x02, 0xb7, 0x53],
    [0xb8, 0xc0, 0x52, 0xfd, 0xae, 0x36, 0x71, 0x94],
    [0x79, 0x31, 0xdc, 0xbe, 0x26, 0x5a, 0x40, 0xf8],
    [0x90, 0x57, 0x24, 0xaf, 0xe1, 0xbc, 0x68, 0x3d],
    [0x2c, 0x6a, 0x0b, 0x83, 0x4d, 0x75, 0xfe, 0x19],
    [0xc5, 0x1f, 0xed, 0x4a, 0x07, 0x63, 0x92, 0x8b],
    [0xdb, 0x7e, 0xc1, 0x39, 0x50, 0xf4, 0x86, 0x2a],
    [0x6f, 0xe9, 0xb3, 0x08, 0xc2, 0xd7, 0x14, 0xa5],
    [0xa2, 0x84, 0x76, 0x15, 0xfb, 0x9e, 0x3c, 0xd0],
];

/// Rotation amounts used by the mixing function, in application order
pub const BLAKE2S_ROTATIONS: [u32; 4] = [16, 12, 8, 7];
