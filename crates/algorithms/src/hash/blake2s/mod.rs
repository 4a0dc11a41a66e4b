//! BLAKE2s-256 hash function
//!
//! This module implements the sequential, unkeyed form of BLAKE2s as
//! specified in RFC 7693 (https://www.rfc-editor.org/rfc/rfc7693.html):
//! depth 1, fanout 1, 32-byte digest. It is written for code size rather than
//! speed; the round schedule is computed arithmetically and the message
//! schedule is stored packed, two indices per byte.
//!
//! A [`Blake2s`] state moves through three phases:
//!
//! 1. created by [`HashFunction::new`] or [`Blake2s::with_config`],
//! 2. fed by any number of [`HashFunction::update`] calls,
//! 3. finalized exactly once by [`HashFunction::finalize`] or
//!    [`Blake2s::finalize_into`].
//!
//! `update` never compresses the most recent full block: whether a block is
//! the last one is only known at finalization, and the last block must be
//! compressed with the last-block flag set. A message that ends on a block
//! boundary therefore keeps its final 64 bytes buffered until `finalize`.

use zeroize::Zeroize;

use tinyblake_api::HashAlgorithm;
use tinyblake_common::security::SecureZeroingType;
use tinyblake_internal::endian::words_to_le_bytes;
use tinyblake_params::utils::hash::{
    BLAKE2S_BLOCK_SIZE, BLAKE2S_CHAIN_WORDS, BLAKE2S_IV, BLAKE2S_MAX_INPUT_32BIT,
    BLAKE2S_OUTPUT_SIZE, BLAKE2S_PARAM_WORD,
};

use crate::error::{validate, Error, Result};
use crate::hash::HashFunction;
use crate::trace::trace_engine;
use crate::types::Digest;

pub mod compress;
pub mod config;
pub mod round;

pub use compress::{compress, Flags};
pub use config::Blake2sConfig;

// ─────────────────────────────────────────────────────────────────────────────
// Marker type implementing the HashAlgorithm trait
// ─────────────────────────────────────────────────────────────────────────────
#[allow(missing_docs)]
pub enum Blake2sAlgorithm {}
impl HashAlgorithm for Blake2sAlgorithm {
    const OUTPUT_SIZE: usize = BLAKE2S_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = BLAKE2S_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "BLAKE2s-256";
}

// ─────────────────────────────────────────────────────────────────────────────
// State structure
// ─────────────────────────────────────────────────────────────────────────────

/// Streaming BLAKE2s-256 state
///
/// The state is zeroized when dropped. This is best-effort memory hygiene and
/// makes no claim about timing side channels.
#[derive(Clone, Zeroize)]
pub struct Blake2s {
    pub(crate) h: [u32; BLAKE2S_CHAIN_WORDS],
    pub(crate) t: [u32; 2],
    #[zeroize(skip)]
    pub(crate) flags: Flags,
    pub(crate) buf: [u8; BLAKE2S_BLOCK_SIZE],
    pub(crate) buf_len: usize,
    #[zeroize(skip)]
    pub(crate) config: Blake2sConfig,
}

impl Drop for Blake2s {
    fn drop(&mut self) {
        self.zeroize();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Constructors and accessors
// ─────────────────────────────────────────────────────────────────────────────
impl Blake2s {
    /// Create a state with the given configuration
    pub fn with_config(config: Blake2sConfig) -> Self {
        let mut h = BLAKE2S_IV;
        h[0] ^= BLAKE2S_PARAM_WORD; // digest_len | fanout=1 | depth=1
        Self {
            h,
            t: [0; 2],
            flags: Flags::default(),
            buf: [0; BLAKE2S_BLOCK_SIZE],
            buf_len: 0,
            config,
        }
    }

    /// Configuration this state was built with
    pub fn config(&self) -> Blake2sConfig {
        self.config
    }

    /// Whether the last-block flag has been set, i.e. the state is finalized
    pub fn is_last_block(&self) -> bool {
        self.flags.last_block
    }

    /// Byte counter as fed to the compression function so far
    pub fn bytes_compressed(&self) -> u64 {
        (u64::from(self.t[1]) << 32) | u64::from(self.t[0])
    }

    /// Number of accepted bytes not yet compressed (0..=64)
    pub fn buffered_len(&self) -> usize {
        self.buf_len
    }

    /// Current chaining value serialized as little-endian words
    pub fn chaining_value(&self) -> [u8; BLAKE2S_OUTPUT_SIZE] {
        let mut out = [0u8; BLAKE2S_OUTPUT_SIZE];
        words_to_le_bytes(&self.h, &mut out);
        out
    }

    /// Finalize into a caller-provided buffer of exactly 32 bytes
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<()> {
        validate::length("BLAKE2s output", out.len(), BLAKE2S_OUTPUT_SIZE)?;
        self.finalize_internal()?;
        words_to_le_bytes(&self.h, out);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Engine
    // ─────────────────────────────────────────────────────────────────────

    fn increment_counter(&mut self, inc: u32) {
        trace_engine!("increment", inc = inc);
        let (low, carry) = self.t[0].overflowing_add(inc);
        self.t[0] = low;
        if carry && self.config.is_large_input() {
            self.t[1] = self.t[1].wrapping_add(1);
        }
    }

    fn set_last_block(&mut self) {
        trace_engine!("lastblock", last_node = self.config.is_last_node());
        if self.config.is_last_node() {
            self.flags.last_node = true;
        }
        self.flags.last_block = true;
    }

    fn compress_buffer(&mut self) {
        compress(&mut self.h, &self.buf, self.t, self.flags);
    }

    fn check_update(&self, len: usize) -> Result<()> {
        validate::state(
            !self.flags.last_block,
            "BLAKE2s update",
            "state is already finalized",
        )?;
        if !self.config.is_streaming() {
            validate::parameter(
                len % BLAKE2S_BLOCK_SIZE == 0,
                "input",
                "block mode requires a multiple of 64 bytes",
            )?;
        }
        if !self.config.is_large_input() {
            let total = self
                .bytes_compressed()
                .saturating_add(self.buf_len as u64)
                .saturating_add(len as u64);
            validate::parameter(
                total <= BLAKE2S_MAX_INPUT_32BIT,
                "input",
                "total input exceeds 4 GiB without large_input",
            )?;
        }
        Ok(())
    }

    fn update_internal(&mut self, input: &[u8]) -> Result<()> {
        if input.is_empty() {
            return Ok(());
        }
        if self.config.is_strict() {
            self.check_update(input.len())?;
        }

        let mut input = input;
        let left = self.buf_len;
        let fill = BLAKE2S_BLOCK_SIZE - left;
        if input.len() > fill {
            // Complete the buffered block; more input follows, so it is not last
            self.buf_len = 0;
            self.buf[left..].copy_from_slice(&input[..fill]);
            self.increment_counter(BLAKE2S_BLOCK_SIZE as u32);
            self.compress_buffer();
            input = &input[fill..];

            while input.len() > BLAKE2S_BLOCK_SIZE {
                let Some((block, rest)) = input.split_first_chunk::<BLAKE2S_BLOCK_SIZE>() else {
                    break;
                };
                self.increment_counter(BLAKE2S_BLOCK_SIZE as u32);
                compress(&mut self.h, block, self.t, self.flags);
                input = rest;
            }
        }

        self.buf[self.buf_len..self.buf_len + input.len()].copy_from_slice(input);
        self.buf_len += input.len();
        Ok(())
    }

    fn finalize_internal(&mut self) -> Result<()> {
        if self.config.is_strict() {
            validate::state(
                !self.flags.last_block,
                "BLAKE2s finalize",
                "state is already finalized",
            )?;
        }

        self.increment_counter(self.buf_len as u32);
        self.set_last_block();
        self.buf[self.buf_len..].fill(0);
        self.compress_buffer();
        Ok(())
    }
}

impl HashFunction for Blake2s {
    type Algorithm = Blake2sAlgorithm;
    type Output = Digest<BLAKE2S_OUTPUT_SIZE>;

    fn new() -> Self {
        Blake2s::with_config(Blake2sConfig::default())
    }

    fn update(&mut self, input: &[u8]) -> Result<&mut Self> {
        self.update_internal(input)?;
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let mut digest = [0u8; BLAKE2S_OUTPUT_SIZE];
        self.finalize_into(&mut digest)?;
        Ok(Digest::new(digest))
    }
}

impl SecureZeroingType for Blake2s {
    /// A freshly initialized default state
    ///
    /// An all-zero chaining value is not a BLAKE2s state, so the secret-free
    /// value is the IV-seeded state with an empty buffer and zero counter.
    fn zeroed() -> Self {
        Blake2s::with_config(Blake2sConfig::default())
    }
}

impl core::fmt::Debug for Blake2s {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Blake2s")
            .field("bytes_compressed", &self.bytes_compressed())
            .field("buffered_len", &self.buf_len)
            .field("flags", &self.flags)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// One-shot drivers
// ─────────────────────────────────────────────────────────────────────────────

/// Hash `input` into `out` (exactly 32 bytes) with the default configuration
pub fn blake2s(out: &mut [u8], input: &[u8]) -> Result<()> {
    blake2s_with_config(Blake2sConfig::default(), out, input)
}

/// Hash `input` into `out` (exactly 32 bytes) with an explicit configuration
pub fn blake2s_with_config(config: Blake2sConfig, out: &mut [u8], input: &[u8]) -> Result<()> {
    validate::length("BLAKE2s output", out.len(), BLAKE2S_OUTPUT_SIZE)?;
    let mut state = Blake2s::with_config(config);
    state.update_internal(input)?;
    state.finalize_into(out)
}

/// Hash the first `blocks` 64-byte blocks of `input` into `out`
///
/// Equivalent to [`blake2s`] over `&input[..blocks * 64]`, run in block mode.
pub fn blake2s_blocks(out: &mut [u8], input: &[u8], blocks: usize) -> Result<()> {
    let len = blocks
        .checked_mul(BLAKE2S_BLOCK_SIZE)
        .ok_or(Error::param("blocks", "block count overflows the input length"))?;
    validate::min_length("BLAKE2s block input", input.len(), len)?;
    blake2s_with_config(Blake2sConfig::new().streaming(false), out, &input[..len])
}
