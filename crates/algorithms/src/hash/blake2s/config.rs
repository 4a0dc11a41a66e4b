//! Construction-time configuration
//!
//! Small BLAKE2s builds for microcontrollers usually select this behaviour
//! with preprocessor switches. Here the same matrix is a plain value chosen
//! when the state is built, so every combination is available in one binary.

/// Behaviour switches for a [`Blake2s`](super::Blake2s) state
///
/// ```
/// use tinyblake_algorithms::Blake2sConfig;
///
/// let cfg = Blake2sConfig::new().streaming(false).strict(true);
/// assert!(!cfg.is_streaming());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Blake2sConfig {
    streaming: bool,
    strict: bool,
    large_input: bool,
    last_node: bool,
}

impl Blake2sConfig {
    /// Streaming, strictly checked, 32-bit counter, not a last node
    pub const fn new() -> Self {
        Self {
            streaming: true,
            strict: true,
            large_input: false,
            last_node: false,
        }
    }

    /// The classic size-optimized build: block-only input, trusted
    /// preconditions, 32-bit counter
    pub const fn reference() -> Self {
        Self {
            streaming: false,
            strict: false,
            large_input: false,
            last_node: false,
        }
    }

    /// Accept arbitrary-length `update` calls (`true`) or whole blocks only
    pub fn streaming(mut self, on: bool) -> Self {
        self.streaming = on;
        self
    }

    /// Validate preconditions and report violations as errors (`true`), or
    /// trust the caller
    ///
    /// A trusting state stays memory-safe; driving it out of order yields a
    /// well-defined but meaningless digest.
    pub fn strict(mut self, on: bool) -> Self {
        self.strict = on;
        self
    }

    /// Carry the byte counter into its high word, lifting the 4 GiB limit
    pub fn large_input(mut self, on: bool) -> Self {
        self.large_input = on;
        self
    }

    /// Mark the state as the last node of its tree level
    pub fn last_node(mut self, on: bool) -> Self {
        self.last_node = on;
        self
    }

    /// Whether arbitrary-length input is accepted
    pub const fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Whether preconditions are validated
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Whether the counter uses its high word
    pub const fn is_large_input(&self) -> bool {
        self.large_input
    }

    /// Whether the final compression also sets the last-node flag
    pub const fn is_last_node(&self) -> bool {
        self.last_node
    }
}

impl Default for Blake2sConfig {
    fn default() -> Self {
        Self::new()
    }
}
