//! Data model for the BLAKE2 known-answer file (`blake2-kat.json` layout).

use serde::Deserialize;

/// One entry of the KAT file
#[derive(Debug, Clone, Deserialize)]
pub struct KatCase {
    /// Hash family, e.g. `blake2s` or `blake2b`
    pub hash: String,
    /// Hex-encoded message
    #[serde(rename = "in")]
    pub input: String,
    /// Hex-encoded key; empty for unkeyed cases
    #[serde(default)]
    pub key: String,
    /// Hex-encoded expected digest
    pub out: String,
}

impl KatCase {
    /// Whether this case targets unkeyed BLAKE2s
    pub fn is_unkeyed_blake2s(&self) -> bool {
        self.hash == "blake2s" && self.key.is_empty()
    }
}

/// Tally of a KAT run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KatSummary {
    pub success: usize,
    pub skip: usize,
    pub fail: usize,
}

impl KatSummary {
    pub fn run(&self) -> usize {
        self.success + self.skip + self.fail
    }
}
