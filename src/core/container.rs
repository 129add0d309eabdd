//! Bridge to the legacy word-array container
//!
//! The legacy container holds big-endian words plus an explicit count of
//! significant bytes. This module only reads and builds that shape.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::consts::WORD_BYTES;
use crate::core::words::{be_words_to_bytes, bytes_to_be_words, swap_word_endianness};
use crate::error::{BridgeError, Result};

/// Big-endian words with a significant-byte count.
///
/// Invariant: `sig_bytes <= 4 * words.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegacyWordArray {
    words: Vec<u32>,
    sig_bytes: usize,
}

impl LegacyWordArray {
    /// Wraps words already in legacy big-endian order, all bytes significant.
    pub fn new(words: Vec<u32>) -> Self {
        let sig_bytes = words.len() * WORD_BYTES;
        Self { words, sig_bytes }
    }

    /// Wraps words already in legacy big-endian order with an explicit byte count.
    pub fn with_length(words: Vec<u32>, sig_bytes: usize) -> Result<Self> {
        let capacity = words.len() * WORD_BYTES;
        if sig_bytes > capacity {
            return Err(BridgeError::SigBytesOutOfRange {
                sig_bytes,
                capacity,
            });
        }
        Ok(Self { words, sig_bytes })
    }

    /// Caller guarantees the invariant.
    pub(crate) fn from_raw(words: Vec<u32>, sig_bytes: usize) -> Self {
        debug_assert!(sig_bytes <= words.len() * WORD_BYTES);
        Self { words, sig_bytes }
    }

    /// Exact-length container for `bytes`
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            words: bytes_to_be_words(bytes),
            sig_bytes: bytes.len(),
        }
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub fn sig_bytes(&self) -> usize {
        self.sig_bytes
    }

    pub fn into_parts(self) -> (Vec<u32>, usize) {
        (self.words, self.sig_bytes)
    }

    /// The significant bytes, in order
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = be_words_to_bytes(&self.words);
        bytes.truncate(self.sig_bytes);
        bytes
    }

    /// Zeroes the insignificant tail of the last word and drops surplus words.
    pub fn clamp(&mut self) {
        let keep = self.sig_bytes.div_ceil(WORD_BYTES);
        self.words.truncate(keep);
        let used = self.sig_bytes % WORD_BYTES;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= u32::MAX << (32 - used * 8);
            }
        }
    }

    /// Lowercase hex of the significant bytes
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Padded standard base64 of the significant bytes
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }
}

/// Legacy words → native words. The byte count is dropped.
pub fn to_native(array: &LegacyWordArray) -> Vec<u32> {
    swap_word_endianness(&array.words)
}

/// Native words → legacy container covering every byte of every word.
pub fn from_native(words: &[u32]) -> LegacyWordArray {
    LegacyWordArray::new(swap_word_endianness(words))
}

/// Native words → legacy container with an explicit (possibly partial) byte count.
pub fn from_native_with_length(words: &[u32], byte_count: usize) -> Result<LegacyWordArray> {
    LegacyWordArray::with_length(swap_word_endianness(words), byte_count)
}

/// Either representation, chosen explicitly by the caller for debug output.
#[derive(Debug, Clone, Copy)]
pub enum WordSource<'a> {
    Native(&'a [u32]),
    Legacy(&'a LegacyWordArray),
}

impl WordSource<'_> {
    /// One unpadded lowercase hex string per native word
    pub fn to_hex_words(&self) -> Vec<String> {
        let native = match self {
            WordSource::Native(words) => words.to_vec(),
            WordSource::Legacy(array) => to_native(array),
        };
        native.iter().map(|w| format!("{w:x}")).collect()
    }
}
