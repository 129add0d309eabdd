//! Byte ⇄ 32-bit word conversion and per-word endianness swaps
//!
//! "Native" words pack four bytes least-significant-byte first. This is
//! fixed to little-endian rather than taken from the host so results are
//! identical on every target. The legacy container stores the same bytes
//! most-significant-byte first; [`swap_word_endianness`] converts between
//! the two.

use crate::consts::WORD_BYTES;
use crate::core::bytes::pad_to_words;

/// Zero-pads `bytes` to a word boundary and packs them as native words.
pub fn bytes_to_words(bytes: &[u8]) -> Vec<u32> {
    pad_to_words(bytes)
        .chunks_exact(WORD_BYTES)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

/// Unpacks native words into `4 * words.len()` bytes.
///
/// Padding added by [`bytes_to_words`] is not removed; callers that need the
/// exact length track it separately.
pub fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Reverses the bytes of every word.
///
/// Applying it twice is the identity.
pub fn swap_word_endianness(words: &[u32]) -> Vec<u32> {
    words.iter().map(|w| w.swap_bytes()).collect()
}

/// Same as [`swap_word_endianness`], reusing the storage of `words`.
pub fn swap_word_endianness_owned(mut words: Vec<u32>) -> Vec<u32> {
    for w in words.iter_mut() {
        *w = w.swap_bytes();
    }
    words
}

/// Packs bytes as legacy big-endian words (zero-padded).
pub(crate) fn bytes_to_be_words(bytes: &[u8]) -> Vec<u32> {
    swap_word_endianness_owned(bytes_to_words(bytes))
}

/// Unpacks legacy big-endian words into bytes.
pub(crate) fn be_words_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}
