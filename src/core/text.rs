//! Text → word encodings matching the legacy library's string handling

use crate::core::container::LegacyWordArray;
use crate::core::words::{bytes_to_words, swap_word_endianness_owned};

/// Turns a string into bytes.
pub trait TextEncoder {
    fn encode(&self, s: &str) -> Vec<u8>;
}

/// Plain UTF-8
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Encoder;

impl TextEncoder for Utf8Encoder {
    fn encode(&self, s: &str) -> Vec<u8> {
        s.as_bytes().to_vec()
    }
}

/// One byte per char, keeping only the low 8 bits of each code point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1Encoder;

impl TextEncoder for Latin1Encoder {
    fn encode(&self, s: &str) -> Vec<u8> {
        s.chars().map(|c| (c as u32 & 0xff) as u8).collect()
    }
}

/// Reproduces the legacy `unescape(encodeURIComponent(s))` round-trip.
///
/// Every UTF-8 byte of `s` becomes one char with that byte as its code
/// point. ASCII input comes back unchanged.
pub fn preprocess_legacy_text(s: &str) -> String {
    s.bytes().map(char::from).collect()
}

/// Encodes `s` and packs it as native words. Returns the words and the unpadded byte length.
pub fn encode_text_native<E: TextEncoder + ?Sized>(encoder: &E, s: &str) -> (Vec<u32>, usize) {
    let bytes = encoder.encode(s);
    (bytes_to_words(&bytes), bytes.len())
}

/// Like [`encode_text_native`] but the words are in legacy big-endian order.
pub fn encode_text_legacy<E: TextEncoder + ?Sized>(encoder: &E, s: &str) -> (Vec<u32>, usize) {
    let (words, len) = encode_text_native(encoder, s);
    (swap_word_endianness_owned(words), len)
}

/// Preprocesses `s` and builds the legacy container for it.
pub fn encode_text_legacy_container<E: TextEncoder + ?Sized>(
    encoder: &E,
    s: &str,
) -> LegacyWordArray {
    let (words, len) = encode_text_legacy(encoder, &preprocess_legacy_text(s));
    LegacyWordArray::from_raw(words, len)
}

/// Preprocesses `s` and returns the encoded bytes for a native consumer.
pub fn encode_text_legacy_bytes<E: TextEncoder + ?Sized>(encoder: &E, s: &str) -> Vec<u8> {
    encoder.encode(&preprocess_legacy_text(s))
}
