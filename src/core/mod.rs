//! Representation layer: byte buffers, native words and legacy word arrays
//!
//! Everything here is pure and works on in-memory buffers; every function
//! returns a freshly allocated result.

pub mod bytes;
pub mod container;
pub mod iterate;
pub mod parse;
pub mod text;
pub mod words;

pub use bytes::{concat, pad_to_chunk, pad_to_words};
pub use container::{from_native, from_native_with_length, to_native, LegacyWordArray, WordSource};
pub use iterate::iterate_pow;
pub use parse::{parse_base64, parse_base64_container, parse_hex, parse_hex_container};
pub use text::{
    encode_text_legacy, encode_text_legacy_bytes, encode_text_legacy_container,
    encode_text_native, preprocess_legacy_text, Latin1Encoder, TextEncoder, Utf8Encoder,
};
pub use words::{bytes_to_words, swap_word_endianness, swap_word_endianness_owned, words_to_bytes};
