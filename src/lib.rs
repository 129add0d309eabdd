// src/lib.rs
//! wordbridge — bit-exact bridge between legacy big-endian word arrays and native byte buffers
//!
//! Features:
//! - Byte ⇄ native word ⇄ legacy word-array conversion with explicit byte counts
//! - Legacy-compatible text, hex and base64 parsing (quirks included)
//! - EVPKDF (OpenSSL `EVP_BytesToKey`) and key/IV splitting
//! - `Salted__` framing compatible with `openssl enc`

pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod kdf;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use crate::core::{
    bytes_to_words, concat, encode_text_legacy, encode_text_legacy_container,
    encode_text_native, from_native, from_native_with_length, iterate_pow, pad_to_chunk,
    parse_base64, parse_hex, preprocess_legacy_text, swap_word_endianness, to_native,
    words_to_bytes, LegacyWordArray, TextEncoder, Utf8Encoder, WordSource,
};
pub use enums::HashAlgorithm;
pub use error::{BridgeError, Result};
pub use kdf::{derive_key_and_iv, evpkdf, CipherParams, EvpKdf, KeyIv, OpenSslKdf, SaltedBlob};
