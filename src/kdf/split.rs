//! Splits KDF output into a key and an IV
//!
//! The KDF is any closure `(byte_count, secret) -> bytes`; salt, digest and
//! iteration count are captured by the closure, so this module knows
//! nothing about EVPKDF.

use crate::error::{BridgeError, Result};

/// Key and IV carved out of one KDF output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyIv {
    pub key: Vec<u8>,
    pub iv: Vec<u8>,
}

/// Requests `key_len + iv_len` bytes from `kdf`; the leading bytes are the key, the rest the IV.
///
/// A length sum that overflows `usize` is reported as
/// [`BridgeError::KdfOutputLength`] without calling `kdf`.
pub fn derive_key_and_iv<K>(kdf: K, key_len: usize, iv_len: usize, secret: &[u8]) -> Result<KeyIv>
where
    K: FnOnce(usize, &[u8]) -> Vec<u8>,
{
    let expected = key_len
        .checked_add(iv_len)
        .ok_or(BridgeError::KdfOutputLength {
            expected: usize::MAX,
            actual: 0,
        })?;
    let mut key = kdf(expected, secret);
    if key.len() != expected {
        return Err(BridgeError::KdfOutputLength {
            expected,
            actual: key.len(),
        });
    }
    let iv = key.split_off(key_len);
    Ok(KeyIv { key, iv })
}
