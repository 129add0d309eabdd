//! Shared constants — representation widths and legacy KDF defaults

/// Bytes per 32-bit word
pub const WORD_BYTES: usize = 4;

/// Salt length used by the OpenSSL-compatible password-based cipher
pub const OPENSSL_SALT_LEN: usize = 8;

/// Header magic prefixed to salted ciphertext (`U2FsdGVkX1` in base64)
pub const SALTED_MAGIC: &[u8; 8] = b"Salted__";

/// EVPKDF iterations used by the legacy toolkit when none are given
// A single round: this is a compatibility KDF, not a hardening one
pub const DEFAULT_KDF_ITERATIONS: u32 = 1;

/// Default key size in bytes (AES-256)
pub const DEFAULT_KEY_SIZE: usize = 32;

/// Default IV size in bytes (one AES block)
pub const DEFAULT_IV_SIZE: usize = 16;

/// Default config file looked up when `WORDBRIDGE_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "wordbridge.toml";
