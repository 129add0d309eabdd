//! OpenSSL-compatible password-based derivation and `Salted__` framing
//!
//! The legacy toolkit's password-based cipher derives key and IV with
//! EVPKDF (MD5, one iteration) over an 8-byte salt, and frames the result
//! as `"Salted__" || salt || ciphertext`. OpenSSL `enc` without `-pbkdf2`
//! does the same, so the two interoperate.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::RngCore;

use crate::config::KdfSettings;
use crate::consts::{OPENSSL_SALT_LEN, SALTED_MAGIC};
use crate::core::parse::parse_base64_container;
use crate::enums::HashAlgorithm;
use crate::error::{BridgeError, Result};
use crate::kdf::evpkdf::EvpKdf;
use crate::kdf::split::{derive_key_and_iv, KeyIv};

pub type Salt = [u8; OPENSSL_SALT_LEN];

/// Fresh random salt from the thread RNG
pub fn random_salt() -> Salt {
    let mut salt = [0u8; OPENSSL_SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}

/// Key, IV and the salt they were derived with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherParams {
    pub key: Vec<u8>,
    pub iv: Vec<u8>,
    pub salt: Salt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenSslKdf {
    kdf: EvpKdf,
}

impl OpenSslKdf {
    pub fn new(hash: HashAlgorithm, iterations: u32) -> Result<Self> {
        Ok(Self {
            kdf: EvpKdf::new(hash, iterations)?,
        })
    }

    pub fn from_settings(settings: &KdfSettings) -> Result<Self> {
        Ok(Self {
            kdf: settings.evp_kdf()?,
        })
    }

    pub fn evp_kdf(&self) -> EvpKdf {
        self.kdf
    }

    /// Derives `key_len` + `iv_len` bytes from `password`.
    ///
    /// A missing salt is generated. Key and IV lengths need not add up to
    /// whole hash blocks; the last block is truncated as OpenSSL does.
    pub fn execute(
        &self,
        password: &[u8],
        key_len: usize,
        iv_len: usize,
        salt: Option<&[u8]>,
    ) -> Result<CipherParams> {
        let salt: Salt = match salt {
            Some(s) => s.try_into().map_err(|_| BridgeError::SaltLength(s.len()))?,
            None => random_salt(),
        };

        let kdf = self.kdf;
        let KeyIv { key, iv } = derive_key_and_iv(
            |n, secret| kdf.derive_unchecked(n, secret, &salt),
            key_len,
            iv_len,
            password,
        )?;

        Ok(CipherParams { key, iv, salt })
    }
}

/// Ciphertext with an optional `Salted__` header split off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaltedBlob {
    pub salt: Option<Salt>,
    pub body: Vec<u8>,
}

impl SaltedBlob {
    pub fn new(salt: Salt, body: Vec<u8>) -> Self {
        Self {
            salt: Some(salt),
            body,
        }
    }

    /// Splits off the header if present; otherwise the whole input is the body.
    pub fn parse(bytes: &[u8]) -> Self {
        let header_len = SALTED_MAGIC.len() + OPENSSL_SALT_LEN;
        if bytes.len() >= header_len && bytes.starts_with(SALTED_MAGIC) {
            let mut salt = [0u8; OPENSSL_SALT_LEN];
            salt.copy_from_slice(&bytes[SALTED_MAGIC.len()..header_len]);
            return Self {
                salt: Some(salt),
                body: bytes[header_len..].to_vec(),
            };
        }
        Self {
            salt: None,
            body: bytes.to_vec(),
        }
    }

    /// Parses base64 with the legacy library's permissive rules
    pub fn from_base64(b64: &str) -> Self {
        Self::parse(&parse_base64_container(b64).to_bytes())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match &self.salt {
            Some(salt) => {
                let mut out =
                    Vec::with_capacity(SALTED_MAGIC.len() + OPENSSL_SALT_LEN + self.body.len());
                out.extend_from_slice(SALTED_MAGIC);
                out.extend_from_slice(salt);
                out.extend_from_slice(&self.body);
                out
            }
            None => self.body.clone(),
        }
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }
}
