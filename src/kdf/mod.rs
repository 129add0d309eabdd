//! Key derivation built on the representation layer
//!
//! - [`evpkdf`] - the iterated-hash EVPKDF
//! - [`split`] - key/IV splitting over any KDF closure
//! - [`openssl`] - salted, OpenSSL `enc` compatible derivation

pub mod evpkdf;
pub mod openssl;
pub mod split;

pub use evpkdf::{evpkdf, EvpKdf};
pub use openssl::{random_salt, CipherParams, OpenSslKdf, Salt, SaltedBlob};
pub use split::{derive_key_and_iv, KeyIv};
