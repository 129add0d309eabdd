// src/error.rs
//! Public error type for the entire crate
//!
//! The conversion layer and the permissive parsers never fail; only the
//! constructors that guard an invariant and the checked KDF wrappers do.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("significant byte count {sig_bytes} exceeds word capacity of {capacity} bytes")]
    SigBytesOutOfRange { sig_bytes: usize, capacity: usize },

    #[error("requested {output_len} bytes is not a multiple of the {block_len}-byte hash block")]
    MisalignedOutput { output_len: usize, block_len: usize },

    #[error("KDF iteration count must be at least 1")]
    ZeroIterations,

    #[error("KDF returned {actual} bytes, expected {expected}")]
    KdfOutputLength { expected: usize, actual: usize },

    #[error("OpenSSL salt must be 8 bytes, got {0}")]
    SaltLength(usize),

    #[error("unknown hash algorithm: {0}")]
    UnknownHash(String),

    #[error("invalid value {value:?} for {key}")]
    InvalidSetting { key: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
