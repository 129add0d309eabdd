//! EVPKDF — OpenSSL's `EVP_BytesToKey` iterated-hash derivation
//!
//! ```text
//! D_0 = Hash^iterations(secret || salt)
//! D_i = Hash^iterations(D_(i-1) || secret || salt)
//! out = D_0 || D_1 || ...   (first `output_len` bytes)
//! ```
//!
//! This reproduces a known-weak legacy KDF for compatibility only.

use crate::consts::DEFAULT_KDF_ITERATIONS;
use crate::core::bytes::concat;
use crate::core::iterate::iterate_pow;
use crate::enums::HashAlgorithm;
use crate::error::{BridgeError, Result};

/// Copies as much of `block` as fits at `offset`, returning the count copied.
#[inline]
fn fill_from(out: &mut [u8], offset: usize, block: &[u8]) -> usize {
    let n = block.len().min(out.len() - offset);
    out[offset..offset + n].copy_from_slice(&block[..n]);
    n
}

/// Derives `output_len` bytes from `secret` and `salt`.
///
/// Precondition: `output_len` should be a multiple of the hash output size.
/// Nothing is validated; a misaligned request gets only the leading bytes
/// of the final block. A hash that yields an empty block stops derivation
/// and leaves the remaining output zeroed.
pub fn evpkdf<H>(
    hash: H,
    iterations: u32,
    output_len: usize,
    secret: &[u8],
    salt: &[u8],
) -> Vec<u8>
where
    H: Fn(&[u8]) -> Vec<u8>,
{
    let round = |material: Vec<u8>| hash(&material);
    let base = concat(&[secret, salt]);

    let mut derived = vec![0u8; output_len];
    let mut block = iterate_pow(&round, iterations, base.clone());
    let mut filled = fill_from(&mut derived, 0, &block);

    // previous block || secret || salt; the prefix is rewritten in place while block sizes agree
    let mut material = concat(&[block.as_slice(), base.as_slice()]);
    let mut prefix_len = block.len();

    while filled < output_len && !block.is_empty() {
        block = iterate_pow(&round, iterations, material.clone());
        filled += fill_from(&mut derived, filled, &block);

        if block.len() == prefix_len {
            material[..prefix_len].copy_from_slice(&block);
        } else {
            material = concat(&[block.as_slice(), base.as_slice()]);
            prefix_len = block.len();
        }
    }

    #[cfg(feature = "logging")]
    tracing::trace!(iterations, output_len, filled, "evpkdf derived");

    derived
}

/// EVPKDF bound to a digest and iteration count, with its preconditions checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvpKdf {
    hash: HashAlgorithm,
    iterations: u32,
}

impl Default for EvpKdf {
    fn default() -> Self {
        Self {
            hash: HashAlgorithm::Md5,
            iterations: DEFAULT_KDF_ITERATIONS,
        }
    }
}

impl EvpKdf {
    pub fn new(hash: HashAlgorithm, iterations: u32) -> Result<Self> {
        if iterations == 0 {
            return Err(BridgeError::ZeroIterations);
        }
        Ok(Self { hash, iterations })
    }

    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Derives `output_len` bytes, rejecting lengths that are not whole hash blocks.
    pub fn derive(&self, output_len: usize, secret: &[u8], salt: &[u8]) -> Result<Vec<u8>> {
        let block_len = self.hash.output_len();
        if output_len % block_len != 0 {
            return Err(BridgeError::MisalignedOutput {
                output_len,
                block_len,
            });
        }
        Ok(self.derive_unchecked(output_len, secret, salt))
    }

    /// Derives `output_len` bytes, truncating the last block when misaligned.
    pub fn derive_unchecked(&self, output_len: usize, secret: &[u8], salt: &[u8]) -> Vec<u8> {
        let hash = self.hash;

        #[cfg(feature = "logging")]
        tracing::debug!(%hash, iterations = self.iterations, output_len, "evpkdf");

        evpkdf(|m| hash.digest(m), self.iterations, output_len, secret, salt)
    }
}
