//! Raw byte-buffer helpers: concatenation and zero padding

use crate::consts::WORD_BYTES;

/// Concatenates buffers of the same element type into one fresh buffer.
///
/// Homogeneity is enforced by the type system. An empty list yields an
/// empty buffer.
pub fn concat<T: Copy>(buffers: &[&[T]]) -> Vec<T> {
    let total = buffers.iter().map(|b| b.len()).sum();
    let mut out = Vec::with_capacity(total);
    for buf in buffers {
        out.extend_from_slice(buf);
    }
    out
}

/// Returns a copy of `buf` zero-padded up to the next multiple of `chunk_size`.
///
/// A buffer already on a chunk boundary is copied unchanged.
///
/// # Panics
/// If `chunk_size` is zero.
pub fn pad_to_chunk(buf: &[u8], chunk_size: usize) -> Vec<u8> {
    assert!(chunk_size > 0, "chunk size must be non-zero");
    let padded_len = buf.len().div_ceil(chunk_size) * chunk_size;
    let mut out = Vec::with_capacity(padded_len);
    out.extend_from_slice(buf);
    out.resize(padded_len, 0);
    out
}

/// [`pad_to_chunk`] with the 4-byte word size
#[inline]
pub fn pad_to_words(buf: &[u8]) -> Vec<u8> {
    pad_to_chunk(buf, WORD_BYTES)
}
