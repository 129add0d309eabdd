//! Permissive hex and base64 parsers with the legacy library's exact semantics
//!
//! Nothing here rejects input. Unknown symbols decode as zero and base64
//! stops at the first `=`; the goal is bit-for-bit parity with strings the
//! legacy library produced or accepted, not validation. Input is walked in
//! UTF-16 code units, as the legacy library indexes strings.

use once_cell::sync::Lazy;

use crate::core::container::LegacyWordArray;
use crate::core::words::swap_word_endianness_owned;

const BASE64_ALPHABET: &[u8; 65] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

/// Code unit → 6-bit value. Anything outside the alphabet maps to 0.
static BASE64_REVERSE: Lazy<[u8; 123]> = Lazy::new(|| {
    let mut map = [0u8; 123];
    for (value, &symbol) in BASE64_ALPHABET.iter().enumerate() {
        map[symbol as usize] = value as u8;
    }
    map
});

#[inline]
fn base64_value(unit: u16) -> u32 {
    BASE64_REVERSE.get(unit as usize).copied().unwrap_or(0) as u32
}

/// Value of the leading hex digits of a 1–2 unit group; 0 if it starts with a non-digit.
fn hex_group_value(group: &[u16]) -> u32 {
    let mut value = 0;
    for &unit in group {
        match char::from_u32(unit as u32).and_then(|c| c.to_digit(16)) {
            Some(digit) => value = value * 16 + digit,
            None => break,
        }
    }
    value
}

/// ORs `byte` into its slot of a big-endian word sequence.
#[inline]
fn place_be_byte(words: &mut Vec<u32>, index: usize, byte: u32) {
    let word = index / 4;
    if words.len() <= word {
        words.resize(word + 1, 0);
    }
    words[word] |= (byte & 0xff) << (24 - (index % 4) * 8);
}

/// Parses hex into a legacy container (big-endian words, exact byte count).
///
/// An odd trailing digit becomes a byte of its own value (`"f"` → `0x0f`).
/// Each pair keeps only its leading hex digits; a pair starting with
/// whitespace or a `+`/`-` sign decodes as 0, where the legacy library's
/// `parseInt` would skip the space or apply the sign.
pub fn parse_hex_container(hex: &str) -> LegacyWordArray {
    let units: Vec<u16> = hex.encode_utf16().collect();
    let mut words = Vec::with_capacity(units.len().div_ceil(8));
    let mut count = 0;
    for group in units.chunks(2) {
        place_be_byte(&mut words, count, hex_group_value(group));
        count += 1;
    }
    LegacyWordArray::from_raw(words, count)
}

/// Parses hex into native words.
pub fn parse_hex(hex: &str) -> Vec<u32> {
    let (words, _) = parse_hex_container(hex).into_parts();
    swap_word_endianness_owned(words)
}

/// Parses base64 into a legacy container (big-endian words, exact byte count).
pub fn parse_base64_container(b64: &str) -> LegacyWordArray {
    let units: Vec<u16> = b64.encode_utf16().collect();
    let len = units
        .iter()
        .position(|&u| u == u16::from(b'='))
        .unwrap_or(units.len());

    let mut words = Vec::with_capacity((len * 3 / 4).div_ceil(4));
    let mut count = 0;
    for i in 1..len {
        let phase = i % 4;
        if phase == 0 {
            continue;
        }
        let high = base64_value(units[i - 1]) << (phase * 2);
        let low = base64_value(units[i]) >> (6 - phase * 2);
        place_be_byte(&mut words, count, high | low);
        count += 1;
    }
    LegacyWordArray::from_raw(words, count)
}

/// Parses base64 into native words.
pub fn parse_base64(b64: &str) -> Vec<u32> {
    let (words, _) = parse_base64_container(b64).into_parts();
    swap_word_endianness_owned(words)
}
