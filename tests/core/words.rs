use wordbridge::core::{
    bytes_to_words, from_native, swap_word_endianness, swap_word_endianness_owned, to_native,
    words_to_bytes,
};

#[test]
fn test_double_swap_is_identity_for_many_lengths() {
    for len in 0..=33u8 {
        let bytes: Vec<u8> = (0..len).map(|b| b.wrapping_mul(37)).collect();
        let words = bytes_to_words(&bytes);
        assert_eq!(swap_word_endianness(&swap_word_endianness(&words)), words);
    }
}

#[test]
fn test_bytes_to_words_then_back_pads_to_word_boundary() {
    let bytes = b"seven!!";
    let round = words_to_bytes(&bytes_to_words(bytes));
    assert_eq!(round.len(), 8);
    assert_eq!(&round[..7], bytes);
    assert_eq!(round[7], 0);
}

#[test]
fn test_owned_swap_matches_borrowed_swap() {
    let words = vec![0x0102_0304, 0xa0b0_c0d0, 0];
    assert_eq!(
        swap_word_endianness_owned(words.clone()),
        swap_word_endianness(&words)
    );
}

#[test]
fn test_native_legacy_round_trip_keeps_words() {
    let legacy = from_native(&bytes_to_words(b"round trip"));
    assert_eq!(from_native(&to_native(&legacy)).words(), legacy.words());
}
