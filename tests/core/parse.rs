use wordbridge::core::{
    bytes_to_words, parse_base64, parse_base64_container, parse_hex, parse_hex_container,
};

#[test]
fn test_parse_hex_single_zero_byte() {
    assert_eq!(parse_hex("00"), vec![0]);
}

#[test]
fn test_parse_hex_swaps_to_native() {
    assert_eq!(parse_hex("ff000000"), vec![0x0000_00ff]);
}

#[test]
fn test_parse_hex_agrees_with_strict_decoder_on_valid_input() {
    for s in ["", "00", "0a0b0c", "DEADbeefCAFE", "000102030405060708090a0b0c0d0e0f10"] {
        let bytes = hex::decode(s).unwrap();
        assert_eq!(parse_hex(s), bytes_to_words(&bytes), "{s:?}");
        assert_eq!(parse_hex_container(s).to_bytes(), bytes, "{s:?}");
    }
}

#[test]
fn test_parse_hex_is_permissive() {
    assert_eq!(parse_hex_container("zz1g").to_bytes(), vec![0x00, 0x01]);
}

#[test]
fn test_parse_hex_pairs_with_space_or_sign_decode_as_zero() {
    assert_eq!(parse_hex_container(" f").to_bytes(), vec![0x00]);
    assert_eq!(parse_hex_container("-1").to_bytes(), vec![0x00]);
    assert_eq!(parse_hex_container("+f0f").to_bytes(), vec![0x00, 0x0f]);
}

#[test]
fn test_parse_base64_single_padded_zero() {
    assert_eq!(parse_base64("AA=="), vec![0]);
    assert_eq!(parse_base64_container("AA==").sig_bytes(), 1);
}

#[test]
fn test_parse_base64_agrees_with_standard_engine_on_valid_input() {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    for s in ["", "Zg==", "Zm8=", "Zm9v", "SGVsbG8gV29ybGQh", "3q2+78o=", "/+/+"] {
        let bytes = STANDARD.decode(s).unwrap();
        assert_eq!(parse_base64(s), bytes_to_words(&bytes), "{s:?}");
        assert_eq!(parse_base64_container(s).to_bytes(), bytes, "{s:?}");
    }
}

#[test]
fn test_parse_base64_unpadded_tail() {
    // no padding: the trailing partial group still yields its whole bytes
    assert_eq!(parse_base64_container("Zm9vYg").to_bytes(), b"foob");
}

#[test]
fn test_parse_base64_ignores_everything_after_first_padding() {
    assert_eq!(parse_base64_container("Zg==Zm9v").to_bytes(), b"f");
}
