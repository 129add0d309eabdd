use wordbridge::core::{
    encode_text_legacy, encode_text_legacy_bytes, encode_text_legacy_container,
    encode_text_native, preprocess_legacy_text, Latin1Encoder, TextEncoder, Utf8Encoder,
};

#[test]
fn test_ascii_encodes_identically_with_and_without_preprocessing() {
    for s in ["A", "hello world", "", "~!@#$%^&*()"] {
        let with = encode_text_legacy_container(&Utf8Encoder, s);
        let (words, len) = encode_text_legacy(&Utf8Encoder, s);
        assert_eq!(with.words(), words.as_slice(), "{s:?}");
        assert_eq!(with.sig_bytes(), len, "{s:?}");
    }
}

#[test]
fn test_single_ascii_char_container() {
    let wa = encode_text_legacy_container(&Utf8Encoder, "A");
    assert_eq!(wa.words(), &[0x4100_0000]);
    assert_eq!(wa.sig_bytes(), 1);
}

#[test]
fn test_non_ascii_is_double_encoded_through_utf8() {
    // the legacy text path reinterprets UTF-8 bytes as Latin-1 chars before encoding
    let wa = encode_text_legacy_container(&Utf8Encoder, "héllo");
    assert_eq!(wa.words(), &[0x68c3_83c2, 0xa96c_6c6f]);
    assert_eq!(wa.sig_bytes(), 8);
    assert_eq!(
        hex::encode(encode_text_legacy_bytes(&Utf8Encoder, "✓ à la mode")),
        "c3a2c29cc29320c383c2a0206c61206d6f6465"
    );
}

#[test]
fn test_native_output_skips_preprocessing() {
    let (words, len) = encode_text_native(&Utf8Encoder, "é");
    assert_eq!(len, 2);
    assert_eq!(words, vec![0x0000_a9c3]);
}

#[test]
fn test_latin1_encoder_truncates_code_points() {
    assert_eq!(Latin1Encoder.encode("Aé"), vec![0x41, 0xe9]);
    assert_eq!(Latin1Encoder.encode("€"), vec![0xac]);
}

#[test]
fn test_preprocessed_text_is_all_latin1() {
    let pre = preprocess_legacy_text("日本語");
    assert_eq!(pre.chars().count(), 9);
    assert!(pre.chars().all(|c| (c as u32) <= 0xff));
}

#[test]
fn test_custom_encoder_is_accepted() {
    struct Upper;
    impl TextEncoder for Upper {
        fn encode(&self, s: &str) -> Vec<u8> {
            s.to_ascii_uppercase().into_bytes()
        }
    }
    let (words, len) = encode_text_native(&Upper, "abcd");
    assert_eq!(len, 4);
    assert_eq!(words, vec![0x4443_4241]);
}
