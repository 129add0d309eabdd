use wordbridge::core::concat;
use wordbridge::enums::HashAlgorithm;
use wordbridge::kdf::{derive_key_and_iv, evpkdf, EvpKdf, KeyIv, OpenSslKdf};

use crate::common;

fn md5(data: &[u8]) -> Vec<u8> {
    HashAlgorithm::Md5.digest(data)
}

#[test]
fn test_evpkdf_is_deterministic() {
    common::setup();
    let a = evpkdf(md5, 7, 64, b"secret", b"12345678");
    let b = evpkdf(md5, 7, 64, b"secret", b"12345678");
    assert_eq!(a, b);
}

#[test]
fn test_evpkdf_length_contract() {
    for blocks in 0..6 {
        let len = blocks * 16;
        assert_eq!(evpkdf(md5, 2, len, b"pw", b"salt").len(), len);
    }
}

#[test]
fn test_evpkdf_prefix_stability() {
    let long = evpkdf(md5, 1, 80, b"pw", b"salt");
    let short = evpkdf(md5, 1, 32, b"pw", b"salt");
    assert_eq!(&long[..32], short.as_slice());
}

#[test]
fn test_evpkdf_depends_on_salt_and_iterations() {
    let base = evpkdf(md5, 1, 16, b"pw", b"salt0000");
    assert_ne!(base, evpkdf(md5, 1, 16, b"pw", b"salt0001"));
    assert_ne!(base, evpkdf(md5, 2, 16, b"pw", b"salt0000"));
}

#[test]
fn test_salt_is_appended_after_secret() {
    // only the concatenation matters for the first block
    assert_eq!(
        evpkdf(md5, 1, 16, b"pass", b"word"),
        evpkdf(md5, 1, 16, b"password", b"")
    );
    assert_eq!(
        evpkdf(md5, 1, 16, b"pass", b"word"),
        md5(&concat(&[b"pass".as_slice(), b"word".as_slice()]))
    );
}

#[test]
fn test_key_and_iv_are_slices_of_one_derivation() {
    let salt = b"saltsalt";
    let full = evpkdf(md5, 1, 32, b"password", salt);
    let KeyIv { key, iv } = derive_key_and_iv(
        |n, secret| evpkdf(md5, 1, n, secret, salt),
        16,
        16,
        b"password",
    )
    .unwrap();
    assert_eq!(key, full[..16]);
    assert_eq!(iv, full[16..32]);
}

#[test]
fn test_checked_kdf_plugs_into_splitter() {
    let kdf = EvpKdf::new(HashAlgorithm::Sha1, 10).unwrap();
    let out = derive_key_and_iv(
        |n, secret| kdf.derive_unchecked(n, secret, b"NaCl"),
        20,
        20,
        b"pw",
    )
    .unwrap();
    let full = kdf.derive(40, b"pw", b"NaCl").unwrap();
    assert_eq!([out.key, out.iv].concat(), full);
}

#[test]
fn test_openssl_kdf_sha256_matches_openssl() {
    // openssl enc -aes-128-cbc -md sha256 -P -S a1b2c3d4e5f60718 -pass pass:'Secret Passphrase'
    let salt = hex::decode("a1b2c3d4e5f60718").unwrap();
    let params = OpenSslKdf::new(HashAlgorithm::Sha256, 1)
        .unwrap()
        .execute(b"Secret Passphrase", 16, 16, Some(salt.as_slice()))
        .unwrap();
    assert_eq!(
        hex::encode_upper(&params.key),
        "A73044E6DD25C888961D159F4508C2E5"
    );
    assert_eq!(
        hex::encode_upper(&params.iv),
        "8B1D440AC6179DE7BE9198CEE4A4248C"
    );
}
