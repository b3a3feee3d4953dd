// tests/asymmetric/codec.rs
use token_crypto::asymmetric::NativeDh;
use token_crypto::consts::OID_DH_KEY_AGREEMENT;
use token_crypto::error::{DecodeError, EncodeError};
use token_crypto::key_info;
use token_crypto::{
    AsymmetricKeyMaterial, ByteString, DhPrivateKey, DsaPrivateKey, KeyFamily, PrivateKeyMaterial,
};

use super::{full_dh_key, full_dsa_key};
use crate::support::hex_bytes;

/// DER body of the dhKeyAgreement OID
const DH_OID_DER: [u8; 9] = [0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x03, 0x01];

#[test]
fn test_dh_round_trip_restores_every_component() {
    crate::common::setup();
    let original = full_dh_key();

    let der = original.pkcs8_encode();
    assert!(!der.is_empty());

    let decoded = DhPrivateKey::from_pkcs8(der.as_slice()).unwrap();
    assert_eq!(decoded.p(), original.p());
    assert_eq!(decoded.g(), original.g());
    assert_eq!(decoded.x(), original.x());
    assert_eq!(decoded.bit_length(), 768);
}

#[test]
fn test_dsa_round_trip_restores_every_component() {
    let original = full_dsa_key();

    let der = original.pkcs8_encode();
    let decoded = DsaPrivateKey::from_pkcs8(der.as_slice()).unwrap();

    assert_eq!(decoded.p(), original.p());
    assert_eq!(decoded.q(), original.q());
    assert_eq!(decoded.g(), original.g());
    assert_eq!(decoded.x(), original.x());
}

#[test]
fn test_encoding_is_a_der_sequence_carrying_the_dh_oid() {
    let der = full_dh_key().pkcs8_encode();
    assert_eq!(der[0], 0x30);
    assert!(der
        .as_slice()
        .windows(DH_OID_DER.len())
        .any(|w| w == DH_OID_DER));
    assert_eq!(key_info::detect_family(der.as_slice()).unwrap(), KeyFamily::Dh);
}

#[test]
fn test_encode_without_native_key_returns_empty() {
    assert!(DhPrivateKey::new().pkcs8_encode().is_empty());
    assert!(DsaPrivateKey::new().pkcs8_encode().is_empty());
}

#[test]
fn test_encode_with_missing_private_value_returns_empty() {
    let mut key = DhPrivateKey::new();
    key.set_p(hex_bytes("f7"));
    key.set_g(hex_bytes("02"));
    assert!(key.pkcs8_encode().is_empty());

    let err = key_info::try_encode(key.native()).unwrap_err();
    assert!(matches!(err, EncodeError::MissingComponent("x")));
}

#[test]
fn test_try_encode_reports_missing_parameter() {
    let err = key_info::try_encode(&NativeDh::new()).unwrap_err();
    assert!(matches!(err, EncodeError::MissingComponent("p")));
}

#[test]
fn test_decode_empty_input_fails() {
    assert!(matches!(
        DhPrivateKey::from_pkcs8(&[]),
        Err(DecodeError::Empty)
    ));
}

#[test]
fn test_decode_malformed_input_fails() {
    assert!(matches!(
        DhPrivateKey::from_pkcs8(&[0x30, 0x03, 0x02, 0x01]),
        Err(DecodeError::Malformed(_))
    ));
    assert!(matches!(
        DhPrivateKey::from_pkcs8(b"definitely not DER"),
        Err(DecodeError::Malformed(_))
    ));
}

#[test]
fn test_decode_truncated_encoding_fails() {
    let der = full_dh_key().pkcs8_encode();
    let truncated = &der.as_slice()[..der.size() - 1];
    assert!(matches!(
        DhPrivateKey::from_pkcs8(truncated),
        Err(DecodeError::Malformed(_))
    ));
}

#[test]
fn test_decode_wrong_family_fails() {
    let dsa_der = full_dsa_key().pkcs8_encode();
    let err = DhPrivateKey::from_pkcs8(dsa_der.as_slice()).unwrap_err();
    match err {
        DecodeError::AlgorithmMismatch { expected, .. } => {
            assert_eq!(expected, OID_DH_KEY_AGREEMENT)
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_algorithm_is_rejected() {
    let mut der = full_dh_key().pkcs8_encode();
    let at = der
        .as_slice()
        .windows(DH_OID_DER.len())
        .position(|w| w == DH_OID_DER)
        .unwrap();
    // 1.2.840.113549.1.3.1 -> 1.2.840.113549.1.3.2
    der[at + DH_OID_DER.len() - 1] = 0x02;

    assert!(matches!(
        key_info::detect_family(der.as_slice()),
        Err(DecodeError::UnsupportedAlgorithm(_))
    ));
    assert!(matches!(
        PrivateKeyMaterial::from_pkcs8(der.as_slice()),
        Err(DecodeError::UnsupportedAlgorithm(_))
    ));
}

#[test]
fn test_failed_decode_leaves_existing_key_untouched() {
    let mut key = full_dh_key();
    let p_before = key.p().cloned();

    assert!(key.pkcs8_decode(&[0x30, 0x00]).is_err());
    assert_eq!(key.p().cloned(), p_before);
    assert!(!key.pkcs8_encode().is_empty());
}

#[test]
fn test_decode_into_existing_key_replaces_components() {
    let source = full_dh_key();
    let der = source.pkcs8_encode();

    let mut target = DhPrivateKey::new();
    target.set_p(ByteString::from_slice(&[0x17]));
    target.pkcs8_decode(der.as_slice()).unwrap();

    assert_eq!(target.p(), source.p());
    assert_eq!(target.x(), source.x());
}

#[test]
fn test_zero_generator_survives_round_trip() {
    let mut key = full_dh_key();
    key.set_g(ByteString::from_slice(&[0]));

    let decoded = DhPrivateKey::from_pkcs8(key.pkcs8_encode().as_slice()).unwrap();
    assert_eq!(decoded.g().unwrap().as_slice(), &[0]);
}

#[test]
fn test_private_key_material_dispatches_on_family() {
    let dh = PrivateKeyMaterial::from_pkcs8(full_dh_key().pkcs8_encode().as_slice()).unwrap();
    assert!(matches!(dh, PrivateKeyMaterial::Dh(_)));
    assert!(dh.is_of_type(DhPrivateKey::TYPE));

    let dsa = PrivateKeyMaterial::from_pkcs8(full_dsa_key().pkcs8_encode().as_slice()).unwrap();
    assert_eq!(dsa.family(), KeyFamily::Dsa);
    assert_eq!(dsa.bit_length(), 1024);

    // re-encoding through the variant gives the same bytes
    assert_eq!(dsa.pkcs8_encode(), full_dsa_key().pkcs8_encode());
}
