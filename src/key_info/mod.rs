// src/key_info/mod.rs
//! PKCS#8 PrivateKeyInfo codec for native key handles
//!
//! The binary layout is produced and consumed by the `der`/`pkcs8` engine;
//! this module only orchestrates it. Every buffer holding key material is a
//! [`ByteString`] we allocate ourselves, so it is wiped on success and error
//! paths alike.

mod dh;
mod dsa;

use der::asn1::{AnyRef, UintRef};
use der::{Decode, Encode};
use pkcs8::{AlgorithmIdentifierRef, PrivateKeyInfo};

use crate::bignum::SecureBigNum;
use crate::byte_string::ByteString;
use crate::enums::KeyFamily;
use crate::error::{DecodeError, EncodeError};

/// Native handle that has a PKCS#8 representation
pub trait KeyInfoNative: Sized {
    const FAMILY: KeyFamily;

    /// DER of the AlgorithmIdentifier parameters
    fn encode_parameters(&self) -> Result<ByteString, EncodeError>;

    /// DER carried inside the `privateKey` OCTET STRING
    fn encode_private_value(&self) -> Result<ByteString, EncodeError>;

    fn from_key_info(parameters: AnyRef<'_>, private_key: &[u8]) -> Result<Self, DecodeError>;

    /// True when at least one component is set
    fn holds_key(&self) -> bool;
}

/// Encode a native handle. An empty buffer means failure.
pub fn encode<N: KeyInfoNative>(native: &N) -> ByteString {
    match try_encode(native) {
        Ok(der) => der,
        Err(error) => {
            tracing::warn!(family = ?N::FAMILY, %error, "PKCS#8 encoding failed");
            ByteString::new()
        }
    }
}

/// Encode a native handle, reporting why it failed
pub fn try_encode<N: KeyInfoNative>(native: &N) -> Result<ByteString, EncodeError> {
    let parameters = native.encode_parameters()?;
    let private_value = native.encode_private_value()?;

    let algorithm = AlgorithmIdentifierRef {
        oid: N::FAMILY.oid(),
        parameters: Some(AnyRef::from_der(parameters.as_slice())?),
    };
    let info = PrivateKeyInfo::new(algorithm, private_value.as_slice());
    to_der_checked(&info)
}

/// DER of `value` written into `out`, which is sized from the encoder's own
/// length report. On any failure, or when the bytes written disagree with
/// that report, `out` is wiped.
pub(crate) fn encode_checked<E: Encode>(
    value: &E,
    out: &mut ByteString,
) -> Result<(), EncodeError> {
    out.wipe();
    let expected = usize::try_from(value.encoded_len()?)?;
    out.resize(expected);

    let written = value
        .encode_to_slice(out.as_mut_slice())
        .map(|der| der.len());
    let written = match written {
        Ok(len) => len,
        Err(error_stack) => {
            out.wipe();
            tracing::error!(?error_stack);
            return Err(EncodeError::Der(error_stack));
        }
    };

    if written != expected {
        out.wipe();
        return Err(EncodeError::LengthMismatch {
            expected,
            actual: written,
        });
    }
    Ok(())
}

/// [`encode_checked`] into a fresh buffer
fn to_der_checked<E: Encode>(value: &E) -> Result<ByteString, EncodeError> {
    let mut der = ByteString::new();
    encode_checked(value, &mut der)?;
    Ok(der)
}

/// Decode a PKCS#8 structure into a native handle of family `N`
pub fn decode<N: KeyInfoNative>(ber: &[u8]) -> Result<N, DecodeError> {
    let info = parse(ber)?;

    let expected = N::FAMILY.oid();
    if info.algorithm.oid != expected {
        return Err(DecodeError::AlgorithmMismatch {
            expected,
            found: info.algorithm.oid,
        });
    }

    let parameters = info
        .algorithm
        .parameters
        .ok_or(DecodeError::MissingParameters)?;
    let native = N::from_key_info(parameters, info.private_key)?;
    if !native.holds_key() {
        return Err(DecodeError::NoKey);
    }
    Ok(native)
}

/// Family named by the algorithm identifier of a PKCS#8 structure
pub fn detect_family(ber: &[u8]) -> Result<KeyFamily, DecodeError> {
    let info = parse(ber)?;
    KeyFamily::from_oid(info.algorithm.oid)
        .ok_or(DecodeError::UnsupportedAlgorithm(info.algorithm.oid))
}

fn parse(ber: &[u8]) -> Result<PrivateKeyInfo<'_>, DecodeError> {
    if ber.is_empty() {
        return Err(DecodeError::Empty);
    }
    PrivateKeyInfo::from_der(ber).map_err(|error_stack| {
        tracing::warn!(%error_stack, "malformed PKCS#8 structure");
        DecodeError::Malformed(error_stack)
    })
}

/// Canonical bytes of a required component
fn component(slot: &SecureBigNum, name: &'static str) -> Result<ByteString, EncodeError> {
    slot.to_bytes().ok_or(EncodeError::MissingComponent(name))
}

/// DER INTEGER holding the canonical bytes
fn integer_der(bytes: &ByteString) -> Result<ByteString, EncodeError> {
    to_der_checked(&UintRef::new(bytes.as_slice())?)
}

/// Native value of a DER INTEGER
fn integer_from_der(der: &[u8]) -> Result<num_bigint_dig::BigUint, DecodeError> {
    let value = UintRef::from_der(der)?;
    Ok(num_bigint_dig::BigUint::from_bytes_be(value.as_bytes()))
}
