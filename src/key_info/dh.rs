// src/key_info/dh.rs
use der::asn1::{AnyRef, UintRef};
use der::Sequence;
use num_bigint_dig::BigUint;

use super::{component, integer_der, integer_from_der, to_der_checked, KeyInfoNative};
use crate::asymmetric::NativeDh;
use crate::byte_string::ByteString;
use crate::enums::KeyFamily;
use crate::error::{DecodeError, EncodeError};

/// PKCS#3 `DHParameter`
#[derive(Sequence)]
struct DhParameter<'a> {
    prime: UintRef<'a>,
    base: UintRef<'a>,
    #[asn1(optional = "true")]
    private_value_length: Option<u32>,
}

impl KeyInfoNative for NativeDh {
    const FAMILY: KeyFamily = KeyFamily::Dh;

    fn encode_parameters(&self) -> Result<ByteString, EncodeError> {
        let p = component(&self.p, "p")?;
        let g = component(&self.g, "g")?;
        let parameters = DhParameter {
            prime: UintRef::new(p.as_slice())?,
            base: UintRef::new(g.as_slice())?,
            private_value_length: None,
        };
        to_der_checked(&parameters)
    }

    fn encode_private_value(&self) -> Result<ByteString, EncodeError> {
        integer_der(&component(&self.priv_key, "x")?)
    }

    fn from_key_info(parameters: AnyRef<'_>, private_key: &[u8]) -> Result<Self, DecodeError> {
        let parameters: DhParameter<'_> = parameters.decode_as()?;

        let mut native = NativeDh::new();
        native.set_p(BigUint::from_bytes_be(parameters.prime.as_bytes()));
        native.set_g(BigUint::from_bytes_be(parameters.base.as_bytes()));
        native.set_priv_key(integer_from_der(private_key)?);
        Ok(native)
    }

    fn holds_key(&self) -> bool {
        !self.is_empty()
    }
}
