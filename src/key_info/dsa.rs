// src/key_info/dsa.rs
use der::asn1::{AnyRef, UintRef};
use der::Sequence;
use num_bigint_dig::BigUint;

use super::{component, integer_der, integer_from_der, to_der_checked, KeyInfoNative};
use crate::asymmetric::NativeDsa;
use crate::byte_string::ByteString;
use crate::enums::KeyFamily;
use crate::error::{DecodeError, EncodeError};

/// RFC 3279 `Dss-Parms`
#[derive(Sequence)]
struct DssParms<'a> {
    p: UintRef<'a>,
    q: UintRef<'a>,
    g: UintRef<'a>,
}

impl KeyInfoNative for NativeDsa {
    const FAMILY: KeyFamily = KeyFamily::Dsa;

    fn encode_parameters(&self) -> Result<ByteString, EncodeError> {
        let p = component(&self.p, "p")?;
        let q = component(&self.q, "q")?;
        let g = component(&self.g, "g")?;
        let parameters = DssParms {
            p: UintRef::new(p.as_slice())?,
            q: UintRef::new(q.as_slice())?,
            g: UintRef::new(g.as_slice())?,
        };
        to_der_checked(&parameters)
    }

    fn encode_private_value(&self) -> Result<ByteString, EncodeError> {
        integer_der(&component(&self.priv_key, "x")?)
    }

    fn from_key_info(parameters: AnyRef<'_>, private_key: &[u8]) -> Result<Self, DecodeError> {
        let parameters: DssParms<'_> = parameters.decode_as()?;

        let mut native = NativeDsa::new();
        native.set_p(BigUint::from_bytes_be(parameters.p.as_bytes()));
        native.set_q(BigUint::from_bytes_be(parameters.q.as_bytes()));
        native.set_g(BigUint::from_bytes_be(parameters.g.as_bytes()));
        native.set_priv_key(integer_from_der(private_key)?);
        Ok(native)
    }

    fn holds_key(&self) -> bool {
        !self.is_empty()
    }
}
