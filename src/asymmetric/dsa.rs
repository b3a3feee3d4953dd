// src/asymmetric/dsa.rs
//! DSA private key material

use crate::asymmetric::{AsymmetricKeyMaterial, NativeDsa};
use crate::bignum::optional_bignum_to_bytes;
use crate::byte_string::ByteString;
use crate::consts::DSA_PRIVATE_KEY_TYPE;
use crate::enums::KeyFamily;
use crate::error::DecodeError;
use crate::key_info;

/// DSA private key: domain parameters `p`, `q`, `g` and private value `x`
#[derive(Debug, Default)]
pub struct DsaPrivateKey {
    p: Option<ByteString>,
    q: Option<ByteString>,
    g: Option<ByteString>,
    x: Option<ByteString>,
    native: NativeDsa,
}

impl DsaPrivateKey {
    pub const TYPE: &'static str = DSA_PRIVATE_KEY_TYPE;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pkcs8(ber: &[u8]) -> Result<Self, DecodeError> {
        let native: NativeDsa = key_info::decode(ber)?;
        let mut key = Self::new();
        key.import_from_native(&native);
        Ok(key)
    }

    pub fn p(&self) -> Option<&ByteString> {
        self.p.as_ref()
    }

    pub fn q(&self) -> Option<&ByteString> {
        self.q.as_ref()
    }

    pub fn g(&self) -> Option<&ByteString> {
        self.g.as_ref()
    }

    pub fn x(&self) -> Option<&ByteString> {
        self.x.as_ref()
    }

    pub fn set_p(&mut self, p: ByteString) {
        self.native.p.set_from_bytes(&p);
        self.p = Some(p);
    }

    pub fn set_q(&mut self, q: ByteString) {
        self.native.q.set_from_bytes(&q);
        self.q = Some(q);
    }

    pub fn set_g(&mut self, g: ByteString) {
        self.native.g.set_from_bytes(&g);
        self.g = Some(g);
    }

    pub fn set_x(&mut self, x: ByteString) {
        self.native.priv_key.set_from_bytes(&x);
        self.x = Some(x);
    }

    pub fn import_from_native(&mut self, native: &NativeDsa) {
        if let Some(p) = optional_bignum_to_bytes(native.p()) {
            self.set_p(p);
        }
        if let Some(q) = optional_bignum_to_bytes(native.q()) {
            self.set_q(q);
        }
        if let Some(g) = optional_bignum_to_bytes(native.g()) {
            self.set_g(g);
        }
        if let Some(x) = optional_bignum_to_bytes(native.priv_key()) {
            self.set_x(x);
        }
    }

    pub fn native(&self) -> &NativeDsa {
        &self.native
    }
}

impl AsymmetricKeyMaterial for DsaPrivateKey {
    fn family(&self) -> KeyFamily {
        KeyFamily::Dsa
    }

    fn type_tag(&self) -> &'static str {
        Self::TYPE
    }

    fn bit_length(&self) -> usize {
        self.native.p().map_or(0, |p| p.bits())
    }

    fn pkcs8_encode(&self) -> ByteString {
        key_info::encode(&self.native)
    }

    fn pkcs8_decode(&mut self, ber: &[u8]) -> Result<(), DecodeError> {
        let native: NativeDsa = key_info::decode(ber)?;
        self.import_from_native(&native);
        Ok(())
    }
}
