// src/asymmetric/mod.rs
//! Asymmetric key material
//!
//! Each family (DH, DSA) holds its components as [`ByteString`]s mirrored
//! into an exclusively owned native handle. [`PrivateKeyMaterial`] is the
//! closed set callers dispatch on when the family is only known at runtime.

mod algorithm;
mod dh;
mod dsa;
mod native;

pub use algorithm::{AsymmetricAlgorithm, DhAlgorithm, DsaAlgorithm};
pub use dh::DhPrivateKey;
pub use dsa::DsaPrivateKey;
pub use native::{NativeDh, NativeDsa};

use crate::byte_string::ByteString;
use crate::enums::KeyFamily;
use crate::error::DecodeError;
use crate::key_info;

/// Capabilities shared by every asymmetric key material model
pub trait AsymmetricKeyMaterial {
    fn family(&self) -> KeyFamily;

    /// Constant identifying the concrete key type
    fn type_tag(&self) -> &'static str;

    fn is_of_type(&self, tag: &str) -> bool {
        self.type_tag() == tag
    }

    /// Size of the domain prime in bits, 0 when unset
    fn bit_length(&self) -> usize;

    /// PKCS#8 PrivateKeyInfo; empty on failure
    fn pkcs8_encode(&self) -> ByteString;

    /// Replace present components from a PKCS#8 PrivateKeyInfo. Nothing is
    /// changed when decoding fails.
    fn pkcs8_decode(&mut self, ber: &[u8]) -> Result<(), DecodeError>;
}

#[derive(Debug)]
#[non_exhaustive]
pub enum PrivateKeyMaterial {
    Dh(DhPrivateKey),
    Dsa(DsaPrivateKey),
}

impl PrivateKeyMaterial {
    /// Decode a PKCS#8 structure of any supported family
    pub fn from_pkcs8(ber: &[u8]) -> Result<Self, DecodeError> {
        match key_info::detect_family(ber)? {
            KeyFamily::Dh => DhPrivateKey::from_pkcs8(ber).map(PrivateKeyMaterial::Dh),
            KeyFamily::Dsa => DsaPrivateKey::from_pkcs8(ber).map(PrivateKeyMaterial::Dsa),
        }
    }

    fn inner(&self) -> &dyn AsymmetricKeyMaterial {
        match self {
            PrivateKeyMaterial::Dh(key) => key,
            PrivateKeyMaterial::Dsa(key) => key,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn AsymmetricKeyMaterial {
        match self {
            PrivateKeyMaterial::Dh(key) => key,
            PrivateKeyMaterial::Dsa(key) => key,
        }
    }
}

impl AsymmetricKeyMaterial for PrivateKeyMaterial {
    fn family(&self) -> KeyFamily {
        self.inner().family()
    }

    fn type_tag(&self) -> &'static str {
        self.inner().type_tag()
    }

    fn bit_length(&self) -> usize {
        self.inner().bit_length()
    }

    fn pkcs8_encode(&self) -> ByteString {
        self.inner().pkcs8_encode()
    }

    fn pkcs8_decode(&mut self, ber: &[u8]) -> Result<(), DecodeError> {
        self.inner_mut().pkcs8_decode(ber)
    }
}

impl From<DhPrivateKey> for PrivateKeyMaterial {
    fn from(key: DhPrivateKey) -> Self {
        PrivateKeyMaterial::Dh(key)
    }
}

impl From<DsaPrivateKey> for PrivateKeyMaterial {
    fn from(key: DsaPrivateKey) -> Self {
        PrivateKeyMaterial::Dsa(key)
    }
}
