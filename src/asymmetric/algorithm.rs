// src/asymmetric/algorithm.rs
//! Per-family algorithm objects: key size limits and private key factories

use crate::asymmetric::{AsymmetricKeyMaterial, DhPrivateKey, DsaPrivateKey};
use crate::config::{self, SizeRange};
use crate::enums::KeyFamily;
use crate::error::DecodeError;

/// Key factory side of an asymmetric algorithm
pub trait AsymmetricAlgorithm {
    type PrivateKey: AsymmetricKeyMaterial + Default;

    fn family(&self) -> KeyFamily;

    fn key_sizes(&self) -> SizeRange;

    fn min_key_size(&self) -> usize {
        self.key_sizes().min_bits
    }

    fn max_key_size(&self) -> usize {
        self.key_sizes().max_bits
    }

    /// Whether `bits` lies within the supported prime sizes
    fn check_key_size(&self, bits: usize) -> bool {
        self.key_sizes().contains(bits)
    }

    fn new_private_key(&self) -> Self::PrivateKey {
        Self::PrivateKey::default()
    }

    /// Rebuild a private key from its PKCS#8 form
    fn reconstruct_private_key(&self, serialised: &[u8]) -> Result<Self::PrivateKey, DecodeError> {
        let mut key = self.new_private_key();
        key.pkcs8_decode(serialised)?;
        Ok(key)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DhAlgorithm {
    sizes: SizeRange,
}

impl DhAlgorithm {
    /// Algorithm with the configured DH size limits
    pub fn new() -> Self {
        Self::with_sizes(config::load().key_sizes.dh)
    }

    pub fn with_sizes(sizes: SizeRange) -> Self {
        Self { sizes }
    }
}

impl Default for DhAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl AsymmetricAlgorithm for DhAlgorithm {
    type PrivateKey = DhPrivateKey;

    fn family(&self) -> KeyFamily {
        KeyFamily::Dh
    }

    fn key_sizes(&self) -> SizeRange {
        self.sizes
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DsaAlgorithm {
    sizes: SizeRange,
}

impl DsaAlgorithm {
    /// Algorithm with the configured DSA size limits
    pub fn new() -> Self {
        Self::with_sizes(config::load().key_sizes.dsa)
    }

    pub fn with_sizes(sizes: SizeRange) -> Self {
        Self { sizes }
    }
}

impl Default for DsaAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl AsymmetricAlgorithm for DsaAlgorithm {
    type PrivateKey = DsaPrivateKey;

    fn family(&self) -> KeyFamily {
        KeyFamily::Dsa
    }

    fn key_sizes(&self) -> SizeRange {
        self.sizes
    }
}
