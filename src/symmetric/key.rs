// src/symmetric/key.rs
use std::fmt;

use crate::byte_string::ByteString;
use crate::error::{CryptoError, Result};

/// Symmetric key: a bit length plus the key bits
///
/// A bit length of zero means "unconstrained": any key bits are accepted.
/// Otherwise the key bits must be exactly `bit_len / 8` bytes (rounded down).
#[derive(Default)]
pub struct SymmetricKey {
    bit_len: usize,
    key_bits: ByteString,
}

impl SymmetricKey {
    pub fn new(bit_len: usize) -> Self {
        Self {
            bit_len,
            key_bits: ByteString::new(),
        }
    }

    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn set_bit_len(&mut self, bit_len: usize) {
        self.bit_len = bit_len;
    }

    pub fn key_bits(&self) -> &ByteString {
        &self.key_bits
    }

    pub fn set_key_bits(&mut self, key_bits: ByteString) -> Result<()> {
        let expected = self.bit_len / 8;
        if self.bit_len > 0 && key_bits.size() != expected {
            return Err(CryptoError::KeyLength {
                expected,
                actual: key_bits.size(),
            });
        }
        self.key_bits = key_bits;
        Ok(())
    }

    /// Destroy the key bits in place
    pub fn wipe(&mut self) {
        self.key_bits.wipe();
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("bit_len", &self.bit_len)
            .field("key_bits", &"[REDACTED]")
            .finish()
    }
}
