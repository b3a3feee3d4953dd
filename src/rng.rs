// src/rng.rs
//! Random number provider seam
//!
//! The key factory draws all randomness through [`RandomSource`]. Providers
//! may block (waiting on entropy); callers own any timeout policy.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::byte_string::ByteString;
use crate::error::{CryptoError, Result};

/// Cryptographically secure byte source
pub trait RandomSource {
    /// Replace the contents of `out` with `len` random bytes
    fn generate_random(&mut self, out: &mut ByteString, len: usize) -> Result<()>;
}

/// Operating-system entropy
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn generate_random(&mut self, out: &mut ByteString, len: usize) -> Result<()> {
        out.wipe();
        out.resize(len);
        OsRng.try_fill_bytes(out.as_mut_slice()).map_err(|error| {
            out.wipe();
            CryptoError::Rng(error.to_string())
        })
    }
}
