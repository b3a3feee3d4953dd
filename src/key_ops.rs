// src/key_ops.rs
//! Symmetric key factory
//!
//! Generation from an RNG provider, reconstruction from raw bytes and secure
//! recycling.

use crate::byte_string::ByteString;
use crate::error::{CryptoError, Result};
use crate::rng::RandomSource;
use crate::symmetric::SymmetricKey;

/// Fill `key` with `bit_len / 8` random bytes (rounded down)
pub fn generate_key(key: &mut SymmetricKey, rng: Option<&mut dyn RandomSource>) -> Result<()> {
    let rng = rng.ok_or(CryptoError::MissingRng)?;
    if key.bit_len() == 0 {
        return Err(CryptoError::ZeroBitLength);
    }

    let mut key_bits = ByteString::new();
    rng.generate_random(&mut key_bits, key.bit_len() / 8)?;
    key.set_key_bits(key_bits)?;

    tracing::debug!(bit_len = key.bit_len(), "generated symmetric key");
    Ok(())
}

/// Install serialised key bits as-is
pub fn reconstruct_key(key: &mut SymmetricKey, serialised: &ByteString) -> Result<()> {
    key.set_key_bits(serialised.clone())
}

/// Wipe the key bits, then free the key
pub fn recycle_key(mut key: SymmetricKey) {
    scrub(&mut key);
}

fn scrub(key: &mut SymmetricKey) {
    key.wipe();
    tracing::debug!(bit_len = key.bit_len(), "recycled symmetric key");
}
