// src/bignum.rs
//! Bridge between [`ByteString`] and the engine's native big integer
//!
//! The canonical byte form is big-endian, unsigned and minimal: no leading
//! zero byte, except that zero itself is the single byte `0x00`.

use num_bigint_dig::BigUint;
use zeroize::Zeroize;

use crate::byte_string::ByteString;

/// Native value of a canonical byte string. An empty buffer reads as zero.
pub fn bytes_to_bignum(bytes: &ByteString) -> BigUint {
    BigUint::from_bytes_be(bytes.as_slice())
}

/// Canonical byte form of a native value
pub fn bignum_to_bytes(value: &BigUint) -> ByteString {
    if value.bits() == 0 {
        return ByteString::from_slice(&[0]);
    }
    ByteString::from(value.to_bytes_be())
}

/// Absent native value → component not set
pub fn optional_bignum_to_bytes(value: Option<&BigUint>) -> Option<ByteString> {
    value.map(bignum_to_bytes)
}

/// Exclusively owned slot for one native big integer
///
/// Replacing or dropping the slot zeroises the previous value exactly once.
#[derive(Default)]
pub struct SecureBigNum {
    value: Option<BigUint>,
}

impl SecureBigNum {
    pub fn new(value: BigUint) -> Self {
        Self { value: Some(value) }
    }

    pub fn get(&self) -> Option<&BigUint> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Install `value`, clearing whatever was there before
    pub fn replace(&mut self, value: BigUint) {
        if let Some(mut old) = self.value.replace(value) {
            old.zeroize();
        }
    }

    /// Install the native form of a canonical byte string
    pub fn set_from_bytes(&mut self, bytes: &ByteString) {
        self.replace(bytes_to_bignum(bytes));
    }

    pub fn clear(&mut self) {
        if let Some(mut old) = self.value.take() {
            old.zeroize();
        }
    }

    pub fn to_bytes(&self) -> Option<ByteString> {
        optional_bignum_to_bytes(self.get())
    }
}

impl Drop for SecureBigNum {
    fn drop(&mut self) {
        self.clear();
    }
}

impl std::fmt::Debug for SecureBigNum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureBigNum")
            .field("set", &self.is_set())
            .finish()
    }
}
