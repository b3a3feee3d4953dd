// src/byte_string.rs
//! Owned byte buffer for key and data material
//!
//! Every growth that has to reallocate moves the content into a fresh
//! allocation and wipes the old one, so no copy of the content is left behind
//! in freed memory. Dropping a buffer wipes it.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::SliceIndex;

use rand::RngCore;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Resizable byte buffer with explicit destructive [`wipe`](ByteString::wipe)
#[derive(Default, Clone)]
pub struct ByteString {
    bytes: Vec<u8>,
}

impl ByteString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer of `len` zero bytes
    pub fn with_len(len: usize) -> Self {
        Self {
            bytes: vec![0u8; len],
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Parse a hex string; `None` if it is not valid hex
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        hex::decode(hex_str).ok().map(Self::from)
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Grow with zero bytes or shrink to `new_len`. Bytes cut off by
    /// shrinking are zeroed.
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= self.bytes.len() {
            self.bytes[new_len..].zeroize();
            self.bytes.truncate(new_len);
            return;
        }
        self.reserve_exact(new_len - self.bytes.len());
        self.bytes.resize(new_len, 0);
    }

    pub fn extend_from_slice(&mut self, data: &[u8]) {
        self.reserve_exact(data.len());
        self.bytes.extend_from_slice(data);
    }

    pub fn append(&mut self, other: &ByteString) {
        self.extend_from_slice(other.as_slice());
    }

    /// Overwrite with a random pattern, then zeroes, then truncate to empty.
    /// Safe to call any number of times.
    pub fn wipe(&mut self) {
        if !self.bytes.is_empty() {
            rand::rng().fill_bytes(&mut self.bytes);
        }
        // zeroes the whole capacity and clears the length
        self.bytes.zeroize();
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    fn reserve_exact(&mut self, additional: usize) {
        let needed = self.bytes.len() + additional;
        if needed <= self.bytes.capacity() {
            return;
        }
        let mut fresh = Vec::with_capacity(needed);
        fresh.extend_from_slice(&self.bytes);
        let mut old = std::mem::replace(&mut self.bytes, fresh);
        old.zeroize();
    }
}

// Equal lengths compare in constant time; a length difference is not secret
impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.bytes.as_slice().ct_eq(other.bytes.as_slice()))
    }
}

impl Eq for ByteString {}

impl Drop for ByteString {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl Zeroize for ByteString {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for ByteString {
    fn from(bytes: [u8; N]) -> Self {
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<I: SliceIndex<[u8]>> Index<I> for ByteString {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.bytes[index]
    }
}

impl<I: SliceIndex<[u8]>> IndexMut<I> for ByteString {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.bytes[index]
    }
}

// Never print content: these buffers hold key material
impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteString")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
