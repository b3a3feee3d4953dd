// src/asymmetric/native.rs
//! Backend-native key handles
//!
//! These are the engine-side mirrors of the key material models. Each field
//! is a [`SecureBigNum`] slot, so dropping a handle zeroises every value it
//! holds.

use num_bigint_dig::BigUint;

use crate::bignum::SecureBigNum;

/// Native Diffie-Hellman private key
#[derive(Debug, Default)]
pub struct NativeDh {
    pub(crate) p: SecureBigNum,
    pub(crate) g: SecureBigNum,
    pub(crate) priv_key: SecureBigNum,
}

impl NativeDh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn p(&self) -> Option<&BigUint> {
        self.p.get()
    }

    pub fn g(&self) -> Option<&BigUint> {
        self.g.get()
    }

    pub fn priv_key(&self) -> Option<&BigUint> {
        self.priv_key.get()
    }

    pub fn set_p(&mut self, p: BigUint) {
        self.p.replace(p);
    }

    pub fn set_g(&mut self, g: BigUint) {
        self.g.replace(g);
    }

    pub fn set_priv_key(&mut self, x: BigUint) {
        self.priv_key.replace(x);
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        !(self.p.is_set() || self.g.is_set() || self.priv_key.is_set())
    }
}

/// Native DSA private key
#[derive(Debug, Default)]
pub struct NativeDsa {
    pub(crate) p: SecureBigNum,
    pub(crate) q: SecureBigNum,
    pub(crate) g: SecureBigNum,
    pub(crate) priv_key: SecureBigNum,
}

impl NativeDsa {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn p(&self) -> Option<&BigUint> {
        self.p.get()
    }

    pub fn q(&self) -> Option<&BigUint> {
        self.q.get()
    }

    pub fn g(&self) -> Option<&BigUint> {
        self.g.get()
    }

    pub fn priv_key(&self) -> Option<&BigUint> {
        self.priv_key.get()
    }

    pub fn set_p(&mut self, p: BigUint) {
        self.p.replace(p);
    }

    pub fn set_q(&mut self, q: BigUint) {
        self.q.replace(q);
    }

    pub fn set_g(&mut self, g: BigUint) {
        self.g.replace(g);
    }

    pub fn set_priv_key(&mut self, x: BigUint) {
        self.priv_key.replace(x);
    }

    pub fn is_empty(&self) -> bool {
        !(self.p.is_set() || self.q.is_set() || self.g.is_set() || self.priv_key.is_set())
    }
}
