// src/symmetric/mod.rs
//! Symmetric keys and the operation state machine

mod algorithm;
mod key;
mod transform;

use std::fmt;

pub use algorithm::SymmetricAlgorithm;
pub use key::SymmetricKey;
pub use transform::{CipherTransform, GateOnly};

/// Cipher mode designator, lower-cased once at construction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CipherMode(String);

impl CipherMode {
    pub fn new(mode: &str) -> Self {
        Self(mode.to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw designator
    pub fn is(&self, mode: &str) -> bool {
        self.0.eq_ignore_ascii_case(mode)
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
