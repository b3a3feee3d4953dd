// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the closed sets the rest of the crate dispatches on:
//! key families, operation states and cipher directions.

use der::asn1::ObjectIdentifier;
use serde::{Deserialize, Serialize};

use crate::consts::{OID_DH_KEY_AGREEMENT, OID_DSA};

/// Asymmetric key families this crate can model and encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum KeyFamily {
    Dh,
    Dsa,
}

impl KeyFamily {
    /// PKCS#8 algorithm identifier for this family
    pub fn oid(self) -> ObjectIdentifier {
        match self {
            KeyFamily::Dh => OID_DH_KEY_AGREEMENT,
            KeyFamily::Dsa => OID_DSA,
        }
    }

    pub fn from_oid(oid: ObjectIdentifier) -> Option<Self> {
        if oid == OID_DH_KEY_AGREEMENT {
            Some(KeyFamily::Dh)
        } else if oid == OID_DSA {
            Some(KeyFamily::Dsa)
        } else {
            None
        }
    }
}

/// Lifecycle state of a symmetric operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationState {
    #[default]
    Idle,
    Encrypting,
    Decrypting,
}

/// Direction handed to a cipher transform at init
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    pub(crate) fn active_state(self) -> OperationState {
        match self {
            Direction::Encrypt => OperationState::Encrypting,
            Direction::Decrypt => OperationState::Decrypting,
        }
    }
}
