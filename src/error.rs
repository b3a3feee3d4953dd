// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

use crate::enums::OperationState;

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Failures of the symmetric state machine, the key factory and the RNG provider
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("no key supplied")]
    MissingKey,

    #[error("no random number generator supplied")]
    MissingRng,

    #[error("key bit length must be non-zero")]
    ZeroBitLength,

    #[error("key bits are {actual} bytes, expected {expected}")]
    KeyLength { expected: usize, actual: usize },

    #[error("operation requires state {expected:?}, current state is {actual:?}")]
    InvalidState {
        expected: OperationState,
        actual: OperationState,
    },

    #[error("random number generator failed: {0}")]
    Rng(String),

    #[error("cipher transform failed: {0}")]
    Transform(String),
}

/// Failures while producing a PKCS#8 key-info structure
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("key component `{0}` is not set")]
    MissingComponent(&'static str),

    #[error("DER encoding failed: {0}")]
    Der(#[from] der::Error),

    #[error("encoder reported {expected} bytes but produced {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Failures while reading a PKCS#8 key-info structure
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("input is empty")]
    Empty,

    #[error("malformed key-info structure: {0}")]
    Malformed(#[from] der::Error),

    #[error("unsupported key algorithm {0}")]
    UnsupportedAlgorithm(der::asn1::ObjectIdentifier),

    #[error("expected key algorithm {expected}, found {found}")]
    AlgorithmMismatch {
        expected: der::asn1::ObjectIdentifier,
        found: der::asn1::ObjectIdentifier,
    },

    #[error("algorithm parameters are missing")]
    MissingParameters,

    #[error("no key material could be recovered")]
    NoKey,
}

/// Failures while loading the TOML configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
