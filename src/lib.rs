// src/lib.rs
//! token-crypto: cryptographic algorithm core of a software security token
//!
//! Features:
//! - Wipeable byte buffers for all key and data material
//! - DH and DSA private key material mirrored into native big integers
//! - PKCS#8 PrivateKeyInfo encoding and decoding
//! - Sequencing state machine for symmetric cipher operations
//! - Symmetric key generation through a pluggable RNG provider

pub mod asymmetric;
pub mod bignum;
pub mod byte_string;
pub mod config;
pub mod consts;
pub mod enums;
pub mod error;
pub mod key_info;
pub mod key_ops;
pub mod rng;
pub mod symmetric;

// Re-export everything users need at the crate root
pub use asymmetric::{
    AsymmetricAlgorithm, AsymmetricKeyMaterial, DhAlgorithm, DhPrivateKey, DsaAlgorithm,
    DsaPrivateKey, PrivateKeyMaterial,
};
pub use bignum::{bignum_to_bytes, bytes_to_bignum};
pub use byte_string::ByteString;
pub use config::load as load_config;
pub use enums::{Direction, KeyFamily, OperationState};
pub use error::{CryptoError, DecodeError, EncodeError};
pub use key_ops::{generate_key, reconstruct_key, recycle_key};
pub use rng::{OsRandom, RandomSource};
pub use symmetric::{CipherMode, SymmetricAlgorithm, SymmetricKey};
