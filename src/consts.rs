// src/consts.rs
//! Shared constants: algorithm identifiers, type tags and size defaults

use der::asn1::ObjectIdentifier;

/// PKCS#3 `dhKeyAgreement`
pub const OID_DH_KEY_AGREEMENT: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.3.1");

/// FIPS 186 `id-dsa`
pub const OID_DSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10040.4.1");

/// Type tag of [`crate::asymmetric::DhPrivateKey`]
pub const DH_PRIVATE_KEY_TYPE: &str = "DH Private Key";

/// Type tag of [`crate::asymmetric::DsaPrivateKey`]
pub const DSA_PRIVATE_KEY_TYPE: &str = "DSA Private Key";

/// Mode used by the `*_init_default` entry points when no config overrides it
pub const DEFAULT_CIPHER_MODE: &str = "CBC";

/// DH prime sizes in bits
pub const DH_MIN_KEY_BITS: usize = 512;
pub const DH_MAX_KEY_BITS: usize = 10_000;

/// DSA prime sizes in bits
pub const DSA_MIN_KEY_BITS: usize = 512;
pub const DSA_MAX_KEY_BITS: usize = 3_072;

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "TOKEN_CRYPTO_CONFIG";

/// Config file looked up when the environment variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "token-crypto.toml";
