// src/config/defaults.rs
use crate::config::app::{KeySizes, SizeRange, Symmetric};
use crate::consts::{
    DEFAULT_CIPHER_MODE, DH_MAX_KEY_BITS, DH_MIN_KEY_BITS, DSA_MAX_KEY_BITS, DSA_MIN_KEY_BITS,
};

pub fn default_symmetric() -> Symmetric {
    Symmetric {
        default_mode: DEFAULT_CIPHER_MODE.into(),
        default_padding: true,
    }
}

pub fn default_key_sizes() -> KeySizes {
    KeySizes {
        dh: default_dh_sizes(),
        dsa: default_dsa_sizes(),
    }
}

pub fn default_dh_sizes() -> SizeRange {
    SizeRange {
        min_bits: DH_MIN_KEY_BITS,
        max_bits: DH_MAX_KEY_BITS,
    }
}

pub fn default_dsa_sizes() -> SizeRange {
    SizeRange {
        min_bits: DSA_MIN_KEY_BITS,
        max_bits: DSA_MAX_KEY_BITS,
    }
}
