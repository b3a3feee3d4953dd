// src/config/mod.rs
//! Configuration system for token-crypto
//!
//! Central, lazy-loaded global config with TOML + env override of the path.

pub use app::{load, load_from_path, Config, KeySizes, SizeRange, Symmetric};

mod app;
mod defaults;
