// src/symmetric/transform.rs
//! Seam between the operation gate and the engine doing the actual cipher work

use crate::byte_string::ByteString;
use crate::enums::Direction;
use crate::error::Result;
use crate::symmetric::{CipherMode, SymmetricKey};

/// Cipher engine driven by [`super::SymmetricAlgorithm`]
///
/// The algorithm only calls these methods in a valid sequence: one `begin`,
/// any number of `update`, then one `finish`. A failed `update` is followed
/// by `abort`, never by `finish`.
pub trait CipherTransform {
    fn begin(
        &mut self,
        direction: Direction,
        key: &SymmetricKey,
        mode: &CipherMode,
        iv: &ByteString,
        padding: bool,
    ) -> Result<()>;

    fn update(&mut self, input: &ByteString, output: &mut ByteString) -> Result<()>;

    fn finish(&mut self, output: &mut ByteString) -> Result<()>;

    /// Drop any per-operation state after a failure
    fn abort(&mut self) {}
}

/// Enforces sequencing only: accepts all data and emits nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct GateOnly;

impl CipherTransform for GateOnly {
    fn begin(
        &mut self,
        _direction: Direction,
        _key: &SymmetricKey,
        _mode: &CipherMode,
        _iv: &ByteString,
        _padding: bool,
    ) -> Result<()> {
        Ok(())
    }

    fn update(&mut self, _input: &ByteString, _output: &mut ByteString) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self, _output: &mut ByteString) -> Result<()> {
        Ok(())
    }
}
