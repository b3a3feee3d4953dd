// src/symmetric/algorithm.rs
//! Operation gate for symmetric ciphers
//!
//! `SymmetricAlgorithm` enforces `init → update* → final` per direction and
//! allows at most one open operation. The key is borrowed for the lifetime of
//! the operation, so it can not be recycled while bound.

use crate::byte_string::ByteString;
use crate::config;
use crate::enums::{Direction, OperationState};
use crate::error::{CryptoError, Result};
use crate::symmetric::{CipherMode, CipherTransform, GateOnly, SymmetricKey};

struct ActiveOperation<'k> {
    direction: Direction,
    key: &'k SymmetricKey,
    mode: CipherMode,
}

pub struct SymmetricAlgorithm<'k, T: CipherTransform = GateOnly> {
    transform: T,
    current: Option<ActiveOperation<'k>>,
}

impl<'k> SymmetricAlgorithm<'k, GateOnly> {
    pub fn new() -> Self {
        Self::with_transform(GateOnly)
    }
}

impl<'k> Default for SymmetricAlgorithm<'k, GateOnly> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'k, T: CipherTransform> SymmetricAlgorithm<'k, T> {
    pub fn with_transform(transform: T) -> Self {
        Self {
            transform,
            current: None,
        }
    }

    pub fn state(&self) -> OperationState {
        match &self.current {
            None => OperationState::Idle,
            Some(op) => op.direction.active_state(),
        }
    }

    /// Key bound by the open operation, if any
    pub fn current_key(&self) -> Option<&'k SymmetricKey> {
        self.current.as_ref().map(|op| op.key)
    }

    /// Canonical mode of the open operation, if any
    pub fn current_mode(&self) -> Option<&CipherMode> {
        self.current.as_ref().map(|op| &op.mode)
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    pub fn encrypt_init(
        &mut self,
        key: Option<&'k SymmetricKey>,
        mode: &str,
        iv: &ByteString,
        padding: bool,
    ) -> Result<()> {
        self.init(Direction::Encrypt, key, mode, iv, padding)
    }

    /// `encrypt_init` with the configured default mode and padding and no IV
    pub fn encrypt_init_default(&mut self, key: Option<&'k SymmetricKey>) -> Result<()> {
        let defaults = &config::load().symmetric;
        self.init(
            Direction::Encrypt,
            key,
            &defaults.default_mode,
            &ByteString::new(),
            defaults.default_padding,
        )
    }

    pub fn encrypt_update(&mut self, data: &ByteString) -> Result<ByteString> {
        self.update(Direction::Encrypt, data)
    }

    pub fn encrypt_final(&mut self) -> Result<ByteString> {
        self.finish(Direction::Encrypt)
    }

    pub fn decrypt_init(
        &mut self,
        key: Option<&'k SymmetricKey>,
        mode: &str,
        iv: &ByteString,
        padding: bool,
    ) -> Result<()> {
        self.init(Direction::Decrypt, key, mode, iv, padding)
    }

    /// `decrypt_init` with the configured default mode and padding and no IV
    pub fn decrypt_init_default(&mut self, key: Option<&'k SymmetricKey>) -> Result<()> {
        let defaults = &config::load().symmetric;
        self.init(
            Direction::Decrypt,
            key,
            &defaults.default_mode,
            &ByteString::new(),
            defaults.default_padding,
        )
    }

    pub fn decrypt_update(&mut self, data: &ByteString) -> Result<ByteString> {
        self.update(Direction::Decrypt, data)
    }

    pub fn decrypt_final(&mut self) -> Result<ByteString> {
        self.finish(Direction::Decrypt)
    }

    fn init(
        &mut self,
        direction: Direction,
        key: Option<&'k SymmetricKey>,
        mode: &str,
        iv: &ByteString,
        padding: bool,
    ) -> Result<()> {
        let key = key.ok_or(CryptoError::MissingKey)?;
        self.require(OperationState::Idle)?;

        let mode = CipherMode::new(mode);
        self.transform.begin(direction, key, &mode, iv, padding)?;

        tracing::debug!(?direction, %mode, "symmetric operation started");
        self.current = Some(ActiveOperation {
            direction,
            key,
            mode,
        });
        Ok(())
    }

    fn update(&mut self, direction: Direction, data: &ByteString) -> Result<ByteString> {
        self.require(direction.active_state())?;

        let mut output = ByteString::new();
        if let Err(error) = self.transform.update(data, &mut output) {
            output.wipe();
            self.transform.abort();
            self.current = None;
            tracing::warn!(?direction, %error, "symmetric operation aborted");
            return Err(error);
        }
        Ok(output)
    }

    fn finish(&mut self, direction: Direction) -> Result<ByteString> {
        self.require(direction.active_state())?;

        // back to Idle whatever the transform reports
        self.current = None;
        let mut output = ByteString::new();
        match self.transform.finish(&mut output) {
            Ok(()) => {
                tracing::debug!(?direction, "symmetric operation finished");
                Ok(output)
            }
            Err(error) => {
                output.wipe();
                tracing::warn!(?direction, %error, "symmetric operation failed at final");
                Err(error)
            }
        }
    }

    fn require(&self, expected: OperationState) -> Result<()> {
        let actual = self.state();
        if actual != expected {
            return Err(CryptoError::InvalidState { expected, actual });
        }
        Ok(())
    }
}
