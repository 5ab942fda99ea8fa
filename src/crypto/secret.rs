//! Fixed-size secret buffers that wipe themselves on drop.
//!
//! `KeyMaterial` and `Salt` never print their contents through `Debug`, so
//! an accidental `{:?}` in a log line cannot leak them.

use std::fmt;

use zeroize::{Zeroize, Zeroizing};

use super::codec;
use super::{KEY_SIZE, SALT_SIZE};
use crate::errors::{Result, SaltError};

/// A 32-byte symmetric key, zeroed when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct KeyMaterial {
    bytes: [u8; KEY_SIZE],
}

impl KeyMaterial {
    /// Take ownership of raw key bytes.
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Build a key from a slice, failing unless it is exactly `KEY_SIZE` long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| SaltError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self { bytes })
    }

    /// Parse a key previously displayed with [`KeyMaterial::to_base64`].
    pub fn from_base64(text: &str) -> Result<Self> {
        let decoded = Zeroizing::new(codec::decode(text)?);
        if decoded.len() != KEY_SIZE {
            return Err(SaltError::MalformedInput(format!(
                "key must decode to {KEY_SIZE} bytes, got {}",
                decoded.len()
            )));
        }
        Self::from_slice(&decoded)
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }

    /// Render the key for the user to write down.
    pub fn to_base64(&self) -> Zeroizing<String> {
        Zeroizing::new(codec::encode(&self.bytes))
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial([REDACTED])")
    }
}

/// A 16-byte Argon2 salt, zeroed when dropped.
///
/// The salt is not secret in the cryptographic sense, but the tool hands it
/// to the user as the second half of the decryption credential, so it gets
/// the same treatment as a key.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Salt {
    bytes: [u8; SALT_SIZE],
}

impl Salt {
    pub fn new(bytes: [u8; SALT_SIZE]) -> Self {
        Self { bytes }
    }

    /// Parse a salt previously displayed with [`Salt::to_base64`].
    pub fn from_base64(text: &str) -> Result<Self> {
        let decoded = Zeroizing::new(codec::decode(text)?);
        let bytes: [u8; SALT_SIZE] = decoded.as_slice().try_into().map_err(|_| {
            SaltError::MalformedInput(format!(
                "salt must decode to {SALT_SIZE} bytes, got {}",
                decoded.len()
            ))
        })?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8; SALT_SIZE] {
        &self.bytes
    }

    pub fn to_base64(&self) -> Zeroizing<String> {
        Zeroizing::new(codec::encode(&self.bytes))
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Salt([REDACTED])")
    }
}
