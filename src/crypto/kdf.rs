//! Key provisioning strategies.
//!
//! Every strategy ends in a [`KeyMaterial`] of exactly `KEY_SIZE` bytes:
//!
//! - `RandomKey`: 32 bytes from the operating system CSPRNG.
//! - `PasswordSalt`: Argon2id over the password's UTF-8 bytes and a fresh
//!   16-byte salt, with the fixed costs from [`crate::crypto`].
//! - `PasswordOnly`: the ASCII password itself, right-padded with zero
//!   bytes.  No salt and no hashing, so it is far weaker than
//!   `PasswordSalt`.  It exists so files produced by this mode keep
//!   decrypting.

use std::fmt;

use aes_gcm::aead::{KeyInit, OsRng};
use aes_gcm::Aes256Gcm;
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;
use zeroize::Zeroize;

use super::secret::{KeyMaterial, Salt};
use super::{KDF_ITERATIONS, KDF_MEMORY_KIB, KDF_PARALLELISM, KEY_SIZE, SALT_SIZE};
use crate::errors::{Result, SaltError};

/// The three ways a key can be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStrategy {
    RandomKey,
    PasswordSalt,
    PasswordOnly,
}

impl KeyStrategy {
    /// Whether this strategy should carry a warning when used.
    pub fn is_weak(self) -> bool {
        matches!(self, KeyStrategy::PasswordOnly)
    }

    /// Name of the secret handed back to the user after encryption, if any.
    pub fn secret_label(self) -> Option<&'static str> {
        match self {
            KeyStrategy::RandomKey => Some("key"),
            KeyStrategy::PasswordSalt => Some("salt"),
            KeyStrategy::PasswordOnly => None,
        }
    }
}

impl fmt::Display for KeyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyStrategy::RandomKey => "random-key",
            KeyStrategy::PasswordSalt => "password-salt",
            KeyStrategy::PasswordOnly => "password-only",
        };
        f.write_str(name)
    }
}

/// Generate a fresh uniformly random key.
pub fn random_key() -> KeyMaterial {
    let mut generated = Aes256Gcm::generate_key(&mut OsRng);

    let mut bytes = [0u8; KEY_SIZE];
    bytes.copy_from_slice(&generated);
    generated.as_mut_slice().zeroize();

    let key = KeyMaterial::new(bytes);
    bytes.zeroize();
    key
}

/// Generate a cryptographically random salt.
pub fn generate_salt() -> Salt {
    let mut bytes = [0u8; SALT_SIZE];
    rand::rng().fill_bytes(&mut bytes);

    let salt = Salt::new(bytes);
    bytes.zeroize();
    salt
}

/// Derive a key from a password and salt using Argon2id.
///
/// The same password and salt always produce the same key.
pub fn derive_password_salt(password: &str, salt: &Salt) -> Result<KeyMaterial> {
    let params = Params::new(
        KDF_MEMORY_KIB,
        KDF_ITERATIONS,
        KDF_PARALLELISM,
        Some(KEY_SIZE),
    )
    .map_err(|e| SaltError::KeyDerivationFailed(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut bytes = [0u8; KEY_SIZE];
    let hashed = argon2.hash_password_into(password.as_bytes(), salt.as_bytes(), &mut bytes);
    if let Err(e) = hashed {
        bytes.zeroize();
        return Err(SaltError::KeyDerivationFailed(format!(
            "Argon2id hashing failed: {e}"
        )));
    }

    let key = KeyMaterial::new(bytes);
    bytes.zeroize();
    Ok(key)
}

/// Turn a password directly into a key by zero-padding it to `KEY_SIZE`.
///
/// Rejects non-ASCII passwords and passwords longer than `KEY_SIZE` bytes.
/// A password of exactly `KEY_SIZE` bytes is used unchanged.
pub fn password_only_key(password: &str) -> Result<KeyMaterial> {
    if !password.is_ascii() {
        return Err(SaltError::PasswordNotAscii);
    }

    let raw = password.as_bytes();
    if raw.len() > KEY_SIZE {
        return Err(SaltError::PasswordTooLong {
            len: raw.len(),
            max: KEY_SIZE,
        });
    }

    let mut bytes = [0u8; KEY_SIZE];
    bytes[..raw.len()].copy_from_slice(raw);

    let key = KeyMaterial::new(bytes);
    bytes.zeroize();
    Ok(key)
}
