//! Envelope operations: one encrypt and one decrypt per key strategy.
//!
//! Every operation runs the same pipeline: obtain the key, seal or open
//! with AES-256-GCM, then base64 encode or decode.  Keys and salts leave
//! this module only as base64 text inside `Zeroizing<String>`.

use std::fmt;

use tracing::{debug, instrument};
use zeroize::Zeroizing;

use crate::crypto::{self, KeyMaterial, KeyStrategy, Salt, KEY_SIZE};
use crate::errors::{Result, SaltError};

/// The result of an encryption.
pub struct Sealed {
    /// Base64 envelope to store in place of the plaintext.
    pub text: String,
    /// The key or salt the user must keep to decrypt, if the strategy has one.
    pub secret: Option<Zeroizing<String>>,
    /// Strategy that produced this envelope.
    pub strategy: KeyStrategy,
}

impl fmt::Debug for Sealed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sealed")
            .field("text_len", &self.text.len())
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("strategy", &self.strategy)
            .finish()
    }
}

/// Encrypt with a freshly generated random key.
///
/// The returned secret is the base64 key.
#[instrument(level = "debug", skip_all, fields(len = plaintext.len()))]
pub fn encrypt_with_random_key(plaintext: &[u8]) -> Result<Sealed> {
    let key = crypto::random_key();
    let text = seal_and_encode(&key, plaintext)?;

    Ok(Sealed {
        text,
        secret: Some(key.to_base64()),
        strategy: KeyStrategy::RandomKey,
    })
}

/// Encrypt with a key derived from `password` and a fresh random salt.
///
/// The returned secret is the base64 salt.
#[instrument(level = "debug", skip_all, fields(len = plaintext.len()))]
pub fn encrypt_with_password_salt(plaintext: &[u8], password: &str) -> Result<Sealed> {
    let salt = crypto::generate_salt();
    let key = crypto::derive_password_salt(password, &salt)?;
    let text = seal_and_encode(&key, plaintext)?;

    Ok(Sealed {
        text,
        secret: Some(salt.to_base64()),
        strategy: KeyStrategy::PasswordSalt,
    })
}

/// Encrypt with the zero-padded password as the key.
#[instrument(level = "debug", skip_all, fields(len = plaintext.len()))]
pub fn encrypt_with_password(plaintext: &[u8], password: &str) -> Result<Sealed> {
    debug!("password-only key: no salt, no stretching");
    let key = crypto::password_only_key(password)?;
    let text = seal_and_encode(&key, plaintext)?;

    Ok(Sealed {
        text,
        secret: None,
        strategy: KeyStrategy::PasswordOnly,
    })
}

/// Decrypt with a base64 key returned by [`encrypt_with_random_key`].
#[instrument(level = "debug", skip_all, fields(len = encoded.len()))]
pub fn decrypt_with_key(encoded: &str, key: &str) -> Result<Vec<u8>> {
    let key = KeyMaterial::from_base64(key)?;
    decode_and_open(&key, encoded)
}

/// Decrypt with the password and the base64 salt returned by
/// [`encrypt_with_password_salt`].
#[instrument(level = "debug", skip_all, fields(len = encoded.len()))]
pub fn decrypt_with_password_salt(encoded: &str, password: &str, salt: &str) -> Result<Vec<u8>> {
    let salt = Salt::from_base64(salt)?;
    // Reject a malformed envelope before paying for Argon2.
    let envelope = crypto::decode(encoded)?;
    let key = crypto::derive_password_salt(password, &salt)?;
    open_checked(&key, &envelope)
}

/// Decrypt a file produced by [`encrypt_with_password`].
#[instrument(level = "debug", skip_all, fields(len = encoded.len()))]
pub fn decrypt_with_password(encoded: &str, password: &str) -> Result<Vec<u8>> {
    debug!("password-only key: no salt, no stretching");
    let key = crypto::password_only_key(password)?;
    decode_and_open(&key, encoded)
}

/// Decrypt `encoded` with whichever strategy produced it.
///
/// `secret` is the key for `RandomKey` and the salt for `PasswordSalt`.
pub fn decrypt(
    strategy: KeyStrategy,
    encoded: &str,
    password: Option<&str>,
    secret: Option<&str>,
) -> Result<Vec<u8>> {
    match strategy {
        KeyStrategy::RandomKey => decrypt_with_key(encoded, required(secret, "key")?),
        KeyStrategy::PasswordSalt => decrypt_with_password_salt(
            encoded,
            required(password, "password")?,
            required(secret, "salt")?,
        ),
        KeyStrategy::PasswordOnly => decrypt_with_password(encoded, required(password, "password")?),
    }
}

/// Encrypt `plaintext` with the given strategy.
pub fn encrypt(strategy: KeyStrategy, plaintext: &[u8], password: Option<&str>) -> Result<Sealed> {
    match strategy {
        KeyStrategy::RandomKey => encrypt_with_random_key(plaintext),
        KeyStrategy::PasswordSalt => {
            encrypt_with_password_salt(plaintext, required(password, "password")?)
        }
        KeyStrategy::PasswordOnly => encrypt_with_password(plaintext, required(password, "password")?),
    }
}

fn required<'a>(value: Option<&'a str>, what: &str) -> Result<&'a str> {
    value.ok_or_else(|| SaltError::CommandFailed(format!("a {what} is required for this mode")))
}

fn ensure_key_size(key: &[u8]) -> Result<()> {
    let actual = key.len();
    if actual != KEY_SIZE {
        return Err(SaltError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual,
        });
    }
    Ok(())
}

fn seal_and_encode(key: &KeyMaterial, plaintext: &[u8]) -> Result<String> {
    let key: &[u8] = key.as_bytes();
    ensure_key_size(key)?;
    let envelope = crypto::seal(key, plaintext)?;
    debug!(envelope_len = envelope.len(), "sealed document");
    Ok(crypto::encode(&envelope))
}

fn decode_and_open(key: &KeyMaterial, encoded: &str) -> Result<Vec<u8>> {
    let envelope = crypto::decode(encoded)?;
    open_checked(key, &envelope)
}

fn open_checked(key: &KeyMaterial, envelope: &[u8]) -> Result<Vec<u8>> {
    let key: &[u8] = key.as_bytes();
    ensure_key_size(key)?;
    match crypto::open(key, envelope) {
        Ok(plaintext) => {
            debug!(plaintext_len = plaintext.len(), "opened envelope");
            Ok(plaintext)
        }
        Err(e) => {
            debug!(error = %e, "envelope rejected");
            Err(e)
        }
    }
}
