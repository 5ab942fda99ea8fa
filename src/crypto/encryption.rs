//! AES-256-GCM authenticated encryption.
//!
//! Each call to `seal` generates a fresh random 12-byte nonce and
//! prepends it to the ciphertext.  `open` splits the nonce back out and
//! verifies the tag before any plaintext is returned.
//!
//! Layout of a sealed envelope:
//!   [ 12-byte nonce | ciphertext | 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use super::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::errors::{Result, SaltError};

fn cipher_for(key: &[u8]) -> Result<Aes256Gcm> {
    if key.len() != KEY_SIZE {
        return Err(SaltError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: key.len(),
        });
    }
    Aes256Gcm::new_from_slice(key).map_err(|_| SaltError::InvalidKeyLength {
        expected: KEY_SIZE,
        actual: key.len(),
    })
}

/// Encrypt `plaintext` under a 32-byte `key`.
///
/// Returns `nonce || ciphertext || tag`.
pub fn seal(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = cipher_for(key)?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    // The aead crate appends the tag to the ciphertext.
    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| SaltError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut envelope = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    envelope.extend_from_slice(&nonce);
    envelope.extend_from_slice(&ciphertext);

    if envelope.len() != plaintext.len() + NONCE_SIZE + TAG_SIZE {
        return Err(SaltError::EncryptionFailed(format!(
            "unexpected envelope length {} for {} plaintext bytes",
            envelope.len(),
            plaintext.len()
        )));
    }

    Ok(envelope)
}

/// Decrypt an envelope produced by `seal`.
///
/// Fails with `IntegrityFailure` if the tag does not verify; no partial
/// plaintext is ever returned.
pub fn open(key: &[u8], envelope: &[u8]) -> Result<Vec<u8>> {
    let cipher = cipher_for(key)?;

    if envelope.len() < NONCE_SIZE + TAG_SIZE {
        return Err(SaltError::MalformedInput(format!(
            "envelope is {} bytes, shorter than the {} byte minimum",
            envelope.len(),
            NONCE_SIZE + TAG_SIZE
        )));
    }

    let (nonce_bytes, ciphertext) = envelope.split_at(NONCE_SIZE);
    let nonce = Nonce::from_slice(nonce_bytes);

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| SaltError::IntegrityFailure)
}
