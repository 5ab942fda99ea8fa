//! Cryptographic primitives for salt.
//!
//! This module provides:
//! - Base64 text encoding of envelopes and secrets (`codec`)
//! - AES-256-GCM sealing and opening (`encryption`)
//! - The three key provisioning strategies (`kdf`)
//! - Zeroize-on-drop holders for key material and salts (`secret`)
//!
//! Sizes and KDF costs are fixed here at build time.  Changing any of them
//! makes previously encrypted files unreadable.

pub mod codec;
pub mod encryption;
pub mod kdf;
pub mod secret;

/// Length of an AES-256 key in bytes.
pub const KEY_SIZE: usize = 32;

/// Length of the AES-GCM nonce in bytes.
pub const NONCE_SIZE: usize = 12;

/// Length of the AES-GCM authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// Length of the Argon2 salt in bytes.
pub const SALT_SIZE: usize = 16;

/// Argon2id memory cost in KiB (64 MB).
pub const KDF_MEMORY_KIB: u32 = 65_536;

/// Argon2id pass count.
pub const KDF_ITERATIONS: u32 = 3;

/// Argon2id lanes.
pub const KDF_PARALLELISM: u32 = 4;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, random_key, ...};
pub use codec::{decode, encode};
pub use encryption::{open, seal};
pub use kdf::{derive_password_salt, generate_salt, password_only_key, random_key, KeyStrategy};
pub use secret::{KeyMaterial, Salt};
