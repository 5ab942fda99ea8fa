use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in salt.
#[derive(Debug, Error)]
pub enum SaltError {
    // --- Credential errors ---
    #[error("Password is {len} bytes — password-only mode allows at most {max}")]
    PasswordTooLong { len: usize, max: usize },

    #[error("Password-only mode requires an ASCII password")]
    PasswordNotAscii,

    // --- Envelope errors ---
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Integrity check failed — wrong key, password or salt, or the file was modified")]
    IntegrityFailure,

    #[error("Key must be exactly {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    // --- Crypto errors ---
    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    // --- Config errors ---
    #[error("Password-only mode is disabled (set `allow_password_only = true` in .salt.toml)")]
    PasswordOnlyDisabled,

    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for salt results.
pub type Result<T> = std::result::Result<T, SaltError>;
