//! Text-safe encoding of binary envelopes.
//!
//! Uses the standard base64 alphabet with padding.  Decoding is strict:
//! whitespace, URL-safe characters and missing or extra padding are all
//! rejected rather than normalized.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::{Result, SaltError};

/// Encode raw bytes as padded base64.
pub fn encode(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode padded base64 back into the exact original bytes.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(text)
        .map_err(|e| SaltError::MalformedInput(format!("invalid base64: {e}")))
}
