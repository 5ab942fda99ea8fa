//! Reading the document to process and writing the result back.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::{Result, SaltError};

/// Read the whole file into memory.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => {
            debug!(path = %path.display(), len = bytes.len(), "read document");
            Ok(bytes)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(SaltError::FileNotFound(path.to_path_buf())),
        Err(e) => Err(e.into()),
    }
}

/// Read an encrypted file as text, dropping surrounding whitespace.
///
/// Editors commonly add a trailing newline; the envelope itself never
/// contains whitespace.
pub fn read_encoded(path: &Path) -> Result<String> {
    let bytes = read_bytes(path)?;
    let text = String::from_utf8(bytes).map_err(|_| {
        SaltError::MalformedInput(format!("{} is not an encrypted text file", path.display()))
    })?;
    Ok(text.trim().to_string())
}

/// Write `contents` to `path` atomically.
///
/// The data goes to a randomly named temp file in the same directory and is
/// then renamed over the target, so a crash never leaves a half-written file.
/// An existing target keeps its permissions; a new one is created owner-only.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;

    match fs::metadata(path) {
        Ok(existing) => tmp.as_file().set_permissions(existing.permissions())?,
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    tmp.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), len = contents.len(), "wrote document");
    Ok(())
}
