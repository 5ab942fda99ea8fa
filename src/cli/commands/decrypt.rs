//! `salt decrypt-*` — restore the plaintext of an encrypted file.
//!
//! Nothing is written unless the envelope verifies.

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::document::{read_encoded, write_atomic};
use crate::cli::{output, prompt_password, prompt_secret, FileArgs, KEY_ENV, SALT_ENV};
use crate::config::Settings;
use crate::crypto::KeyStrategy;
use crate::envelope;
use crate::errors::Result;

/// Execute a decrypt subcommand with the given strategy.
pub fn execute(args: &FileArgs, strategy: KeyStrategy, settings: &Settings) -> Result<()> {
    if strategy.is_weak() {
        settings.ensure_password_only_allowed()?;
        output::warning("Decrypting a file protected only by a zero-padded password.");
    }

    let encoded = read_encoded(&args.file)?;

    let password = match strategy {
        KeyStrategy::RandomKey => None,
        KeyStrategy::PasswordSalt | KeyStrategy::PasswordOnly => Some(prompt_password()?),
    };
    let secret = match strategy {
        KeyStrategy::RandomKey => Some(prompt_secret(KEY_ENV, "Key")?),
        KeyStrategy::PasswordSalt => Some(prompt_secret(SALT_ENV, "Salt")?),
        KeyStrategy::PasswordOnly => None,
    };

    let plaintext = envelope::decrypt(
        strategy,
        &encoded,
        password.as_deref().map(String::as_str),
        secret.as_deref().map(String::as_str),
    )?;
    drop(password);
    drop(secret);
    let plaintext = Zeroizing::new(plaintext);

    let target = args.target();
    write_atomic(target, &plaintext)?;
    info!(%strategy, path = %target.display(), "file decrypted");

    output::success(&format!("Decrypted {}", target.display()));
    Ok(())
}
