//! `salt encrypt-*` — replace a plaintext file with its encrypted envelope.
//!
//! The key or salt needed to decrypt is printed once and never stored.

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::document::{read_bytes, write_atomic};
use crate::cli::{output, prompt_new_password, FileArgs};
use crate::config::Settings;
use crate::crypto::KeyStrategy;
use crate::envelope;
use crate::errors::Result;

/// Execute an encrypt subcommand with the given strategy.
pub fn execute(args: &FileArgs, strategy: KeyStrategy, settings: &Settings) -> Result<()> {
    if strategy.is_weak() {
        settings.ensure_password_only_allowed()?;
        output::warning(
            "Password-only mode pads the password into a key without salting or hashing. \
             Prefer `salt encrypt-passalt`.",
        );
    }

    let plaintext = Zeroizing::new(read_bytes(&args.file)?);

    let password = match strategy {
        KeyStrategy::RandomKey => None,
        KeyStrategy::PasswordSalt | KeyStrategy::PasswordOnly => {
            Some(prompt_new_password(settings.confirm_password)?)
        }
    };

    let sealed = envelope::encrypt(
        strategy,
        &plaintext,
        password.as_deref().map(String::as_str),
    )?;
    drop(password);

    let target = args.target();
    write_atomic(target, sealed.text.as_bytes())?;
    info!(%strategy, path = %target.display(), "file encrypted");

    output::success(&format!("Encrypted {}", target.display()));

    if let (Some(label), Some(secret)) = (strategy.secret_label(), sealed.secret.as_ref()) {
        output::secret(label, secret);
        output::tip(&format!(
            "Keep the {label} safe — the file cannot be decrypted without it."
        ));
    }

    Ok(())
}
