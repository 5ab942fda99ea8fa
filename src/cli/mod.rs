//! CLI module — Clap argument parser, prompts, output helpers, and command implementations.

pub mod commands;
pub mod document;
pub mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use zeroize::Zeroizing;

use crate::crypto::KeyStrategy;
use crate::errors::{Result, SaltError};

/// Environment variable read instead of prompting for a password.
pub const PASSWORD_ENV: &str = "SALT_PASSWORD";

/// Environment variable read instead of prompting for a key.
pub const KEY_ENV: &str = "SALT_KEY";

/// Environment variable read instead of prompting for a salt.
pub const SALT_ENV: &str = "SALT_SALT";

/// salt: encrypt text files one at a time.
#[derive(Parser)]
#[command(
    name = "salt",
    about = "Encrypt text files one at a time",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt with a random key (prints the key)
    #[command(visible_alias = "ek")]
    EncryptKey(FileArgs),

    /// Encrypt with a password and a random salt (prints the salt)
    #[command(visible_alias = "eps")]
    EncryptPassalt(FileArgs),

    /// Encrypt with a password only (weak, no salt)
    #[command(visible_alias = "ep")]
    EncryptPass(FileArgs),

    /// Decrypt with a key
    #[command(visible_alias = "dk")]
    DecryptKey(FileArgs),

    /// Decrypt with a password and salt
    #[command(visible_alias = "dps")]
    DecryptPassalt(FileArgs),

    /// Decrypt with a password only
    #[command(visible_alias = "dp")]
    DecryptPass(FileArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Arguments shared by every encrypt and decrypt subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct FileArgs {
    /// File to encrypt or decrypt (overwritten in place)
    pub file: PathBuf,

    /// Write the result here instead of overwriting FILE
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl FileArgs {
    /// Where the result should be written.
    pub fn target(&self) -> &Path {
        self.output.as_deref().unwrap_or(self.file.as_path())
    }
}

impl Commands {
    /// The key strategy of an encrypt or decrypt subcommand.
    pub fn strategy(&self) -> Option<KeyStrategy> {
        match self {
            Commands::EncryptKey(_) | Commands::DecryptKey(_) => Some(KeyStrategy::RandomKey),
            Commands::EncryptPassalt(_) | Commands::DecryptPassalt(_) => {
                Some(KeyStrategy::PasswordSalt)
            }
            Commands::EncryptPass(_) | Commands::DecryptPass(_) => Some(KeyStrategy::PasswordOnly),
            Commands::Completions { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Read a non-empty environment variable.
fn from_env(var: &str) -> Option<Zeroizing<String>> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Some(Zeroizing::new(value)),
        _ => None,
    }
}

/// Ask for a value on the terminal without echoing it.
fn ask_hidden(prompt: &str) -> Result<Zeroizing<String>> {
    let value = dialoguer::Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(|e| SaltError::CommandFailed(format!("{} prompt: {e}", prompt.to_lowercase())))?;
    Ok(Zeroizing::new(value))
}

/// Get a key or salt, trying in order:
/// 1. the environment variable `var` (scripts and tests)
/// 2. an interactive prompt that does not echo
///
/// Surrounding whitespace is dropped since these are usually pasted.
/// Returns `Zeroizing<String>` so the secret is wiped from memory on drop.
pub fn prompt_secret(var: &str, prompt: &str) -> Result<Zeroizing<String>> {
    let raw = match from_env(var) {
        Some(value) => value,
        None => ask_hidden(prompt)?,
    };
    Ok(Zeroizing::new(raw.trim().to_string()))
}

/// Get the password used to decrypt.
///
/// Unlike keys and salts, passwords are used exactly as typed.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    match from_env(PASSWORD_ENV) {
        Some(value) => Ok(value),
        None => ask_hidden("Password"),
    }
}

/// Prompt for the password used to encrypt, optionally asking twice.
pub fn prompt_new_password(confirm: bool) -> Result<Zeroizing<String>> {
    if let Some(value) = from_env(PASSWORD_ENV) {
        return Ok(value);
    }

    let mut prompt = dialoguer::Password::new()
        .with_prompt("Password")
        .allow_empty_password(true);
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match, try again");
    }

    let password = prompt
        .interact()
        .map_err(|e| SaltError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(password))
}
