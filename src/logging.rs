//! Structured logging setup.
//!
//! Events are written to stderr so they never mix with a key or salt
//! printed on stdout.  Filter precedence: `SALT_LOG`, then `-v` flags,
//! then `log_level` from `.salt.toml`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::errors::{Result, SaltError};

/// Environment variable that overrides every other log setting.
pub const LOG_ENV: &str = "SALT_LOG";

/// Map a `-v` count to a filter directive.
fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Build the filter from the environment, `-v` count and configured level.
pub fn build_filter(verbose: u8, configured: &str) -> Result<EnvFilter> {
    let from_env = std::env::var(LOG_ENV).ok();
    select_filter(from_env.as_deref(), verbose, configured)
}

fn select_filter(from_env: Option<&str>, verbose: u8, configured: &str) -> Result<EnvFilter> {
    if let Some(directive) = from_env.filter(|d| !d.trim().is_empty()) {
        return EnvFilter::try_new(directive)
            .map_err(|e| SaltError::ConfigError(format!("invalid {LOG_ENV} '{directive}': {e}")));
    }

    let directive = verbosity_directive(verbose).unwrap_or(configured);
    EnvFilter::try_new(directive)
        .map_err(|e| SaltError::ConfigError(format!("invalid log level '{directive}': {e}")))
}

/// Install the global subscriber.
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init(verbose: u8, configured: &str) -> Result<()> {
    let filter = build_filter(verbose, configured)?;

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();

    Ok(())
}
