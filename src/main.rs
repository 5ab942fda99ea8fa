use clap::Parser;
use salt::cli::commands::{completions, decrypt, encrypt};
use salt::cli::{Cli, Commands};
use salt::config::Settings;
use salt::crypto::KeyStrategy;
use salt::errors::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        salt::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    salt::logging::init(cli.verbose, &settings.log_level)?;

    if let Some(strategy) = cli.command.strategy() {
        tracing::debug!(%strategy, "starting");
    }

    match cli.command {
        Commands::EncryptKey(ref args) => encrypt::execute(args, KeyStrategy::RandomKey, &settings),
        Commands::EncryptPassalt(ref args) => {
            encrypt::execute(args, KeyStrategy::PasswordSalt, &settings)
        }
        Commands::EncryptPass(ref args) => {
            encrypt::execute(args, KeyStrategy::PasswordOnly, &settings)
        }
        Commands::DecryptKey(ref args) => decrypt::execute(args, KeyStrategy::RandomKey, &settings),
        Commands::DecryptPassalt(ref args) => {
            decrypt::execute(args, KeyStrategy::PasswordSalt, &settings)
        }
        Commands::DecryptPass(ref args) => {
            decrypt::execute(args, KeyStrategy::PasswordOnly, &settings)
        }
        Commands::Completions { shell } => completions::execute(shell, &mut std::io::stdout()),
    }
}
