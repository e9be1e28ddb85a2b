//! Numwords CLI - Spell out the numbers in your text.

use clap::Parser;
use numwords_cli::cli::{ConfigAction, ConfigArgs};
use numwords_cli::commands;
use numwords_cli::repl;
use numwords_cli::{Cli, Command, Config, Formatter};
use numwords_converter::NumberConverter;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> numwords_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // `config init` must work before the file it creates exists
    let mut config = match &cli.command {
        Some(Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. },
        })) => Config::default(),
        _ => Config::load(cli.config.as_deref())?,
    };

    // Command-line flags win over the file
    cli.apply_to(&mut config);

    let formatter = Formatter::new(config.settings.format, config.settings.color);
    let converter = NumberConverter::try_new(config.converter.clone())?;

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&converter, &formatter)?;
        }
        Some(Command::Convert(args)) => {
            commands::execute_convert(args, &converter, &formatter)?;
        }
        Some(Command::Number(args)) => {
            commands::execute_number(args, &converter, &formatter)?;
        }
        Some(Command::Batch(args)) => {
            commands::execute_batch(args, &converter, &formatter)?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, cli.config.as_deref(), &formatter)?;
        }
    }

    Ok(())
}
