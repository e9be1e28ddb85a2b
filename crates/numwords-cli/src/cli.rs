//! CLI command definitions and argument parsing.

use crate::config::{Config, OutputFormat};
use clap::{Parser, Subcommand};
use numwords_converter::{Scale, TokenMode};
use std::path::PathBuf;

/// Numwords CLI - Spell out the numbers in your text.
#[derive(Debug, Parser)]
#[command(name = "numwords")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "NUMWORDS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Magnitude table to use
    #[arg(short, long, value_enum, global = true)]
    pub scale: Option<ScaleArg>,

    /// Convert the first digit run as found, without token checks
    #[arg(long, global = true)]
    pub lenient: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (outputs only)
    Quiet,
}

/// Magnitude table options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScaleArg {
    /// Up to quintillion
    Standard,
    /// Up to decillion
    Extended,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert the first number in a sentence
    Convert(ConvertArgs),

    /// Convert a single integer
    Number(NumberArgs),

    /// Convert every line of a file or stdin
    Batch(BatchArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the convert command.
#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// Sentence containing a number (words are joined with spaces)
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub text: Vec<String>,
}

/// Arguments for the number command.
#[derive(Debug, Parser)]
pub struct NumberArgs {
    /// Integer to convert, optionally signed
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Text file to process (one sentence per line)
    #[arg(short = 'i', long)]
    pub file: Option<PathBuf>,

    /// Read lines from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Also write Input,Output rows to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print the configuration file location
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(scale) = self.scale {
            config.converter.scale = scale.into();
        }
        if self.lenient {
            config.converter.token_mode = TokenMode::Lenient;
        }
        if let Some(format) = self.format {
            config.settings.format = format.into();
        }
        if self.no_color {
            config.settings.color = false;
        }
    }
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

impl From<ScaleArg> for Scale {
    fn from(scale: ScaleArg) -> Self {
        match scale {
            ScaleArg::Standard => Scale::Standard,
            ScaleArg::Extended => Scale::Extended,
        }
    }
}
