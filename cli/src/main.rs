//! Subword CLI - Command-line interface for the BPE tokenizer.
//!
//! This is the main entry point for the `subword` command-line tool.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{DecodeCommand, EncodeCommand, InfoCommand, TokenizeCommand, TrainCommand};
use env_logger::{Builder, Env};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "subword")]
#[command(about = "Train and apply a word-level BPE tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a new tokenizer from text files
    Train(TrainCommand),
    /// Encode text to token IDs
    Encode(EncodeCommand),
    /// Split text into tokens
    Tokenize(TokenizeCommand),
    /// Decode token IDs back to symbols
    Decode(DecodeCommand),
    /// Show information about a trained tokenizer
    Info(InfoCommand),
}

/// Level selected by the `-v`/`-q` counters.
fn verbosity(verbose: u8, quiet: u8) -> LevelFilter {
    match (quiet, verbose) {
        (0, 0) => LevelFilter::Info,
        (0, 1) => LevelFilter::Debug,
        (0, _) => LevelFilter::Trace,
        (1, _) => LevelFilter::Warn,
        _ => LevelFilter::Error,
    }
}

/// Logger reading its filter from `env`; the flags only set the fallback.
fn logger(env: Env<'_>, verbose: u8, quiet: u8) -> Builder {
    let level = verbosity(verbose, quiet);
    let mut builder = Builder::from_env(env.default_filter_or(level.as_str()));
    builder.format_timestamp_millis();
    builder
}

fn init_logging(verbose: u8, quiet: u8) {
    let _ = logger(Env::default(), verbose, quiet).try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Tokenize(cmd) => commands::tokenize::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Info(cmd) => commands::info::run(cmd)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_set_level_without_env_filter() {
        let env = Env::new().filter("SUBWORD_TEST_LOG_UNSET");
        assert_eq!(logger(env, 1, 0).build().filter(), LevelFilter::Debug);

        let env = Env::new().filter("SUBWORD_TEST_LOG_UNSET");
        assert_eq!(logger(env, 0, 2).build().filter(), LevelFilter::Error);
    }

    #[test]
    fn test_env_filter_overrides_flags() {
        std::env::set_var("SUBWORD_TEST_LOG_WARN", "warn");
        let env = Env::new().filter("SUBWORD_TEST_LOG_WARN");
        assert_eq!(logger(env, 0, 0).build().filter(), LevelFilter::Warn);
    }

    #[test]
    fn test_verbosity_counters() {
        assert_eq!(verbosity(0, 0), LevelFilter::Info);
        assert_eq!(verbosity(2, 0), LevelFilter::Trace);
        assert_eq!(verbosity(3, 1), LevelFilter::Warn);
    }
}
