//! Decode command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to the trained tokenizer model directory
    #[arg(short, long)]
    pub tokenizer: PathBuf,

    /// Space-separated token IDs ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use super::{read_input, write_output};
use anyhow::{Context, Result as AnyhowResult};
use subword_tokenizer::Tokenizer;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::load(&cmd.tokenizer)?;

    let input = read_input(cmd.input)?;
    let ids = input
        .split_whitespace()
        .map(|s| {
            s.parse::<u32>()
                .with_context(|| format!("invalid token ID: {}", s))
        })
        .collect::<AnyhowResult<Vec<u32>>>()?;

    let text = tokenizer.decode(&ids)?;
    write_output(&text, cmd.output.as_deref())
}
