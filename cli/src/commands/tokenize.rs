//! Tokenize command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Tokenize command arguments.
#[derive(Parser)]
pub struct TokenizeCommand {
    /// Path to the trained tokenizer model directory
    #[arg(short, long)]
    pub tokenizer: PathBuf,

    /// Text to tokenize ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Drop characters outside the trained alphabet
    #[arg(long, default_value_t = false)]
    pub drop_unknown: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use super::{read_input, write_output};
use anyhow::Result as AnyhowResult;
use subword_tokenizer::{Tokenizer, UnmatchedPolicy};

pub fn run(cmd: TokenizeCommand) -> AnyhowResult<()> {
    let mut tokenizer = Tokenizer::load(&cmd.tokenizer)?;
    if cmd.drop_unknown {
        tokenizer = tokenizer.with_unmatched_policy(UnmatchedPolicy::Drop);
    }

    let text = read_input(cmd.input)?;
    let tokens = tokenizer.tokenize(&text)?;

    // Debug formatting keeps whitespace tokens visible.
    let output = format!("{:?}", tokens);
    write_output(&output, cmd.output.as_deref())
}
