//! Encode command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to the trained tokenizer model directory
    #[arg(short, long)]
    pub tokenizer: PathBuf,

    /// Text to encode ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Drop characters outside the trained alphabet instead of encoding them as <unk>
    #[arg(long, default_value_t = false)]
    pub drop_unknown: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use super::{read_input, write_output};
use anyhow::Result as AnyhowResult;
use subword_tokenizer::{Tokenizer, UnmatchedPolicy};

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let mut tokenizer = Tokenizer::load(&cmd.tokenizer)?;
    if cmd.drop_unknown {
        tokenizer = tokenizer.with_unmatched_policy(UnmatchedPolicy::Drop);
    }

    let text = read_input(cmd.input)?;
    let ids = tokenizer.encode(&text)?;

    let output = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    write_output(&output, cmd.output.as_deref())
}
