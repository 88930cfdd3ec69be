//! Info command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Info command arguments.
#[derive(Parser)]
pub struct InfoCommand {
    /// Path to the trained tokenizer model directory
    #[arg(short, long)]
    pub tokenizer: PathBuf,

    /// Number of merges to list
    #[arg(short, long, default_value_t = 10)]
    pub merges: usize,
}

use anyhow::Result as AnyhowResult;
use subword_tokenizer::Tokenizer;

pub fn run(cmd: InfoCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::load(&cmd.tokenizer)?;
    let model = tokenizer.model();

    println!("Target vocab size: {}", model.vocab_size);
    println!("Vocab size: {}", model.vocab.len());
    println!("Merges: {}", model.num_merges());

    for (rank, (left, right, merged)) in model.merge_symbols().take(cmd.merges).enumerate() {
        println!("  {:>5}: {:?} + {:?} -> {:?}", rank, left, right, merged);
    }

    Ok(())
}
