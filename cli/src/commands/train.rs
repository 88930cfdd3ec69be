//! Train command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Training text files, read line by line
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory for the trained model
    #[arg(short, long)]
    pub output: PathBuf,

    /// Target vocabulary size
    #[arg(long, default_value_t = 1_000)]
    pub vocab_size: usize,
}

use anyhow::{Context, Result as AnyhowResult};
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;
use subword_tokenizer::{Tokenizer, WordCounts};

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    // Read training data
    let start = Instant::now();
    let mut word_counts = WordCounts::new();
    let mut lines = 0usize;
    for path in &cmd.inputs {
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        for line in BufReader::new(file).lines() {
            let line = line.with_context(|| format!("failed to read {}", path.display()))?;
            word_counts.add_text(&line);
            lines += 1;
        }
    }
    info!(
        "Read {} lines from {} files in {:.2}s: {} distinct words, {} occurrences",
        lines,
        cmd.inputs.len(),
        start.elapsed().as_secs_f64(),
        word_counts.len(),
        word_counts.total_occurrences()
    );

    // Train
    let mut tokenizer = Tokenizer::builder().vocab_size(cmd.vocab_size).build()?;
    let start = Instant::now();
    tokenizer.train_word_counts(&word_counts)?;
    info!(
        "Training completed in {:.2}s, vocab size {}",
        start.elapsed().as_secs_f64(),
        tokenizer.vocab_size()
    );

    tokenizer
        .save(&cmd.output)
        .with_context(|| format!("failed to save model to {}", cmd.output.display()))?;

    Ok(())
}
