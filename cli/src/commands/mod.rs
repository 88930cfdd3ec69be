//! CLI commands for the subword tokenizer.

pub mod decode;
pub mod encode;
pub mod info;
pub mod tokenize;
pub mod train;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use info::InfoCommand;
pub use tokenize::TokenizeCommand;
pub use train::TrainCommand;

use anyhow::{Context, Result};
use std::io::Read;

/// Return `input`, or all of stdin when it is "-".
pub(crate) fn read_input(input: String) -> Result<String> {
    if input != "-" {
        return Ok(input);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read text from stdin")?;
    Ok(buffer)
}

/// Print `output`, or write it to `path` when given.
pub(crate) fn write_output(output: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, output).with_context(|| format!("failed to write {}", path))?;
            log::info!("Wrote output to {}", path);
        }
        None => println!("{}", output),
    }
    Ok(())
}
