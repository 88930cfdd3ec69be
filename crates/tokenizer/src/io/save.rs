//! Save functionality for trained tokenizers.

use super::format::{SerializedModel, MODEL_FILE};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use subword_core::{ModelState, Result, TokenizerError};

/// Tokenizer saver - handles saving trained models.
pub struct TokenizerSaver<'a> {
    /// Model reference
    model: &'a ModelState,
}

impl<'a> TokenizerSaver<'a> {
    /// Create a new tokenizer saver.
    pub fn new(model: &'a ModelState) -> Self {
        Self { model }
    }

    /// Save the model to `path/tokenizer.json`, creating the directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| TokenizerError::io(path, e))?;

        let file_path = path.join(MODEL_FILE);
        let file = File::create(&file_path).map_err(|e| TokenizerError::io(&file_path, e))?;

        let mut writer = BufWriter::new(file);
        self.write(&mut writer)?;
        writer.flush().map_err(|e| TokenizerError::io(&file_path, e))?;

        info!(
            "Saved tokenizer to {}: vocab size {}, {} merges",
            file_path.display(),
            self.model.vocab.len(),
            self.model.num_merges()
        );
        Ok(())
    }

    /// Write the model as pretty-printed JSON.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, &SerializedModel::from(self.model))
            .map_err(|e| TokenizerError::Save(format!("Failed to serialize tokenizer: {}", e)))
    }
}
