//! Load functionality for persisted models.

use super::format::{SerializedModel, MODEL_FILE};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use subword_core::{ModelState, Result, TokenizerError};

/// Tokenizer loader - handles loading trained models.
pub struct TokenizerLoader;

impl TokenizerLoader {
    /// Load the model stored in `path/tokenizer.json`.
    pub fn load(path: &Path) -> Result<ModelState> {
        let file_path = path.join(MODEL_FILE);
        let file = File::open(&file_path).map_err(|e| TokenizerError::io(&file_path, e))?;

        Self::read(BufReader::new(file))
    }

    /// Read and validate a model from JSON.
    pub fn read<R: Read>(reader: R) -> Result<ModelState> {
        let serialized: SerializedModel = serde_json::from_reader(reader)
            .map_err(|e| TokenizerError::Load(format!("Failed to deserialize tokenizer: {}", e)))?;

        ModelState::try_from(serialized)
    }
}
