//! Error types for the subword tokenizer libraries.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer libraries.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// `tokenize`/`encode`/`decode` called before training, or after
    /// restoring a model without recompiling its matcher.
    #[error("Tokenizer has not been trained yet")]
    UntrainedTokenizer,

    /// Error during training
    #[error("Training error: {0}")]
    Training(String),

    /// Error loading a persisted model
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving a model
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unknown token ID
    #[error("Unknown token ID: {0}")]
    UnknownTokenId(u32),

    /// Invalid merge rule
    #[error("Invalid merge rule: {0}")]
    InvalidMerge(String),

    /// The vocabulary could not be compiled into a matcher
    #[error("Matcher compilation failed: {0}")]
    Matcher(#[from] regex::Error),
}

impl TokenizerError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            err,
        }
    }
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
