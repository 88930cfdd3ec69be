//! Subword-tokenizer - High-level tokenizer API
//!
//! This crate trains a BPE vocabulary from raw text, compiles it into a
//! longest-match scanner and encodes text into token IDs. Trained models can
//! be saved to and loaded from a directory.
//!
//! # Example
//!
//! ```rust
//! use subword_tokenizer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::builder().vocab_size(30).build()?;
//! tokenizer.train(["low low lower", "newer wider new"])?;
//!
//! let tokens = tokenizer.tokenize("lower new")?;
//! let ids = tokenizer.encode("lower new")?;
//! assert_eq!(tokens.len(), ids.len());
//! # Ok::<(), subword_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use subword_core::{ModelState, Result, TokenizerError, Vocabulary};
pub use subword_training::WordCounts;

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{
    Matcher, Segment, SegmentKind, Tokenizer, TokenizerBuilder, TokenizerConfig, UnmatchedPolicy,
};

// IO/Serialization
pub mod io;
pub use io::{SerializedModel, TokenizerLoader, TokenizerSaver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
