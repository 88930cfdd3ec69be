//! Subword-training - BPE vocabulary induction
//!
//! This crate turns raw text into a word-frequency table and learns a BPE
//! vocabulary and merge table from it.
//!
//! # Example
//!
//! ```rust
//! use subword_training::{BpeTrainer, WordCounts};
//!
//! let counts = WordCounts::from_texts(["low lower lowest", "newer wider"]);
//! let model = BpeTrainer::with_vocab_size(30).train(&counts)?;
//! assert!(model.vocab.len() <= 30);
//! # Ok::<(), subword_training::TokenizerError>(())
//! ```

pub use subword_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{BpeTrainer, PairCounter, PairTable, TrainingConfig, WordCounts};
