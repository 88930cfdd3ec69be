//! Subword-core - Core data structures for the subword BPE tokenizer
//!
//! This crate provides the vocabulary arena, the ordered merge table and the
//! trained [`ModelState`] shared by the training and tokenizer crates.
//!
//! # Example
//!
//! ```rust
//! use subword_core::Vocabulary;
//!
//! // A new vocabulary already holds the four reserved markers
//! let mut vocab = Vocabulary::new();
//! assert_eq!(vocab.get_id("<unk>"), Some(0));
//!
//! let id = vocab.add_token("lo");
//! assert_eq!(vocab.get_token(id), Some("lo"));
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE data structures
pub mod core;
pub use self::core::vocab::{BOS_TOKEN, EOS_TOKEN, PAD_TOKEN, UNK_TOKEN};
pub use self::core::{Merge, MergeTable, Pair, SpecialTokens, Vocab, Vocabulary, RESERVED_TOKENS};

// Trained model state
pub mod model;
pub use model::ModelState;
