//! Core BPE data structures.
//!
//! This module contains the vocabulary arena and the ordered merge table
//! produced by training and consumed by the tokenizer.

pub mod merges;
pub mod vocab;

pub use merges::{Merge, MergeTable, Pair};
pub use vocab::{SpecialTokens, Vocab, Vocabulary, RESERVED_TOKENS};
