//! Training infrastructure for BPE tokenizers.
//!
//! This module summarizes a corpus into word counts and learns BPE merge
//! rules from them.

pub mod corpus;
pub mod counter;
pub mod trainer;

pub use corpus::WordCounts;
pub use counter::{PairCounter, PairTable};
pub use trainer::{BpeTrainer, TrainingConfig};
