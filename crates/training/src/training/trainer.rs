//! BPE trainer implementation.
//!
//! Vocabulary induction by repeated most-frequent-pair merging. Pair
//! frequencies are recounted from the current splits on every step and the
//! first-counted pair wins ties, so the same corpus always trains to the
//! same vocabulary and merge table.

use super::corpus::WordCounts;
use super::counter::PairCounter;
use log::{debug, info};
use subword_core::{Merge, MergeTable, ModelState, Result, TokenizerError, Vocabulary};

/// Configuration for BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Target vocabulary size, reserved markers included
    pub vocab_size: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self { vocab_size: 1_000 }
    }
}

/// BPE trainer.
///
/// Trains a vocabulary from a word-frequency table by iteratively merging
/// the most frequent adjacent symbol pairs.
#[derive(Debug, Clone)]
pub struct BpeTrainer {
    /// Configuration
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new BPE trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a new BPE trainer for a target vocabulary size.
    pub fn with_vocab_size(vocab_size: usize) -> Self {
        Self::new(TrainingConfig { vocab_size })
    }

    /// The trainer's configuration.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Summarize raw texts and train on them.
    pub fn train_texts<S: AsRef<str>>(&self, texts: impl IntoIterator<Item = S>) -> Result<ModelState> {
        self.train(&WordCounts::from_texts(texts))
    }

    /// Train on a word-frequency table.
    ///
    /// Stops when the vocabulary reaches the target size or when no word
    /// has two symbols left; the second case is not an error and yields a
    /// smaller vocabulary.
    pub fn train(&self, word_counts: &WordCounts) -> Result<ModelState> {
        if self.config.vocab_size == 0 {
            return Err(TokenizerError::InvalidConfig(
                "vocab_size must be positive".to_string(),
            ));
        }

        let mut state = TrainingState::new(word_counts)?;
        let initial = state.vocab.len();
        let target = self.config.vocab_size;
        info!(
            "Starting BPE training: {} distinct words, {} initial symbols, target vocab size {}",
            word_counts.len(),
            initial,
            target
        );

        let total = target.saturating_sub(initial);
        let mut last_log_percent = 0;

        while state.vocab.len() < target {
            let Some(merge) = state.step()? else {
                info!(
                    "No mergeable pairs left; stopping at vocab size {} of {}",
                    state.vocab.len(),
                    target
                );
                break;
            };

            debug!(
                "Merge {}: {:?} -> {} (frequency: {})",
                state.merges.len(),
                merge.pair,
                merge.new_token_id,
                merge.frequency
            );

            let done = state.vocab.len() - initial;
            let percent = done * 100 / total.max(1);
            if percent >= last_log_percent + 10 {
                info!("Progress: {}% ({}/{} new symbols)", percent, done, total);
                last_log_percent = percent;
            }
        }

        info!(
            "Finished training: {} merges, vocab size {}",
            state.merges.len(),
            state.vocab.len()
        );

        Ok(state.into_model(self.config.vocab_size))
    }
}

impl Default for BpeTrainer {
    fn default() -> Self {
        Self::new(TrainingConfig::default())
    }
}

/// Mutable state of one training run.
pub(crate) struct TrainingState {
    pub(crate) vocab: Vocabulary,
    pub(crate) merges: MergeTable,
    pub(crate) counter: PairCounter,
}

impl TrainingState {
    /// Reserved markers first, then every character in first-seen order.
    pub(crate) fn new(word_counts: &WordCounts) -> Result<Self> {
        let mut vocab = Vocabulary::new();
        let mut buf = [0u8; 4];
        for (word, _) in word_counts.iter() {
            for c in word.chars() {
                vocab.add_token(c.encode_utf8(&mut buf));
            }
        }

        let counter = PairCounter::new(word_counts, &vocab)?;

        Ok(Self {
            vocab,
            merges: MergeTable::new(),
            counter,
        })
    }

    /// Learn and apply one merge. `None` when no pairs remain.
    pub(crate) fn step(&mut self) -> Result<Option<Merge>> {
        let pairs = self.counter.count_pairs();
        let Some((pair, frequency)) = pairs.most_frequent() else {
            return Ok(None);
        };

        let merged = {
            let left = self.symbol(pair.0)?;
            let right = self.symbol(pair.1)?;
            let mut merged = String::with_capacity(left.len() + right.len());
            merged.push_str(left);
            merged.push_str(right);
            merged
        };

        // A symbol reachable through two different pairs keeps its first id.
        let new_token_id = self.vocab.add_token(&merged);
        let merge = Merge {
            pair,
            new_token_id,
            frequency,
        };
        self.merges.push(merge);
        self.counter.merge_pair(pair, new_token_id);

        Ok(Some(merge))
    }

    fn symbol(&self, id: u32) -> Result<&str> {
        self.vocab
            .get_token(id)
            .ok_or_else(|| TokenizerError::Training(format!("pair refers to unknown id {}", id)))
    }

    pub(crate) fn into_model(self, vocab_size: usize) -> ModelState {
        ModelState {
            vocab_size,
            vocab: self.vocab,
            merges: self.merges,
        }
    }
}
