//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that ties the
//! trainer, the trained model state and the compiled matcher together.

pub mod matcher;

pub use matcher::{Matcher, Segment, SegmentKind};

use log::info;
use rayon::prelude::*;
use std::path::Path;
use subword_core::{ModelState, Result, TokenizerError, Vocabulary};
use subword_training::{BpeTrainer, TrainingConfig, WordCounts};

/// What `tokenize` does with characters that no vocabulary symbol matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnmatchedPolicy {
    /// Emit each maximal unmatched run as one token; `encode` maps it to
    /// the unknown-token id.
    #[default]
    Unknown,
    /// Skip unmatched characters without emitting a token.
    Drop,
}

/// Configuration for building a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Target vocabulary size
    pub vocab_size: usize,
    /// Handling of characters outside the trained alphabet
    pub unmatched_policy: UnmatchedPolicy,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            vocab_size: TrainingConfig::default().vocab_size,
            unmatched_policy: UnmatchedPolicy::default(),
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target vocabulary size.
    pub fn vocab_size(mut self, size: usize) -> Self {
        self.config.vocab_size = size;
        self
    }

    /// Set the handling of unmatched characters.
    pub fn unmatched_policy(mut self, policy: UnmatchedPolicy) -> Self {
        self.config.unmatched_policy = policy;
        self
    }

    /// Build the (untrained) tokenizer.
    pub fn build(self) -> Result<Tokenizer> {
        if self.config.vocab_size == 0 {
            return Err(TokenizerError::InvalidConfig(
                "vocab_size must be positive".to_string(),
            ));
        }
        Ok(Tokenizer::new(self.config))
    }
}

/// BPE tokenizer.
///
/// Starts Untrained. [`train`](Self::train) or [`load`](Self::load) learn or
/// restore a model and compile its matcher, which makes it Ready. Reads
/// (`tokenize`, `encode`, `decode`) need a Ready tokenizer and never mutate
/// it, so one trained tokenizer can be shared across threads.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Configuration
    config: TokenizerConfig,
    /// Vocabulary and merges
    model: ModelState,
    /// Present once the tokenizer is Ready
    matcher: Option<Matcher>,
}

impl Tokenizer {
    /// Create an untrained tokenizer.
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            model: ModelState::new(config.vocab_size),
            config,
            matcher: None,
        }
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Wrap a restored model.
    ///
    /// The tokenizer stays Untrained until [`compile`](Self::compile) is
    /// called.
    pub fn from_model(model: ModelState) -> Self {
        Self {
            config: TokenizerConfig {
                vocab_size: model.vocab_size,
                ..Default::default()
            },
            model,
            matcher: None,
        }
    }

    /// Set the handling of unmatched characters.
    pub fn with_unmatched_policy(mut self, policy: UnmatchedPolicy) -> Self {
        self.config.unmatched_policy = policy;
        self
    }

    /// Train on raw texts, replacing any previous model.
    pub fn train<S: AsRef<str>>(&mut self, texts: impl IntoIterator<Item = S>) -> Result<()> {
        self.train_word_counts(&WordCounts::from_texts(texts))
    }

    /// Train on an already summarized corpus.
    pub fn train_word_counts(&mut self, word_counts: &WordCounts) -> Result<()> {
        let trainer = BpeTrainer::new(TrainingConfig {
            vocab_size: self.config.vocab_size,
        });
        self.model = trainer.train(word_counts)?;
        self.matcher = None;
        self.compile()
    }

    /// Compile the matcher from the current vocabulary.
    pub fn compile(&mut self) -> Result<()> {
        self.matcher = Some(Matcher::compile(&self.model.vocab)?);
        Ok(())
    }

    /// Whether the tokenizer is Ready.
    pub fn is_ready(&self) -> bool {
        self.matcher.is_some()
    }

    fn matcher(&self) -> Result<&Matcher> {
        self.matcher
            .as_ref()
            .ok_or(TokenizerError::UntrainedTokenizer)
    }

    /// Split text into tokens, whitespace runs included.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let matcher = self.matcher()?;
        let drop_unmatched = self.config.unmatched_policy == UnmatchedPolicy::Drop;

        Ok(matcher
            .scan(text)
            .filter(|s| !(drop_unmatched && s.kind == SegmentKind::Unmatched))
            .map(|s| s.text.to_string())
            .collect())
    }

    /// Encode text to token IDs.
    ///
    /// Tokens absent from the vocabulary, whitespace runs included, map to
    /// the unknown-token ID.
    pub fn encode(&self, text: &str) -> Result<Vec<u32>> {
        let matcher = self.matcher()?;
        let vocab = &self.model.vocab;
        let unk = vocab.special.unk;
        let drop_unmatched = self.config.unmatched_policy == UnmatchedPolicy::Drop;

        Ok(matcher
            .scan(text)
            .filter_map(|s| match s.kind {
                SegmentKind::Symbol => Some(vocab.get_id(s.text).unwrap_or(unk)),
                SegmentKind::Unmatched if drop_unmatched => None,
                SegmentKind::Unmatched | SegmentKind::Whitespace => Some(unk),
            })
            .collect())
    }

    /// Encode a batch of texts (parallelized).
    pub fn encode_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Result<Vec<Vec<u32>>> {
        self.matcher()?;
        texts
            .par_iter()
            .map(|text| self.encode(text.as_ref()))
            .collect()
    }

    /// Decode token IDs by concatenating their symbols.
    ///
    /// Whitespace and unknown text were encoded as the unknown token, so
    /// this is not the inverse of [`encode`](Self::encode).
    pub fn decode(&self, ids: &[u32]) -> Result<String> {
        self.matcher()?;
        let mut text = String::new();
        for &id in ids {
            let token = self
                .model
                .vocab
                .get_token(id)
                .ok_or(TokenizerError::UnknownTokenId(id))?;
            text.push_str(token);
        }
        Ok(text)
    }

    /// Get the ID of a token.
    pub fn token_to_id(&self, token: &str) -> Option<u32> {
        self.model.vocab.get_id(token)
    }

    /// Get the token for an ID.
    pub fn id_to_token(&self, id: u32) -> Option<&str> {
        self.model.vocab.get_token(id)
    }

    /// Get the vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.model.vocab.len()
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.model.vocab
    }

    /// Get a reference to the model state.
    pub fn model(&self) -> &ModelState {
        &self.model
    }

    /// Get the configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Save the model to a directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        use crate::io::save::TokenizerSaver;

        TokenizerSaver::new(&self.model).save(path)
    }

    /// Load a model from a directory and compile its matcher.
    pub fn load(path: &Path) -> Result<Self> {
        use crate::io::load::TokenizerLoader;

        let model = TokenizerLoader::load(path)?;
        info!(
            "Loaded tokenizer from {}: vocab size {}, {} merges",
            path.display(),
            model.vocab.len(),
            model.num_merges()
        );

        let mut tokenizer = Self::from_model(model);
        tokenizer.compile()?;
        Ok(tokenizer)
    }
}
