//! Trained model state.

use crate::core::{Merge, MergeTable, Vocabulary};
use crate::error::{Result, TokenizerError};

/// The triple produced by training: target size, vocabulary and merges.
///
/// Immutable once training has finished; the tokenizer shares it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelState {
    /// Target vocabulary size the model was configured with
    pub vocab_size: usize,
    /// Learned vocabulary
    pub vocab: Vocabulary,
    /// Merge rules in learning order
    pub merges: MergeTable,
}

impl ModelState {
    /// An empty model: only the reserved markers, no merges.
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            vocab: Vocabulary::new(),
            merges: MergeTable::new(),
        }
    }

    /// Assemble a model from restored parts, checking merge soundness.
    ///
    /// Every merge must reference known symbols, and its output must be the
    /// concatenation of its inputs.
    pub fn from_parts(vocab_size: usize, vocab: Vocabulary, merges: MergeTable) -> Result<Self> {
        for merge in &merges {
            let (left, right, merged) = symbols_of(&vocab, merge)?;
            if left.len() + right.len() != merged.len()
                || !merged.starts_with(left)
                || !merged.ends_with(right)
            {
                return Err(TokenizerError::InvalidMerge(format!(
                    "{:?} + {:?} does not produce {:?}",
                    left, right, merged
                )));
            }
        }

        Ok(Self {
            vocab_size,
            vocab,
            merges,
        })
    }

    /// Merges as `(left, right, merged)` symbol strings, in learning order.
    pub fn merge_symbols(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        // Soundness is checked on construction and maintained by training.
        self.merges
            .iter()
            .filter_map(move |merge| symbols_of(&self.vocab, merge).ok())
    }

    /// Number of learned merges.
    pub fn num_merges(&self) -> usize {
        self.merges.len()
    }
}

fn symbols_of<'a>(vocab: &'a Vocabulary, merge: &Merge) -> Result<(&'a str, &'a str, &'a str)> {
    let lookup = move |id: u32| vocab.get_token(id).ok_or(TokenizerError::UnknownTokenId(id));
    Ok((
        lookup(merge.pair.0)?,
        lookup(merge.pair.1)?,
        lookup(merge.new_token_id)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_model_is_markers_only() {
        let model = ModelState::new(100);
        assert_eq!(model.vocab_size, 100);
        assert_eq!(model.vocab.len(), 4);
        assert_eq!(model.num_merges(), 0);
    }

    #[test]
    fn test_from_parts_checks_concatenation() {
        let mut vocab = Vocabulary::new();
        let a = vocab.add_token("a");
        let b = vocab.add_token("b");
        let ab = vocab.add_token("ab");
        let ba = vocab.add_token("ba");

        let mut good = MergeTable::new();
        good.push(Merge {
            pair: (a, b),
            new_token_id: ab,
            frequency: 3,
        });
        let model = ModelState::from_parts(10, vocab.clone(), good).unwrap();
        let symbols: Vec<_> = model.merge_symbols().collect();
        assert_eq!(symbols, vec![("a", "b", "ab")]);

        let mut bad = MergeTable::new();
        bad.push(Merge {
            pair: (a, b),
            new_token_id: ba,
            frequency: 3,
        });
        let err = ModelState::from_parts(10, vocab, bad).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidMerge(_)));
    }

    #[test]
    fn test_from_parts_rejects_unknown_ids() {
        let vocab = Vocabulary::new();
        let mut merges = MergeTable::new();
        merges.push(Merge {
            pair: (0, 99),
            new_token_id: 100,
            frequency: 1,
        });

        let err = ModelState::from_parts(10, vocab, merges).unwrap_err();
        assert!(matches!(err, TokenizerError::UnknownTokenId(99)));
    }
}
