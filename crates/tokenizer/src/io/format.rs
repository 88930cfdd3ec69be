//! Persisted model layout.
//!
//! A saved model is a single record with exactly three fields: the target
//! vocabulary size, the vocabulary as explicit `[symbol, id]` pairs and the
//! merges as `[[left, right], merged]` in learning order.

use serde::{Deserialize, Serialize};
use subword_core::{Merge, MergeTable, ModelState, Result, TokenizerError, Vocabulary};

/// Name of the model file inside a model directory.
pub const MODEL_FILE: &str = "tokenizer.json";

/// Complete model serialization format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedModel {
    /// Target vocabulary size
    pub vocab_size: usize,
    /// Vocabulary (token, ID) pairs in ID order
    pub vocab: Vec<(String, u32)>,
    /// Merge rules in learning order
    pub merges: Vec<SerializedMerge>,
}

/// A merge rule: the pair and the symbol it produces.
pub type SerializedMerge = ((String, String), String);

impl From<&ModelState> for SerializedModel {
    fn from(model: &ModelState) -> Self {
        let vocab = model
            .vocab
            .iter()
            .map(|(token, id)| (token.to_string(), id))
            .collect();

        let merges = model
            .merge_symbols()
            .map(|(left, right, merged)| {
                ((left.to_string(), right.to_string()), merged.to_string())
            })
            .collect();

        Self {
            vocab_size: model.vocab_size,
            vocab,
            merges,
        }
    }
}

impl TryFrom<SerializedModel> for ModelState {
    type Error = TokenizerError;

    fn try_from(data: SerializedModel) -> Result<Self> {
        let vocab = Vocabulary::from_entries(data.vocab)?;

        let lookup = |token: &str| {
            vocab
                .get_id(token)
                .ok_or_else(|| TokenizerError::Load(format!("Unknown token in merges: {}", token)))
        };

        let mut merges = MergeTable::with_capacity(data.merges.len());
        for ((left, right), merged) in &data.merges {
            merges.push(Merge {
                pair: (lookup(left)?, lookup(right)?),
                new_token_id: lookup(merged)?,
                // Selection frequencies are not persisted.
                frequency: 0,
            });
        }

        ModelState::from_parts(data.vocab_size, vocab, merges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ModelState {
        let mut vocab = Vocabulary::new();
        let l = vocab.add_token("l");
        let o = vocab.add_token("o");
        let lo = vocab.add_token("lo");
        let mut merges = MergeTable::new();
        merges.push(Merge {
            pair: (l, o),
            new_token_id: lo,
            frequency: 7,
        });
        ModelState::from_parts(42, vocab, merges).unwrap()
    }

    #[test]
    fn test_json_layout() {
        let json = serde_json::to_value(SerializedModel::from(&model())).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(json["vocab_size"], 42);
        assert_eq!(json["vocab"][4], serde_json::json!(["l", 4]));
        assert_eq!(json["merges"][0], serde_json::json!([["l", "o"], "lo"]));
    }

    #[test]
    fn test_restore_keeps_ids_and_merge_order() {
        let original = model();
        let restored = ModelState::try_from(SerializedModel::from(&original)).unwrap();

        assert_eq!(restored.vocab, original.vocab);
        assert_eq!(restored.vocab_size, 42);
        let pairs: Vec<_> = restored.merges.iter().map(|m| (m.pair, m.new_token_id)).collect();
        assert_eq!(pairs, vec![((4, 5), 6)]);
    }

    #[test]
    fn test_restore_rejects_unknown_merge_symbol() {
        let mut data = SerializedModel::from(&model());
        data.merges.push((("lo".to_string(), "w".to_string()), "low".to_string()));

        let err = ModelState::try_from(data).unwrap_err();
        assert!(matches!(err, TokenizerError::Load(_)));
    }

    #[test]
    fn test_restore_rejects_unsound_merge() {
        let mut data = SerializedModel::from(&model());
        data.merges[0].1 = "l".to_string();

        let err = ModelState::try_from(data).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidMerge(_)));
    }
}
