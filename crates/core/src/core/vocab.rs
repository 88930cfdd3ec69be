//! Vocabulary storage and lookup.
//!
//! The vocabulary is an arena: symbols live in a `Vec` indexed by their id,
//! with an `AHashMap` for the reverse lookup. Ids are dense, start at 0 and
//! never change once assigned.

use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use compact_str::CompactString;

/// Unknown-token marker.
pub const UNK_TOKEN: &str = "<unk>";
/// Padding marker.
pub const PAD_TOKEN: &str = "<pad>";
/// Sequence-start marker.
pub const BOS_TOKEN: &str = "<s>";
/// Sequence-end marker.
pub const EOS_TOKEN: &str = "</s>";

/// The reserved markers, in the order they are assigned ids.
pub const RESERVED_TOKENS: [&str; 4] = [UNK_TOKEN, PAD_TOKEN, BOS_TOKEN, EOS_TOKEN];

/// Forward mapping: token string -> ID
pub type Vocab = AHashMap<CompactString, u32>;

/// Insertion-ordered vocabulary with dense ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Symbols indexed by id
    symbols: Vec<CompactString>,
    /// Forward mapping: token string -> ID
    ids: Vocab,
    /// Reserved marker IDs (cached for fast access)
    pub special: SpecialTokens,
}

impl Vocabulary {
    /// Create a vocabulary holding only the four reserved markers.
    pub fn new() -> Self {
        Self::with_capacity(RESERVED_TOKENS.len())
    }

    /// Create a vocabulary with the reserved markers and room for `capacity` symbols.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut vocab = Self {
            symbols: Vec::with_capacity(capacity),
            ids: Vocab::with_capacity(capacity),
            special: SpecialTokens::default(),
        };
        let unk = vocab.add_token(UNK_TOKEN);
        let pad = vocab.add_token(PAD_TOKEN);
        let bos = vocab.add_token(BOS_TOKEN);
        let eos = vocab.add_token(EOS_TOKEN);
        vocab.special = SpecialTokens { unk, pad, bos, eos };
        vocab
    }

    /// Rebuild a vocabulary from `(symbol, id)` entries in any order.
    ///
    /// The ids must be unique and cover `0..entries.len()`, and the reserved
    /// markers must be present.
    pub fn from_entries<S: AsRef<str>>(entries: impl IntoIterator<Item = (S, u32)>) -> Result<Self> {
        let entries: Vec<(S, u32)> = entries.into_iter().collect();
        let mut slots: Vec<Option<CompactString>> = vec![None; entries.len()];
        let mut ids = Vocab::with_capacity(entries.len());

        for (symbol, id) in entries {
            let symbol = CompactString::new(symbol.as_ref());
            let index = id as usize;
            if index >= slots.len() {
                return Err(TokenizerError::Load(format!(
                    "Token ID {} is out of range for {} entries",
                    id,
                    slots.len()
                )));
            }
            if slots[index].is_some() {
                return Err(TokenizerError::Load(format!("Token ID {} already exists", id)));
            }
            if ids.insert(symbol.clone(), id).is_some() {
                return Err(TokenizerError::Load(format!(
                    "Token {:?} appears more than once",
                    symbol
                )));
            }
            slots[index] = Some(symbol);
        }

        let symbols = slots
            .into_iter()
            .enumerate()
            .map(|(id, slot)| {
                slot.ok_or_else(|| TokenizerError::Load(format!("Token ID {} is missing", id)))
            })
            .collect::<Result<Vec<_>>>()?;

        let lookup = |marker: &str| {
            ids.get(marker)
                .copied()
                .ok_or_else(|| TokenizerError::Load(format!("Reserved token {} is missing", marker)))
        };
        let special = SpecialTokens {
            unk: lookup(UNK_TOKEN)?,
            pad: lookup(PAD_TOKEN)?,
            bos: lookup(BOS_TOKEN)?,
            eos: lookup(EOS_TOKEN)?,
        };

        Ok(Self {
            symbols,
            ids,
            special,
        })
    }

    /// Add a token to the vocabulary.
    ///
    /// Returns the ID assigned to the token; an existing token keeps its ID.
    pub fn add_token(&mut self, token: &str) -> u32 {
        if let Some(&id) = self.ids.get(token) {
            return id;
        }

        let id = self.symbols.len() as u32;
        let token = CompactString::new(token);
        self.ids.insert(token.clone(), id);
        self.symbols.push(token);
        id
    }

    /// Get the ID for a token string.
    #[inline]
    pub fn get_id(&self, token: &str) -> Option<u32> {
        self.ids.get(token).copied()
    }

    /// Get the token string for an ID.
    #[inline]
    pub fn get_token(&self, id: u32) -> Option<&str> {
        self.symbols.get(id as usize).map(|s| s.as_str())
    }

    /// Whether the token is in the vocabulary.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.ids.contains_key(token)
    }

    /// Get the size of the vocabulary.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: the reserved markers are present from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate `(symbol, id)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .map(|(id, s)| (s.as_str(), id as u32))
    }

    /// Symbols in id order.
    pub fn symbols(&self) -> &[CompactString] {
        &self.symbols
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

/// Reserved marker IDs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialTokens {
    /// Unknown token ID
    pub unk: u32,
    /// Padding token ID
    pub pad: u32,
    /// Beginning of sequence token ID
    pub bos: u32,
    /// End of sequence token ID
    pub eos: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_markers_first() {
        let vocab = Vocabulary::new();

        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.get_id(UNK_TOKEN), Some(0));
        assert_eq!(vocab.get_id(PAD_TOKEN), Some(1));
        assert_eq!(vocab.get_id(BOS_TOKEN), Some(2));
        assert_eq!(vocab.get_id(EOS_TOKEN), Some(3));
        assert_eq!(
            vocab.special,
            SpecialTokens {
                unk: 0,
                pad: 1,
                bos: 2,
                eos: 3
            }
        );
    }

    #[test]
    fn test_add_token() {
        let mut vocab = Vocabulary::new();
        let id1 = vocab.add_token("hello");
        let id2 = vocab.add_token("world");

        assert_eq!(id1, 4);
        assert_eq!(id2, 5);
        assert_eq!(vocab.get_id("hello"), Some(4));
        assert_eq!(vocab.get_token(5), Some("world"));
        assert_eq!(vocab.get_token(6), None);
    }

    #[test]
    fn test_add_duplicate_token() {
        let mut vocab = Vocabulary::new();
        let id1 = vocab.add_token("hello");
        let id2 = vocab.add_token("hello");

        assert_eq!(id1, id2);
        assert_eq!(vocab.len(), 5);
    }

    #[test]
    fn test_from_entries_any_order() {
        let original = {
            let mut v = Vocabulary::new();
            v.add_token("a");
            v.add_token("b");
            v
        };
        let mut entries: Vec<(String, u32)> =
            original.iter().map(|(s, id)| (s.to_string(), id)).collect();
        entries.reverse();

        let rebuilt = Vocabulary::from_entries(entries).unwrap();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_from_entries_rejects_gaps() {
        let entries = vec![
            ("<unk>", 0),
            ("<pad>", 1),
            ("<s>", 2),
            ("</s>", 3),
            ("a", 5),
        ];
        let err = Vocabulary::from_entries(entries).unwrap_err();
        assert!(matches!(err, TokenizerError::Load(_)));
    }

    #[test]
    fn test_from_entries_rejects_out_of_range_id() {
        let entries = vec![
            ("<unk>", 0),
            ("<pad>", 1),
            ("<s>", 2),
            ("</s>", 3),
            ("x", u32::MAX),
        ];
        let err = Vocabulary::from_entries(entries).unwrap_err();
        assert!(matches!(err, TokenizerError::Load(_)));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_from_entries_requires_markers() {
        let entries = vec![("a", 0), ("b", 1)];
        let err = Vocabulary::from_entries(entries).unwrap_err();
        assert!(err.to_string().contains("<unk>"));
    }
}
