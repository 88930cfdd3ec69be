//! Pair counting for BPE training.
//!
//! [`PairCounter`] holds the current symbol split of every distinct word and
//! rebuilds the weighted pair frequencies from scratch on each merge step.

use super::corpus::WordCounts;
use ahash::AHashMap;
use subword_core::{Pair, Result, TokenizerError, Vocabulary};

/// Pair frequencies in the order pairs were first counted.
#[derive(Debug, Clone, Default)]
pub struct PairTable {
    /// (pair, weighted frequency) in first-insertion order
    entries: Vec<(Pair, u64)>,
    /// Pair -> position in `entries`
    index: AHashMap<Pair, usize>,
}

impl PairTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` to a pair's frequency.
    #[inline]
    pub fn add(&mut self, pair: Pair, count: u64) {
        match self.index.get(&pair) {
            Some(&pos) => self.entries[pos].1 += count,
            None => {
                self.index.insert(pair, self.entries.len());
                self.entries.push((pair, count));
            }
        }
    }

    /// Frequency of a pair.
    pub fn get(&self, pair: Pair) -> Option<u64> {
        self.index.get(&pair).map(|&pos| self.entries[pos].1)
    }

    /// The pair with the highest frequency.
    ///
    /// Ties go to the pair that was inserted first.
    pub fn most_frequent(&self) -> Option<(Pair, u64)> {
        let mut best: Option<(Pair, u64)> = None;
        for &(pair, count) in &self.entries {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((pair, count)),
            }
        }
        best
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no pairs were counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Current symbol splits of all distinct words.
pub struct PairCounter {
    /// Word -> current split (as token IDs)
    words: Vec<Vec<u32>>,
    /// Word -> frequency count
    word_counts: Vec<u64>,
}

impl PairCounter {
    /// Split every word of the table into per-character token IDs.
    ///
    /// Every character must already be in `vocab`.
    pub fn new(word_counts: &WordCounts, vocab: &Vocabulary) -> Result<Self> {
        let mut words = Vec::with_capacity(word_counts.len());
        let mut counts = Vec::with_capacity(word_counts.len());

        for (word, count) in word_counts.iter() {
            let mut buf = [0u8; 4];
            let split = word
                .chars()
                .map(|c| {
                    vocab.get_id(c.encode_utf8(&mut buf)).ok_or_else(|| {
                        TokenizerError::Training(format!(
                            "character {:?} of word {:?} is not in the vocabulary",
                            c, word
                        ))
                    })
                })
                .collect::<Result<Vec<u32>>>()?;
            words.push(split);
            counts.push(count);
        }

        Ok(Self {
            words,
            word_counts: counts,
        })
    }

    /// Count adjacent pairs over all words, weighted by word frequency.
    ///
    /// Words are visited in first-insertion order and pairs left to right,
    /// which fixes the tie-break order of the resulting table.
    pub fn count_pairs(&self) -> PairTable {
        let mut pairs = PairTable::new();

        for (word, &count) in self.words.iter().zip(self.word_counts.iter()) {
            for window in word.windows(2) {
                pairs.add((window[0], window[1]), count);
            }
        }

        pairs
    }

    /// Replace every occurrence of `pair` with `new_token_id`, in all words.
    ///
    /// Scans left to right; after a replacement the scan continues at the
    /// same position, so `a a a` merged on `(a, a)` becomes `aa a`.
    /// Returns the number of replacements.
    pub fn merge_pair(&mut self, pair: Pair, new_token_id: u32) -> usize {
        let mut replaced = 0;

        for word in &mut self.words {
            let mut i = 0;
            while i + 1 < word.len() {
                if word[i] == pair.0 && word[i + 1] == pair.1 {
                    word[i] = new_token_id;
                    word.remove(i + 1);
                    replaced += 1;
                } else {
                    i += 1;
                }
            }
        }

        replaced
    }

    /// Get the number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Get a reference to the current splits.
    pub fn words(&self) -> &[Vec<u32>] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(texts: &[&str]) -> (Vocabulary, PairCounter) {
        let counts = WordCounts::from_texts(texts);
        let mut vocab = Vocabulary::new();
        for (word, _) in counts.iter() {
            for c in word.chars() {
                vocab.add_token(&c.to_string());
            }
        }
        let counter = PairCounter::new(&counts, &vocab).unwrap();
        (vocab, counter)
    }

    fn id(vocab: &Vocabulary, s: &str) -> u32 {
        vocab.get_id(s).unwrap()
    }

    #[test]
    fn test_initial_split_is_characters() {
        let (vocab, counter) = setup(&["abc"]);
        assert_eq!(counter.word_count(), 1);
        assert_eq!(
            counter.words()[0],
            vec![id(&vocab, "a"), id(&vocab, "b"), id(&vocab, "c")]
        );
    }

    #[test]
    fn test_unknown_character_is_an_error() {
        let counts = WordCounts::from_texts(["xyz"]);
        let vocab = Vocabulary::new();
        assert!(PairCounter::new(&counts, &vocab).is_err());
    }

    #[test]
    fn test_count_pairs_with_frequency() {
        let (vocab, counter) = setup(&["ab ab ab bc"]);
        let pairs = counter.count_pairs();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs.get((id(&vocab, "a"), id(&vocab, "b"))), Some(3));
        assert_eq!(pairs.get((id(&vocab, "b"), id(&vocab, "c"))), Some(1));
    }

    #[test]
    fn test_single_symbol_words_have_no_pairs() {
        let (_, counter) = setup(&["a b c"]);
        assert!(counter.count_pairs().is_empty());
    }

    #[test]
    fn test_most_frequent_prefers_first_inserted_on_tie() {
        let mut table = PairTable::new();
        table.add((7, 8), 2);
        table.add((1, 2), 3);
        table.add((5, 6), 3);
        table.add((7, 8), 1);

        assert_eq!(table.most_frequent(), Some(((7, 8), 3)));
        assert_eq!(PairTable::new().most_frequent(), None);
    }

    #[test]
    fn test_merge_is_left_to_right_non_overlapping() {
        let (mut vocab, mut counter) = setup(&["aaa aaaa"]);
        let a = id(&vocab, "a");
        let aa = vocab.add_token("aa");

        let replaced = counter.merge_pair((a, a), aa);

        assert_eq!(replaced, 3);
        assert_eq!(counter.words()[0], vec![aa, a]);
        assert_eq!(counter.words()[1], vec![aa, aa]);
    }

    #[test]
    fn test_merge_leaves_other_pairs() {
        let (mut vocab, mut counter) = setup(&["abab ba"]);
        let (a, b) = (id(&vocab, "a"), id(&vocab, "b"));
        let ab = vocab.add_token("ab");

        counter.merge_pair((a, b), ab);

        assert_eq!(counter.words()[0], vec![ab, ab]);
        assert_eq!(counter.words()[1], vec![b, a]);
    }
}
