//! Corpus summarization.
//!
//! Raw text is reduced to a table of distinct whitespace-delimited words and
//! their occurrence counts. Words keep the order in which they were first
//! seen, which the trainer relies on for deterministic tie-breaking.

use ahash::AHashMap;
use compact_str::CompactString;

/// Distinct words and their counts, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    /// Distinct words
    words: Vec<CompactString>,
    /// `counts[i]` is the number of occurrences of `words[i]`
    counts: Vec<u64>,
    /// Word -> position in `words`
    index: AHashMap<CompactString, usize>,
}

impl WordCounts {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarize a sequence of raw texts.
    pub fn from_texts<S: AsRef<str>>(texts: impl IntoIterator<Item = S>) -> Self {
        let mut counts = Self::new();
        for text in texts {
            counts.add_text(text.as_ref());
        }
        counts
    }

    /// Split text on whitespace runs and count every word.
    pub fn add_text(&mut self, text: &str) {
        for word in text.split_whitespace() {
            self.add_word(word, 1);
        }
    }

    /// Add `count` occurrences of a single word.
    pub fn add_word(&mut self, word: &str, count: u64) {
        if let Some(&pos) = self.index.get(word) {
            self.counts[pos] += count;
            return;
        }

        let word = CompactString::new(word);
        self.index.insert(word.clone(), self.words.len());
        self.words.push(word);
        self.counts.push(count);
    }

    /// Occurrence count of a word, if seen.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&pos| self.counts[pos])
    }

    /// Iterate `(word, count)` in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.words
            .iter()
            .map(|w| w.as_str())
            .zip(self.counts.iter().copied())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words were seen.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total number of word occurrences.
    pub fn total_occurrences(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordCounts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_texts(iter)
    }
}
