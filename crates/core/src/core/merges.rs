//! Merge table for BPE.
//!
//! Merges are kept in the order they were learned; a merge's position is its
//! rank. Pairs are stored as token IDs for fast comparison during training;
//! the symbol strings are recovered through the
//! [`Vocabulary`](super::Vocabulary).

/// A pair of token IDs that can be merged.
pub type Pair = (u32, u32);

/// One learned merge rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    /// The adjacent pair that was merged
    pub pair: Pair,
    /// ID of the symbol the pair produces
    pub new_token_id: u32,
    /// Weighted pair frequency at the step the merge was learned
    pub frequency: u64,
}

/// Ordered collection of BPE merge rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeTable {
    /// Merges in learning order; the index is the merge rank
    merges: Vec<Merge>,
}

impl MergeTable {
    /// Create a new empty merge table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new merge table with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            merges: Vec::with_capacity(capacity),
        }
    }

    /// Append a merge rule and return its rank.
    pub fn push(&mut self, merge: Merge) -> u32 {
        let rank = self.merges.len() as u32;
        self.merges.push(merge);
        rank
    }

    /// Merges in learning order.
    pub fn iter(&self) -> std::slice::Iter<'_, Merge> {
        self.merges.iter()
    }

    /// Get the number of merge rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.merges.len()
    }

    /// Check if there are no merge rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty()
    }
}

impl<'a> IntoIterator for &'a MergeTable {
    type Item = &'a Merge;
    type IntoIter = std::slice::Iter<'a, Merge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
