//! Longest-match scanner compiled from a vocabulary.
//!
//! The matcher is a single regex alternation: a whitespace run first, then
//! every vocabulary symbol ordered longest first (ties by ascending id).
//! With leftmost-first alternation semantics this picks, at every position,
//! either the whole whitespace run or the longest symbol that matches.

use log::trace;
use regex::{Regex, RegexBuilder};
use subword_core::{Result, Vocabulary};

/// Compiled patterns for a large vocabulary exceed the regex defaults.
const REGEX_SIZE_LIMIT: usize = 1 << 30;

/// What a scanned segment of text is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A maximal run of whitespace
    Whitespace,
    /// A vocabulary symbol
    Symbol,
    /// A maximal run of characters no rule could match
    Unmatched,
}

/// One piece of scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'t> {
    /// Byte offset of the segment in the scanned text
    pub start: usize,
    /// The segment text
    pub text: &'t str,
    /// Segment classification
    pub kind: SegmentKind,
}

/// Compiled longest-match scanner.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compile a matcher for the symbols of `vocab`.
    pub fn compile(vocab: &Vocabulary) -> Result<Self> {
        let mut symbols: Vec<(&str, usize)> = vocab
            .iter()
            .filter(|(s, _)| !s.is_empty())
            .map(|(s, _)| (s, s.chars().count()))
            .collect();
        // Stable sort: equal lengths stay in id order.
        symbols.sort_by(|a, b| b.1.cmp(&a.1));

        let mut pattern = String::from(r"\s+");
        for (symbol, _) in &symbols {
            pattern.push('|');
            pattern.push_str(&regex::escape(symbol));
        }

        trace!(
            "Compiling matcher: {} symbols, pattern length {}",
            symbols.len(),
            pattern.len()
        );

        let regex = RegexBuilder::new(&pattern)
            .size_limit(REGEX_SIZE_LIMIT)
            .dfa_size_limit(REGEX_SIZE_LIMIT)
            .build()?;

        Ok(Self { regex })
    }

    /// Scan `text` into segments covering it end to end.
    pub fn scan<'m, 't>(&'m self, text: &'t str) -> Scan<'m, 't> {
        Scan {
            matches: self.regex.find_iter(text),
            text,
            pos: 0,
            pending: None,
        }
    }
}

/// Iterator over the segments of a text, see [`Matcher::scan`].
pub struct Scan<'m, 't> {
    matches: regex::Matches<'m, 't>,
    text: &'t str,
    pos: usize,
    pending: Option<regex::Match<'t>>,
}

impl<'m, 't> Scan<'m, 't> {
    fn matched(&mut self, m: regex::Match<'t>) -> Segment<'t> {
        self.pos = m.end();
        let kind = if m.as_str().starts_with(char::is_whitespace) {
            SegmentKind::Whitespace
        } else {
            SegmentKind::Symbol
        };
        Segment {
            start: m.start(),
            text: m.as_str(),
            kind,
        }
    }

    fn gap(&mut self, end: usize) -> Segment<'t> {
        let start = self.pos;
        self.pos = end;
        Segment {
            start,
            text: &self.text[start..end],
            kind: SegmentKind::Unmatched,
        }
    }
}

impl<'m, 't> Iterator for Scan<'m, 't> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(m) = self.pending.take() {
            return Some(self.matched(m));
        }

        match self.matches.next() {
            Some(m) if m.start() > self.pos => {
                self.pending = Some(m);
                Some(self.gap(m.start()))
            }
            Some(m) => Some(self.matched(m)),
            None if self.pos < self.text.len() => Some(self.gap(self.text.len())),
            None => None,
        }
    }
}
