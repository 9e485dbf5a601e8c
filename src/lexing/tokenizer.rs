//! Delimiter based tokenizer
//!
//!     Scans the source once with a cursor: skip a run of delimiters, then advance through
//!     non-delimiters to find the end of the token, yield the span between. Consecutive
//!     delimiters collapse and a trailing delimiter run produces no empty token.
//!
//!     Tokens are views into the source; nothing is copied. The iterator is lazy and
//!     forward-only. Restarting means calling [tokenize] again (or cloning a fresh
//!     iterator), there is no rewinding mid-iteration.

use super::delimiters::Delimiters;
use std::iter::FusedIterator;
use std::ops::Range;

/// A non-empty span of the source text, bounded by delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the token in the source
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length of the token in bytes
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }
}

/// Lazy iterator over the tokens of a source string
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    source: &'a str,
    cursor: usize,
    delimiters: Delimiters,
}

/// Split `source` on `delimiters`, yielding non-empty tokens left to right
pub fn tokenize(source: &str, delimiters: Delimiters) -> Tokens<'_> {
    Tokens {
        source,
        cursor: 0,
        delimiters,
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let source = self.source;
        let delimiters = self.delimiters;

        let rest = &source[self.cursor..];
        let Some(skipped) = rest.find(|c| !delimiters.contains(c)) else {
            self.cursor = source.len();
            return None;
        };

        let start = self.cursor + skipped;
        let end = source[start..]
            .find(|c| delimiters.contains(c))
            .map_or(source.len(), |len| start + len);
        self.cursor = end;

        Some(Token {
            text: &source[start..end],
            start,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // At most one token per two bytes, rounding up for a final token with no delimiter
        let remaining = self.source.len() - self.cursor;
        (0, Some(remaining.div_ceil(2)))
    }
}

impl FusedIterator for Tokens<'_> {}
