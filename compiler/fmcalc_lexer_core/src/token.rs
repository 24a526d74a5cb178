//! Classified spans of source text.

use std::fmt;
use std::ops::Range;

/// Token kinds supplied by a grammar.
///
/// The engine treats kinds as opaque data carried from a rule to the token
/// it emits. The one kind it must know about is the error kind, used for
/// characters no rule in the active state accepts.
pub trait TokenClass: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Kind of the single-character token emitted for unmatched input.
    const ERROR: Self;
}

/// A classified, positioned span of source text.
///
/// Offsets are byte offsets into the source; `end` is exclusive. `text` is
/// always `&source[start..end]` and is never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src, K> {
    pub kind: K,
    pub text: &'src str,
    pub start: usize,
    pub end: usize,
}

impl<'src, K: TokenClass> Token<'src, K> {
    pub(crate) fn new(kind: K, source: &'src str, start: usize, end: usize) -> Self {
        debug_assert!(start < end, "tokens are never zero-width");
        Token {
            kind,
            text: &source[start..end],
            start,
            end,
        }
    }

    /// Byte range of the token in the source.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns `true` for tokens produced by the unmatched-input fallback.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == K::ERROR
    }
}

impl<K: fmt::Debug> fmt::Display for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}..{}", self.kind, self.text, self.start, self.end)
    }
}
