//! Errors raised while building a grammar or running it.
//!
//! Unmatched input is *not* an error: it becomes an error token and lexing
//! continues. The types here describe defects in the grammar table itself.

use thiserror::Error;

use crate::rule::StateName;

/// A grammar table that cannot be used.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("state `{state}` is declared more than once")]
    DuplicateState { state: StateName },

    #[error("state `{state}` referenced from `{from}` is not declared")]
    UnknownState { state: StateName, from: StateName },

    #[error("invalid pattern {pattern:?} in state `{state}`")]
    InvalidPattern {
        state: StateName,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("state inclusion cycle: {path}")]
    IncludeCycle { path: String },

    #[error("root state `{state}` has a rule that leaves it: {pattern:?}")]
    RootPops { state: StateName, pattern: String },

    #[error(
        "pattern {pattern:?} in state `{state}` declares {declared} group kinds \
         but has {available} capture groups"
    )]
    GroupMismatch {
        state: StateName,
        pattern: String,
        declared: usize,
        available: usize,
    },
}

/// A lexing run that had to stop.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A transition tried to remove the root state.
    ///
    /// `depth` is the stack depth before the transition and `popped` the
    /// number of levels it tried to remove.
    #[error(
        "state stack underflow in `{state}` at byte {offset}: \
         cannot pop {popped} of {depth} level(s)"
    )]
    StackUnderflow {
        state: StateName,
        offset: usize,
        depth: usize,
        popped: usize,
    },
}
