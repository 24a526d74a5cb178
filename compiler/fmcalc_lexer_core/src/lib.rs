//! Rule-table driven lexer engine with a state stack.
//!
//! A [`Grammar`] is a fixed set of named states. Each state is an ordered
//! list of [`Rule`]s: a regular expression anchored at the current position,
//! the token kind(s) it emits, and a [`StackOp`] applied to the state stack
//! after it matches. The [`Lexer`] repeatedly asks the state on top of the
//! stack for the first matching rule, emits its tokens, and applies the
//! transition.
//!
//! # Design
//!
//! - **First match wins.** Rules are tried in declaration order. There is no
//!   longest-match disambiguation; ordering is the grammar's tie-break.
//! - **Lossless.** Every byte of input lands in exactly one token. Whitespace
//!   and comments are tokens like any other.
//! - **Never aborts on bad input.** When no rule matches, a single character
//!   is emitted as an error token (see [`TokenClass::ERROR`]) and lexing
//!   continues.
//! - **Composition at build time.** States may splice in other states' rules
//!   ([`Entry::Include`], [`Entry::Flatten`]). This is resolved once in
//!   [`GrammarBuilder::build`]; per-step lookup is a slice index.
//!
//! The only condition that halts a run is popping past the root state, which
//! is a bug in the grammar table rather than in the input. See
//! [`LexError::StackUnderflow`].
//!
//! # Tracing
//!
//! - `RUST_LOG=fmcalc_lexer_core=debug`: grammar construction summaries.
//! - `RUST_LOG=fmcalc_lexer_core=trace`: every rule match and transition.

mod cursor;
mod error;
mod grammar;
mod lexer;
mod rule;
mod token;

pub use error::{GrammarError, LexError};
pub use grammar::{Grammar, GrammarBuilder, StateId};
pub use lexer::Lexer;
pub use rule::{Emit, Entry, Rule, StackOp, StateName};
pub use token::{Token, TokenClass};
