//! Lexer for FileMaker calculation formulas.
//!
//! A FileMaker grammar table driven by [`fmcalc_lexer_core`]. The table
//! tracks whether a value or an operator is expected next and how deeply
//! calls, parenthesized groups and `[ ... ]` lists are nested, so that, for
//! example, a user-defined function in call position is told apart from a
//! bare field name.
//!
//! Lexing never fails on malformed formulas. Every byte of input lands in
//! exactly one token; anything unrecognized becomes a one-character
//! [`TokenKind::ErrorToken`].
//!
//! ```ignore
//! let kinds: Vec<_> = fmcalc_lexer::tokenize("Sum ( 1 ; 2 )").map(|t| t.kind).collect();
//! ```

mod builtins;
mod grammar;
mod info;
mod kind;

use std::sync::OnceLock;

pub use fmcalc_lexer_core::{Grammar, GrammarError, LexError, Lexer};

pub use grammar::{
    BUILTIN, BUILTIN_CALL, COMMENTS_AND_WHITESPACE, CONSTANT, EXPRESSION, FIELD, FUNCTION, LIST,
    OPERATOR, ROOT, VARIABLE,
};
pub use info::{LexerInfo, LEXER_INFO};
pub use kind::TokenKind;

/// A FileMaker token borrowing from the formula text.
pub type Token<'src> = fmcalc_lexer_core::Token<'src, TokenKind>;

static GRAMMAR: OnceLock<Grammar<TokenKind>> = OnceLock::new();

/// The FileMaker grammar table (built on first use).
///
/// # Panics
///
/// If the built-in table is malformed. That is a bug in this crate and is
/// caught by its tests, never by input.
pub fn grammar() -> &'static Grammar<TokenKind> {
    GRAMMAR.get_or_init(|| {
        tracing::debug!("building FileMaker grammar");
        grammar::build().unwrap_or_else(|err| panic!("FileMaker grammar is malformed: {err}"))
    })
}

/// Lazily lex `source`.
///
/// The returned lexer is a fused iterator of tokens. Inspect
/// [`Lexer::stack`] after exhausting it to see whether every call, group and
/// list was closed: balanced formulas end with the stack at exactly
/// `["root"]`.
pub fn tokenize(source: &str) -> Lexer<'static, '_, TokenKind> {
    grammar().tokenize(source)
}

/// Lex all of `source` into a vector.
///
/// # Errors
///
/// Only on a state stack underflow, which the FileMaker table never
/// produces; a malformed formula is not an error.
pub fn try_tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    grammar().try_tokenize(source)
}
