//! Token taxonomy for FileMaker calculations.
//!
//! This enumeration is the contract with highlighters: renderers map each
//! kind to a display style. Adding a kind is a breaking change for them, and
//! the `snake_case` names returned by [`TokenKind::as_str`] (also the serde
//! representation) must stay stable.

use std::fmt;

use fmcalc_lexer_core::TokenClass;
use serde::{Deserialize, Serialize};

/// Classification of a FileMaker calculation token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    // === Trivia ===
    /// Run of whitespace, newlines included.
    Whitespace,
    /// `// ...` through end of line, the newline included.
    CommentLine,
    /// `/* ... */`.
    CommentBlock,

    // === Literals ===
    /// `"..."` or a pilcrow `¶`.
    StringLiteral,
    NumberLiteral,
    /// `True` / `False`, any case.
    BooleanLiteral,

    // === Operators & punctuation ===
    /// Symbolic operators: `+ - * / ^ & = ≠ <> < > <= >= ≤ ≥`.
    Operator,
    /// `and`, `or`, `xor`, `not`.
    OperatorWord,
    /// `( ) [ ] ;`.
    Punctuation,
    /// Reserved for grammars that classify delimiters as keywords.
    Keyword,

    // === Names ===
    /// User-defined function name in call position.
    FunctionName,
    /// Built-in function name.
    BuiltinFunctionName,
    /// `Get()` parameter or text style constant.
    BuiltinConstant,
    /// `Self`.
    SelfPseudo,
    /// `$$name`.
    GlobalVariable,
    /// `$name`.
    LocalVariable,
    /// Bare name: field, `Let` variable, or anything else identifier-like.
    BareName,
    /// `Table::Field`.
    QualifiedFieldName,

    // === Errors ===
    /// A single character no rule accepted.
    ErrorToken,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 19] = [
        TokenKind::Whitespace,
        TokenKind::CommentLine,
        TokenKind::CommentBlock,
        TokenKind::StringLiteral,
        TokenKind::NumberLiteral,
        TokenKind::BooleanLiteral,
        TokenKind::Operator,
        TokenKind::OperatorWord,
        TokenKind::Punctuation,
        TokenKind::Keyword,
        TokenKind::FunctionName,
        TokenKind::BuiltinFunctionName,
        TokenKind::BuiltinConstant,
        TokenKind::SelfPseudo,
        TokenKind::GlobalVariable,
        TokenKind::LocalVariable,
        TokenKind::BareName,
        TokenKind::QualifiedFieldName,
        TokenKind::ErrorToken,
    ];

    /// Stable name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::CommentLine => "comment_line",
            TokenKind::CommentBlock => "comment_block",
            TokenKind::StringLiteral => "string_literal",
            TokenKind::NumberLiteral => "number_literal",
            TokenKind::BooleanLiteral => "boolean_literal",
            TokenKind::Operator => "operator",
            TokenKind::OperatorWord => "operator_word",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Keyword => "keyword",
            TokenKind::FunctionName => "function_name",
            TokenKind::BuiltinFunctionName => "builtin_function_name",
            TokenKind::BuiltinConstant => "builtin_constant",
            TokenKind::SelfPseudo => "self_pseudo",
            TokenKind::GlobalVariable => "global_variable",
            TokenKind::LocalVariable => "local_variable",
            TokenKind::BareName => "bare_name",
            TokenKind::QualifiedFieldName => "qualified_field_name",
            TokenKind::ErrorToken => "error_token",
        }
    }

    /// Whitespace and comments.
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::CommentLine | TokenKind::CommentBlock
        )
    }
}

impl TokenClass for TokenKind {
    const ERROR: Self = TokenKind::ErrorToken;
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
