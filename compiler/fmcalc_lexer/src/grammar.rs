//! The FileMaker calculation grammar table.
//!
//! # States
//!
//! Two states carry the expectation of the scan:
//!
//! - `expression`: a value is expected next.
//! - `operator`: a value was just produced; an operator, a `;` separator,
//!   or a closing `)` / `]` is expected.
//!
//! Producing a value replaces `expression` with `operator`; an operator or
//! separator replaces `operator` with `expression`. Opening a call, a
//! parenthesized group, or a `[` list replaces the current state with
//! `operator` (the group is a value for the enclosing scope) and pushes a
//! fresh `expression` for its contents; the matching close pops back to it.
//!
//! `root` is the top-level scope. It does not track expectation: it splices
//! in `operator` and `expression` flattened (operators first, so `and` is
//! never read as a name), so values and operators stay in `root`, openers
//! push a nested `expression`, and closers have no rule there (a stray `)`
//! or `]` becomes an error token). A bare `[` at top level is an
//! error token outright. Balanced input therefore always ends in `[root]`.
//!
//! Because root accepts anything in any order, `x y` lexes cleanly at top
//! level, while inside a call the `y` after a value is an error token.
//!
//! Closers are not paired with openers: the stack records that a scope is
//! open, not which bracket opened it, so either `)` or `]` closes the
//! innermost call, group or list. `Sum ( 1 ]` ends balanced.
//!
//! The remaining states are fragments spliced into the two above:
//! `commentsandwhitespace`, `builtincall`, `field`, `function`, `builtin`,
//! `constant`, `list`, and `variable`, tried in that order. Builtin calls
//! shadow user calls of the same name; a qualified field is tried before
//! any builtin word, so `Pi::x` is a field; a user call is tried before
//! any builtin word, so `FileName ( 1 )` is a user function.

use fmcalc_lexer_core::{Entry, Grammar, GrammarError, StackOp};

use crate::builtins::{alternation, CONSTANTS, FUNCTIONS, NULLARY_FUNCTIONS};
use crate::kind::TokenKind;

pub const ROOT: &str = "root";
pub const EXPRESSION: &str = "expression";
pub const OPERATOR: &str = "operator";
pub const CONSTANT: &str = "constant";
pub const VARIABLE: &str = "variable";
pub const FIELD: &str = "field";
pub const FUNCTION: &str = "function";
pub const LIST: &str = "list";
pub const BUILTIN_CALL: &str = "builtincall";
pub const BUILTIN: &str = "builtin";
pub const COMMENTS_AND_WHITESPACE: &str = "commentsandwhitespace";

/// One character of a bare name: anything except whitespace and
/// `, + - * / ^ & = ≠ > < ( ) [ ] { } " ; : $`.
const NAME_CHAR: &str = r#"[^\s,+\-*/\^&=≠><()\[\]{}";:$]"#;

/// Value produced: expect an operator next.
const VALUE: StackOp = StackOp::PopPush(OPERATOR);
/// Operator or separator consumed: expect a value next.
const NEXT_VALUE: StackOp = StackOp::PopPush(EXPRESSION);
/// Group opened: the enclosing scope resumes in `operator` once it closes.
const OPEN: StackOp = StackOp::Nest(OPERATOR, EXPRESSION);

/// `Name`, optional whitespace, `(`.
const CALL_KINDS: &[TokenKind] = &[
    TokenKind::FunctionName,
    TokenKind::Whitespace,
    TokenKind::Punctuation,
];
const BUILTIN_CALL_KINDS: &[TokenKind] = &[
    TokenKind::BuiltinFunctionName,
    TokenKind::Whitespace,
    TokenKind::Punctuation,
];

pub(crate) fn build() -> Result<Grammar<TokenKind>, GrammarError> {
    Grammar::builder(ROOT)
        .state(
            ROOT,
            [
                Entry::token(r"\[", TokenKind::ErrorToken, StackOp::Stay),
                Entry::flatten(OPERATOR),
                Entry::flatten(EXPRESSION),
            ],
        )
        .state(
            EXPRESSION,
            [
                Entry::include(COMMENTS_AND_WHITESPACE),
                Entry::token(r"(?i:not)\b", TokenKind::OperatorWord, StackOp::Stay),
                Entry::token(r"[-+]", TokenKind::Operator, StackOp::Stay),
                Entry::include(BUILTIN_CALL),
                Entry::include(FIELD),
                Entry::include(FUNCTION),
                Entry::include(BUILTIN),
                Entry::include(CONSTANT),
                Entry::include(LIST),
                Entry::include(VARIABLE),
            ],
        )
        .state(
            OPERATOR,
            [
                Entry::include(COMMENTS_AND_WHITESPACE),
                Entry::token(r"≠|≤|≥|<>|<=|>=|[-+*/&\^=<>]", TokenKind::Operator, NEXT_VALUE),
                Entry::token(r"(?i:and|or|xor)\b", TokenKind::OperatorWord, NEXT_VALUE),
                Entry::token(";", TokenKind::Punctuation, NEXT_VALUE),
                Entry::token(r"[)\]]", TokenKind::Punctuation, StackOp::Pop),
            ],
        )
        .state(
            CONSTANT,
            [
                Entry::token(r#""(?:\\\\|\\"|[^"])*""#, TokenKind::StringLiteral, VALUE),
                Entry::token("¶", TokenKind::StringLiteral, VALUE),
                Entry::token(
                    r"(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?",
                    TokenKind::NumberLiteral,
                    VALUE,
                ),
            ],
        )
        .state(
            VARIABLE,
            [
                Entry::token(format!(r"\$\${NAME_CHAR}+"), TokenKind::GlobalVariable, VALUE),
                Entry::token(format!(r"\${NAME_CHAR}+"), TokenKind::LocalVariable, VALUE),
                Entry::token(format!("{NAME_CHAR}+"), TokenKind::BareName, VALUE),
            ],
        )
        .state(
            FIELD,
            [Entry::token(
                format!("{NAME_CHAR}+::{NAME_CHAR}+"),
                TokenKind::QualifiedFieldName,
                VALUE,
            )],
        )
        .state(
            FUNCTION,
            [
                Entry::groups(format!(r"({NAME_CHAR}+)(\s*)(\()"), CALL_KINDS, OPEN),
                Entry::token(r"\(", TokenKind::Punctuation, OPEN),
                Entry::token(r"\)", TokenKind::Punctuation, StackOp::Pop),
            ],
        )
        .state(
            LIST,
            [
                Entry::token(r"\[", TokenKind::Punctuation, OPEN),
                Entry::token(r"\]", TokenKind::Punctuation, StackOp::Pop),
                Entry::token(";", TokenKind::Punctuation, NEXT_VALUE),
            ],
        )
        .state(
            BUILTIN_CALL,
            [Entry::groups(
                format!(r"({})(\s*)(\()", alternation(FUNCTIONS)),
                BUILTIN_CALL_KINDS,
                OPEN,
            )],
        )
        .state(
            BUILTIN,
            [
                Entry::token(
                    format!(r"(?:{})\b", alternation(NULLARY_FUNCTIONS)),
                    TokenKind::BuiltinFunctionName,
                    VALUE,
                ),
                Entry::token(r"(?i:self)\b", TokenKind::SelfPseudo, VALUE),
                Entry::token(r"(?i:true|false)\b", TokenKind::BooleanLiteral, VALUE),
                Entry::token(
                    format!(r"(?i:{})\b", alternation(CONSTANTS)),
                    TokenKind::BuiltinConstant,
                    VALUE,
                ),
            ],
        )
        .state(
            COMMENTS_AND_WHITESPACE,
            [
                Entry::token(r"\s+", TokenKind::Whitespace, StackOp::Stay),
                Entry::token(r"//[^\n]*\n?", TokenKind::CommentLine, StackOp::Stay),
                Entry::token(
                    r"/(?:\\\n)?\*(?s:.*?)\*(?:\\\n)?/",
                    TokenKind::CommentBlock,
                    StackOp::Stay,
                ),
            ],
        )
        .build()
}

#[cfg(test)]
mod tests;
