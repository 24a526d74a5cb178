use pretty_assertions::assert_eq;

use crate::{Entry, Grammar, LexError, StackOp, TokenClass};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Space,
    Word,
    Call,
    Open,
    Close,
    Op,
    Error,
}

impl TokenClass for Kind {
    const ERROR: Self = Kind::Error;
}

/// A miniature two-expectation grammar: values, infix `+`, calls `f(`.
fn toy() -> Grammar<Kind> {
    let grammar = Grammar::builder("root")
        .state("trivia", [Entry::token(r"\s+", Kind::Space, StackOp::Stay)])
        .state(
            "value",
            [
                Entry::include("trivia"),
                Entry::groups(
                    r"(\w+)(\s*)(\()",
                    &[Kind::Call, Kind::Space, Kind::Open],
                    StackOp::Nest("infix", "value"),
                ),
                Entry::token(r"\w+", Kind::Word, StackOp::PopPush("infix")),
                Entry::token(r"\)", Kind::Close, StackOp::Pop),
            ],
        )
        .state(
            "infix",
            [
                Entry::include("trivia"),
                Entry::token(r"\+", Kind::Op, StackOp::PopPush("value")),
                Entry::token(r"\)", Kind::Close, StackOp::Pop),
            ],
        )
        .state("root", [Entry::flatten("value"), Entry::flatten("infix")])
        .build();
    match grammar {
        Ok(grammar) => grammar,
        Err(err) => panic!("toy grammar is invalid: {err}"),
    }
}

fn lex(source: &str) -> Vec<(Kind, &str)> {
    toy().tokenize(source).map(|t| (t.kind, t.text)).collect()
}

// === Basic matching ===

#[test]
fn empty_source_yields_nothing() {
    assert_eq!(lex(""), vec![]);
}

#[test]
fn first_matching_rule_wins() {
    // `f(` is a call, not a word followed by a stray paren.
    assert_eq!(
        lex("f(x)"),
        vec![
            (Kind::Call, "f"),
            (Kind::Open, "("),
            (Kind::Word, "x"),
            (Kind::Close, ")"),
        ]
    );
}

#[test]
fn group_rule_emits_one_token_per_group() {
    assert_eq!(
        lex("f (x)"),
        vec![
            (Kind::Call, "f"),
            (Kind::Space, " "),
            (Kind::Open, "("),
            (Kind::Word, "x"),
            (Kind::Close, ")"),
        ]
    );
}

#[test]
fn offsets_are_byte_offsets() {
    let grammar = toy();
    let spans: Vec<(usize, usize)> = grammar.tokenize("ab + c").map(|t| (t.start, t.end)).collect();
    assert_eq!(spans, vec![(0, 2), (2, 3), (3, 4), (4, 5), (5, 6)]);
}

// === Error fallback ===

#[test]
fn unmatched_char_becomes_error_token() {
    assert_eq!(
        lex("a # b"),
        vec![
            (Kind::Word, "a"),
            (Kind::Space, " "),
            (Kind::Error, "#"),
            (Kind::Space, " "),
            (Kind::Word, "b"),
        ]
    );
}

#[test]
fn error_token_covers_one_whole_char() {
    let grammar = toy();
    let tokens: Vec<_> = grammar.tokenize("≠").collect();
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_error());
    assert_eq!(tokens[0].text, "≠");
    assert_eq!(tokens[0].span(), 0..3);
}

#[test]
fn stray_close_at_top_level_is_error() {
    // Popping rules are dropped when flattened into the root.
    assert_eq!(lex(")"), vec![(Kind::Error, ")")]);
}

// === State stack ===

#[test]
fn nesting_returns_to_root() {
    let grammar = toy();
    let mut lexer = grammar.tokenize("f(g(x) + y)");
    let mut depths = Vec::new();
    while lexer.next().is_some() {
        depths.push(lexer.depth());
    }
    assert_eq!(lexer.stack(), vec!["root"]);
    assert_eq!(depths.iter().max().copied(), Some(3));
    assert!(lexer.error().is_none());
}

#[test]
fn unbalanced_input_ends_without_error() {
    let grammar = toy();
    let mut lexer = grammar.tokenize("f(g(x");
    let count = lexer.by_ref().count();
    assert_eq!(count, 5);
    assert_eq!(lexer.stack(), vec!["root", "infix", "infix"]);
    assert!(lexer.error().is_none());
}

#[test]
fn position_tracks_consumed_input() {
    let grammar = toy();
    let mut lexer = grammar.tokenize("ab cd");
    assert_eq!(lexer.position(), 0);
    lexer.next();
    assert_eq!(lexer.position(), 2);
    lexer.next();
    assert_eq!(lexer.position(), 3);
}

#[test]
fn iterator_is_fused() {
    let grammar = toy();
    let mut lexer = grammar.tokenize("x");
    assert!(lexer.next().is_some());
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

// === Underflow ===

fn popping_grammar() -> Grammar<Kind> {
    let grammar = Grammar::builder("root")
        .state("root", [Entry::token(r"\(", Kind::Open, StackOp::Push("inner"))])
        .state(
            "inner",
            [
                Entry::token(r"\)\)", Kind::Close, StackOp::PopN(2)),
                Entry::token(r"\)", Kind::Close, StackOp::Pop),
            ],
        )
        .build();
    match grammar {
        Ok(grammar) => grammar,
        Err(err) => panic!("grammar is invalid: {err}"),
    }
}

#[test]
fn underflow_halts_after_emitting_the_match() {
    let grammar = popping_grammar();
    let mut lexer = grammar.tokenize("())rest");
    let tokens: Vec<_> = lexer.by_ref().map(|t| (t.kind, t.text)).collect();
    assert_eq!(tokens, vec![(Kind::Open, "("), (Kind::Close, "))")]);
    assert_eq!(
        lexer.error(),
        Some(&LexError::StackUnderflow {
            state: "inner",
            offset: 1,
            depth: 2,
            popped: 2,
        })
    );
    assert_eq!(lexer.stack(), vec!["root", "inner"]);
    assert!(lexer.next().is_none());
}

#[test]
fn try_tokenize_surfaces_underflow() {
    let grammar = popping_grammar();
    assert!(matches!(
        grammar.try_tokenize("())"),
        Err(LexError::StackUnderflow { .. })
    ));
    let tokens = grammar.try_tokenize("()");
    assert_eq!(tokens.map(|t| t.len()), Ok(2));
}

#[test]
fn underflow_message() {
    let err = LexError::StackUnderflow {
        state: "inner",
        offset: 4,
        depth: 2,
        popped: 2,
    };
    assert_eq!(
        err.to_string(),
        "state stack underflow in `inner` at byte 4: cannot pop 2 of 2 level(s)"
    );
}
