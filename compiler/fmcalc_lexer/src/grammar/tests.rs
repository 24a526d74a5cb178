use fmcalc_lexer_core::{Emit, StackOp};
use pretty_assertions::assert_eq;

use super::*;

fn grammar() -> Grammar<TokenKind> {
    match build() {
        Ok(grammar) => grammar,
        Err(err) => panic!("FileMaker grammar failed to build: {err}"),
    }
}

/// Position of the first rule in `state` that emits `kind` (alone or as the
/// first group).
fn first_emitting(grammar: &Grammar<TokenKind>, state: &str, kind: TokenKind) -> usize {
    let rules = grammar.rules(state).unwrap_or_default();
    rules
        .iter()
        .position(|rule| match rule.emit() {
            Emit::Token(k) => k == kind,
            Emit::Groups(kinds) => kinds.first() == Some(&kind),
        })
        .unwrap_or_else(|| panic!("no rule in {state} emits {kind}"))
}

// === Shape ===

#[test]
fn declares_every_state() {
    let grammar = grammar();
    assert_eq!(
        grammar.state_names(),
        &[
            ROOT,
            EXPRESSION,
            OPERATOR,
            CONSTANT,
            VARIABLE,
            FIELD,
            FUNCTION,
            LIST,
            BUILTIN_CALL,
            BUILTIN,
            COMMENTS_AND_WHITESPACE,
        ]
    );
    assert_eq!(grammar.name(grammar.root()), ROOT);
}

#[test]
fn root_never_leaves_itself() {
    let grammar = grammar();
    for rule in grammar.rules(ROOT).unwrap_or_default() {
        assert!(
            !rule.op().leaves_current(),
            "root rule {} leaves root via {:?}",
            rule.pattern(),
            rule.op()
        );
    }
}

#[test]
fn root_rejects_list_open_first() {
    let grammar = grammar();
    let first = &grammar.rules(ROOT).unwrap_or_default()[0];
    assert_eq!(first.pattern(), r"\[");
    assert_eq!(first.emit(), Emit::Token(TokenKind::ErrorToken));
}

#[test]
fn operator_closers_pop() {
    let grammar = grammar();
    let closer = grammar
        .rules(OPERATOR)
        .unwrap_or_default()
        .iter()
        .find(|rule| rule.pattern() == r"[)\]]")
        .map(|rule| rule.op());
    assert_eq!(closer, Some(StackOp::Pop));
}

// === Ordering ===

#[test]
fn builtins_shadow_user_functions() {
    let grammar = grammar();
    let builtin = first_emitting(&grammar, EXPRESSION, TokenKind::BuiltinFunctionName);
    let function = first_emitting(&grammar, EXPRESSION, TokenKind::FunctionName);
    assert!(builtin < function);
}

#[test]
fn names_before_builtin_words() {
    let grammar = grammar();
    let field = first_emitting(&grammar, EXPRESSION, TokenKind::QualifiedFieldName);
    let function = first_emitting(&grammar, EXPRESSION, TokenKind::FunctionName);
    for word in [
        TokenKind::SelfPseudo,
        TokenKind::BooleanLiteral,
        TokenKind::BuiltinConstant,
    ] {
        let word_at = first_emitting(&grammar, EXPRESSION, word);
        assert!(field < word_at, "{word}");
        assert!(function < word_at, "{word}");
    }
}

#[test]
fn qualified_fields_before_bare_names() {
    let grammar = grammar();
    let field = first_emitting(&grammar, EXPRESSION, TokenKind::QualifiedFieldName);
    let global = first_emitting(&grammar, EXPRESSION, TokenKind::GlobalVariable);
    let local = first_emitting(&grammar, EXPRESSION, TokenKind::LocalVariable);
    let bare = first_emitting(&grammar, EXPRESSION, TokenKind::BareName);
    assert!(field < global);
    assert!(global < local);
    assert!(local < bare);
}

#[test]
fn bare_name_is_the_last_expression_rule() {
    let grammar = grammar();
    let rules = grammar.rules(EXPRESSION).unwrap_or_default();
    let bare = first_emitting(&grammar, EXPRESSION, TokenKind::BareName);
    assert_eq!(bare, rules.len() - 1);
}

#[test]
fn root_tries_operator_words_before_names() {
    let grammar = grammar();
    let word = first_emitting(&grammar, ROOT, TokenKind::OperatorWord);
    let bare = first_emitting(&grammar, ROOT, TokenKind::BareName);
    assert!(word < bare);
}

#[test]
fn trivia_comes_first_in_expectation_states() {
    let grammar = grammar();
    for state in [EXPRESSION, OPERATOR] {
        assert_eq!(first_emitting(&grammar, state, TokenKind::Whitespace), 0);
    }
}
