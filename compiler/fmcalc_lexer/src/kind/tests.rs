use std::collections::HashSet;

use super::*;

#[test]
fn names_are_unique() {
    let names: HashSet<&str> = TokenKind::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(names.len(), TokenKind::ALL.len());
}

#[test]
fn display_matches_as_str() {
    for kind in TokenKind::ALL {
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn trivia_kinds() {
    let trivia: Vec<TokenKind> = TokenKind::ALL.into_iter().filter(|k| k.is_trivia()).collect();
    assert_eq!(
        trivia,
        vec![
            TokenKind::Whitespace,
            TokenKind::CommentLine,
            TokenKind::CommentBlock
        ]
    );
}

#[test]
fn error_class_is_error_token() {
    assert_eq!(<TokenKind as TokenClass>::ERROR, TokenKind::ErrorToken);
}

#[test]
fn serde_names_match_as_str() {
    for kind in TokenKind::ALL {
        let json = serde_json::to_string(&kind).unwrap_or_default();
        assert_eq!(json, format!("\"{}\"", kind.as_str()));
        let back: Option<TokenKind> = serde_json::from_str(&json).ok();
        assert_eq!(back, Some(kind));
    }
}
