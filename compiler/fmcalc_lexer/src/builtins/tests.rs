use std::collections::HashSet;

use super::*;

#[test]
fn lists_have_no_duplicates() {
    for list in [FUNCTIONS, NULLARY_FUNCTIONS, CONSTANTS] {
        let unique: HashSet<&str> = list.iter().copied().collect();
        assert_eq!(unique.len(), list.len());
    }
}

#[test]
fn names_are_plain_identifiers() {
    for name in FUNCTIONS.iter().chain(NULLARY_FUNCTIONS).chain(CONSTANTS) {
        assert!(
            name.chars().all(|c| c.is_ascii_alphanumeric()),
            "{name:?} is not a plain identifier"
        );
    }
}

#[test]
fn nullary_functions_are_not_call_functions() {
    for name in NULLARY_FUNCTIONS {
        assert!(!FUNCTIONS.contains(name), "{name}");
    }
}

#[test]
fn alternation_puts_longer_words_first() {
    assert_eq!(alternation(&["Get", "GetAsText", "Day"]), "GetAsText|Day|Get");
}

#[test]
fn alternation_dedups_and_escapes() {
    assert_eq!(alternation(&["a.b", "a.b"]), r"a\.b");
}
