use super::*;

#[test]
fn registration() {
    assert_eq!(LEXER_INFO.name, "FileMaker");
    assert_eq!(LEXER_INFO.aliases, &["fmcalc"]);
    assert_eq!(LEXER_INFO.filenames, &["*.fmcalc", "*.fmfn"]);
}

#[test]
fn matches_known_extensions() {
    assert!(LEXER_INFO.matches_filename("invoice.fmcalc"));
    assert!(LEXER_INFO.matches_filename("lib/CustomFunctions/Tax.fmfn"));
    assert!(LEXER_INFO.matches_filename(r"C:\calcs\Total.FMCALC"));
}

#[test]
fn rejects_other_files() {
    assert!(!LEXER_INFO.matches_filename("invoice.fmcalc.bak"));
    assert!(!LEXER_INFO.matches_filename("notes.txt"));
    assert!(!LEXER_INFO.matches_filename("dir.fmfn/readme"));
}

#[test]
fn bare_extension_is_not_a_match() {
    assert!(!LEXER_INFO.matches_filename(".fmfn"));
}

#[test]
fn non_ascii_names_do_not_panic() {
    assert!(LEXER_INFO.matches_filename("計算.fmcalc"));
    assert!(!LEXER_INFO.matches_filename("é"));
}
