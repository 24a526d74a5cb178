//! `fmcalc lex`: dump the token stream of a calculation.

use std::fmt::Write as _;

use fmcalc_lexer::{tokenize, LexError, Token, TokenKind};
use serde::Serialize;

use super::read_input;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line.
    #[default]
    Text,
    /// A JSON array of `{kind, text, start, end}` objects.
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct LexOptions {
    pub format: OutputFormat,
    /// Drop whitespace and comments from the output.
    pub skip_trivia: bool,
}

/// Result of lexing one input.
#[derive(Debug)]
pub(crate) struct Lexed<'src> {
    pub tokens: Vec<Token<'src>>,
    /// States left on the stack above `root` at end of input.
    pub open_scopes: Vec<&'static str>,
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: TokenKind,
    text: &'a str,
    start: usize,
    end: usize,
}

/// Lex a file (or stdin) and print its tokens.
#[tracing::instrument(level = "debug", skip(options))]
pub fn lex_file(path: &str, options: &LexOptions) {
    let source = read_input(path);

    let lexed = match lex_source(&source, options.skip_trivia) {
        Ok(lexed) => lexed,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    match options.format {
        OutputFormat::Text => print!("{}", render_text(path, &lexed.tokens)),
        OutputFormat::Json => match render_json(&lexed.tokens) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: cannot serialize tokens: {err}");
                std::process::exit(1);
            }
        },
    }

    if !lexed.open_scopes.is_empty() {
        eprintln!(
            "warning: {} scope(s) still open at end of input ({})",
            lexed.open_scopes.len(),
            lexed.open_scopes.join(" > ")
        );
    }
}

pub(crate) fn lex_source(source: &str, skip_trivia: bool) -> Result<Lexed<'_>, LexError> {
    let mut lexer = tokenize(source);
    let tokens: Vec<_> = lexer
        .by_ref()
        .filter(|token| !(skip_trivia && token.kind.is_trivia()))
        .collect();
    let open_scopes = lexer.stack().split_off(1);
    match lexer.into_error() {
        Some(err) => Err(err),
        None => Ok(Lexed {
            tokens,
            open_scopes,
        }),
    }
}

pub(crate) fn render_text(path: &str, tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in tokens {
        let _ = writeln!(
            out,
            "  {} {:?} @ {}..{}",
            token.kind, token.text, token.start, token.end
        );
    }
    out
}

pub(crate) fn render_json(tokens: &[Token<'_>]) -> Result<String, serde_json::Error> {
    let records: Vec<TokenRecord<'_>> = tokens
        .iter()
        .map(|token| TokenRecord {
            kind: token.kind,
            text: token.text,
            start: token.start,
            end: token.end,
        })
        .collect();
    serde_json::to_string_pretty(&records)
}
