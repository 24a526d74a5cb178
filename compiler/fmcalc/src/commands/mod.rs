//! Command handlers for the `fmcalc` CLI.
//!
//! Each submodule implements one command. Shared input handling lives here.

mod info;
mod lex;

pub use info::print_info;
pub use lex::{lex_file, LexOptions, OutputFormat};

/// Read a calculation from `path`, or from stdin when `path` is `-`.
///
/// Exits the process with a message on failure.
pub(super) fn read_input(path: &str) -> String {
    let result = if path == "-" {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(path)
    };
    match result {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}
