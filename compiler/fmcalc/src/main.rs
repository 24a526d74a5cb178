//! FileMaker calculation lexer CLI.

mod commands;

use commands::{lex_file, print_info, LexOptions, OutputFormat};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let mut options = LexOptions::default();
            let mut path = None;

            for arg in args.iter().skip(2) {
                if arg == "--json" {
                    options.format = OutputFormat::Json;
                } else if arg == "--no-trivia" {
                    options.skip_trivia = true;
                } else if (arg == "-" || !arg.starts_with('-')) && path.is_none() {
                    path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    eprintln!("Usage: fmcalc lex <file|-> [--json] [--no-trivia]");
                    std::process::exit(1);
                }
            }

            let Some(path) = path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: fmcalc lex <file|-> [--json] [--no-trivia]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --json        Emit tokens as a JSON array");
                eprintln!("  --no-trivia   Omit whitespace and comments");
                std::process::exit(1);
            };

            lex_file(path, &options);
        }
        "info" => {
            print_info();
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("fmcalc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A calculation file on its own is lexed with default options
            if fmcalc_lexer::LEXER_INFO.matches_filename(command) {
                lex_file(command, &LexOptions::default());
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("FileMaker calculation lexer");
    println!();
    println!("Usage: fmcalc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file|->         Tokenize a calculation and display tokens");
    println!("  info                 Show lexer registration metadata");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --json               Emit tokens as a JSON array");
    println!("  --no-trivia          Omit whitespace and comments");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=fmcalc_lexer_core=trace   Log every rule match");
    println!("  FMCALC_LOG_TREE=1                  Indented log output");
}

/// Install a tracing subscriber when `RUST_LOG` is set.
///
/// `FMCALC_LOG_TREE` switches from flat lines to an indented span tree.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_err() {
        return;
    }
    let filter = EnvFilter::from_default_env();
    if std::env::var("FMCALC_LOG_TREE").is_ok() {
        tracing_subscriber::registry()
            .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    }
}
