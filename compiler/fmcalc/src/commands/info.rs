//! `fmcalc info`: registration metadata.

use fmcalc_lexer::{grammar, LEXER_INFO};

pub fn print_info() {
    println!("Name:      {}", LEXER_INFO.name);
    println!("Aliases:   {}", LEXER_INFO.aliases.join(", "));
    println!("Filenames: {}", LEXER_INFO.filenames.join(", "));
    println!();
    println!("States:");
    let grammar = grammar();
    for &name in grammar.state_names() {
        let rules = grammar.rules(name).map_or(0, <[_]>::len);
        println!("  {name:<24}{rules:>4} rules");
    }
}
