//! Registration metadata for highlighter front ends.

/// How a host picks this lexer: display name, aliases and file patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Glob patterns of the form `*.ext`.
    pub filenames: &'static [&'static str],
}

pub const LEXER_INFO: LexerInfo = LexerInfo {
    name: "FileMaker",
    aliases: &["fmcalc"],
    filenames: &["*.fmcalc", "*.fmfn"],
};

impl LexerInfo {
    /// Whether the final component of `path` matches one of the filename
    /// patterns. Extensions compare case-insensitively.
    pub fn matches_filename(&self, path: &str) -> bool {
        let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
        self.filenames.iter().any(|pattern| glob_match(pattern, file))
    }
}

/// Minimal glob: a leading `*` matches any prefix; everything else is literal.
fn glob_match(pattern: &str, file: &str) -> bool {
    match pattern.strip_prefix('*') {
        Some(suffix) => {
            file.len() > suffix.len()
                && file
                    .get(file.len() - suffix.len()..)
                    .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
        }
        None => pattern.eq_ignore_ascii_case(file),
    }
}

#[cfg(test)]
mod tests;
