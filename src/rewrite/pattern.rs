use std::sync::LazyLock;

use regex::bytes::Regex;

/// Lexical shape of a UTC timestamp candidate
///
/// Digits and dashes, a literal `T`, digits and colons, an optional fraction,
/// and a literal `Z`. ASCII classes only: `\d` would also match non-ASCII
/// digits in a bytes regex.
pub const CANDIDATE_PATTERN: &str = r"[0-9-]+T[0-9:]+(?:\.[0-9]+)?Z";

static CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(CANDIDATE_PATTERN).expect("candidate pattern is a valid regex")
});

/// Compiled candidate matcher, shared by every rewriter
pub fn candidate_regex() -> &'static Regex {
    &CANDIDATE
}
