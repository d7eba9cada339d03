use std::sync::OnceLock;

use regex::Regex;

/// Blockquote block type with owned prefix syntax.
///
/// A quote line is `>` followed by one whitespace character. Quotes do not
/// nest: `>> x` is plain text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^>\s").expect("Invalid blockquote regex"))
    }

    pub fn matches(line: &str) -> bool {
        Self::regex().is_match(line)
    }

    /// Strips the `>` and the whitespace character after it.
    ///
    /// Lines that are not quote lines are returned unchanged.
    pub fn strip_prefix(line: &str) -> &str {
        match Self::regex().find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        }
    }
}
