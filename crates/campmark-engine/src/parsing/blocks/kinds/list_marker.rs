use std::sync::OnceLock;

use regex::Regex;

/// List item marker syntax: `-` or `*` bullets and `N.` numbers.
///
/// Owns both the line classifier pattern and the item pattern the list
/// builder uses to split a line into indentation, marker and content.
pub struct ListMarker;

impl ListMarker {
    /// Number of leading spaces per nesting level.
    pub const INDENT_WIDTH: usize = 4;

    fn line_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^( *)([-*]|\d+\.)\s").expect("Invalid list line regex"))
    }

    /// Pattern with captures: indentation, marker, content.
    pub fn item_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^( *)([-*]|\d+\.)\s(.+)").expect("Invalid list item regex")
        })
    }

    /// Returns true if the line starts with an (optionally indented) marker
    /// followed by whitespace.
    pub fn matches(line: &str) -> bool {
        Self::line_regex().is_match(line)
    }

    /// Returns true for numbered markers such as `12.`.
    pub fn is_ordered(marker: &str) -> bool {
        marker.ends_with('.')
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("- item", true)]
    #[case("* item", true)]
    #[case("1. item", true)]
    #[case("42. item", true)]
    #[case("    - nested", true)]
    #[case("-\ttab", true)]
    #[case("- ", true)]
    #[case("-item", false)]
    #[case("1.item", false)]
    #[case("1) item", false)]
    #[case("+ item", false)]
    #[case("---", false)]
    #[case("**bold** text", false)]
    #[case("\t- tabbed", false)]
    fn line_classification(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(ListMarker::matches(line), expected);
    }

    #[test]
    fn ordered_markers() {
        assert!(ListMarker::is_ordered("1."));
        assert!(ListMarker::is_ordered("10."));
        assert!(!ListMarker::is_ordered("-"));
        assert!(!ListMarker::is_ordered("*"));
    }
}
