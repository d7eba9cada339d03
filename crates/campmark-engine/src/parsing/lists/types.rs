use serde::Serialize;

use crate::parsing::blocks::kinds::ListMarker;

/// A node in the nested-list forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Nesting depth: leading spaces divided by four.
    pub level: usize,
    /// True for `N.` markers, false for `-`/`*` bullets.
    pub is_ordered: bool,
    /// Line text after the marker and its whitespace. Not yet tokenized.
    pub content: String,
    pub children: Vec<ListItem>,
}

/// One list line split into its parts, before nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub level: usize,
    pub is_ordered: bool,
    pub content: String,
}

impl ListEntry {
    /// Parses `indent marker whitespace content`.
    ///
    /// Returns `None` when the line has no marker or nothing after it.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = ListMarker::item_regex().captures(line)?;
        let indent = caps.get(1)?.as_str().len();
        let marker = caps.get(2)?.as_str();
        let content = caps.get(3)?.as_str();
        Some(Self {
            level: indent / ListMarker::INDENT_WIDTH,
            is_ordered: ListMarker::is_ordered(marker),
            content: content.to_string(),
        })
    }
}
