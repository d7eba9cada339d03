use serde::Serialize;

use crate::parsing::inline::{Segment, SegmentKind};

use super::{emoji, theme::Theme};

/// The display-ready result of rendering one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentTree {
    /// Colors the writer applies. Never affects structure.
    pub theme: Theme,
    pub blocks: Vec<RenderBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderBlock {
    /// Preformatted code, lines joined with `\n`.
    Code { text: String },
    /// One paragraph per source line.
    Paragraphs { lines: Vec<RenderLine> },
    /// A shared quote container, one entry per line.
    Quote { lines: Vec<Vec<InlineNode>> },
    /// Consecutive list containers, one per marker run.
    List { groups: Vec<ListGroup> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderLine {
    Inline(Vec<InlineNode>),
    /// A `---` or `***` line drawn as a horizontal rule.
    Rule,
}

/// One ordered or unordered list container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListGroup {
    pub ordered: bool,
    pub items: Vec<RenderListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderListItem {
    pub content: Vec<InlineNode>,
    /// Nested containers, again split by marker run.
    pub children: Vec<ListGroup>,
}

/// A styled run of display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineNode {
    pub style: InlineStyle,
    pub text: String,
}

/// Presentation of a segment. A fixed table over [`SegmentKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineStyle {
    Plain,
    Strong,
    Emphasis,
    StrongEmphasis,
    Struck,
    /// Marked with the theme's highlight background.
    Marked,
    /// Monospace with the theme's code background.
    Monospace,
    /// Link opened outside the page.
    Anchor { href: String },
}

impl InlineNode {
    /// Maps a segment to its presentation.
    ///
    /// With `expand_emoji`, shortcodes in display text are replaced. Code
    /// content and link targets are left alone.
    pub fn from_segment(segment: &Segment, expand_emoji: bool) -> Self {
        let style = match segment.kind {
            SegmentKind::Text => InlineStyle::Plain,
            SegmentKind::Bold => InlineStyle::Strong,
            SegmentKind::Italic => InlineStyle::Emphasis,
            SegmentKind::BoldItalic => InlineStyle::StrongEmphasis,
            SegmentKind::Strikethrough => InlineStyle::Struck,
            SegmentKind::Highlight => InlineStyle::Marked,
            SegmentKind::Code => InlineStyle::Monospace,
            SegmentKind::Link => InlineStyle::Anchor {
                href: segment.url.clone().unwrap_or_default(),
            },
        };
        let text = if expand_emoji && segment.kind != SegmentKind::Code {
            emoji::expand(&segment.content).into_owned()
        } else {
            segment.content.clone()
        };
        Self { style, text }
    }
}
