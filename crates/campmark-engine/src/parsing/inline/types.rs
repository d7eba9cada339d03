use serde::Serialize;

use crate::parsing::span::Span;

/// The formatting applied to a run of inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Unformatted text, including any delimiters that failed to match.
    Text,
    Bold,
    Italic,
    BoldItalic,
    Strikethrough,
    Highlight,
    /// Inline code. Rendered monospace; its content is never re-tokenized.
    Code,
    /// A `[label](url)` link. `content` holds the label.
    Link,
}

/// One inline-formatted (or plain) run of text within a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Display text with delimiters stripped.
    pub content: String,
    /// Link target, present only for [`SegmentKind::Link`].
    pub url: Option<String>,
    /// Byte span of the whole construct (delimiters included) in the source line.
    #[serde(skip)]
    pub span: Span,
}

impl Segment {
    pub fn text(content: &str, span: Span) -> Self {
        Self {
            kind: SegmentKind::Text,
            content: content.to_string(),
            url: None,
            span,
        }
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        self.kind == SegmentKind::Text
    }
}

/// A raw pattern match recorded before overlap resolution.
///
/// All spans are byte offsets into the tokenized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub kind: SegmentKind,
    /// The full match, delimiters included.
    pub span: Span,
    /// The first capture: display content.
    pub content: Span,
    /// The second capture, for labelled patterns (link targets).
    pub url: Option<Span>,
}
