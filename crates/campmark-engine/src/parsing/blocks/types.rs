use serde::Serialize;

use crate::parsing::span::Span;

/// The structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// A fenced code block. Its lines are raw: never classified or tokenized.
    CodeBlock,
    /// A run of list item lines, nested later by the list builder.
    List,
    /// A run of `> ` lines sharing one quote container.
    BlockQuote,
    /// Paragraph lines, one paragraph per line. Blank lines land here.
    Text,
}

impl BlockKind {
    /// Whether this kind opens and closes on explicit delimiter lines.
    #[must_use]
    pub fn is_delimited(self) -> bool {
        matches!(self, BlockKind::CodeBlock)
    }
}

/// A structurally classified group of consecutive source lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Raw, untokenized lines. Code blocks exclude their fence lines.
    pub lines: Vec<String>,
    /// Line indices `[start, end)` covered in the document, fences included.
    pub span: Span,
}

impl Block {
    /// True for a code block whose opening fence was never closed.
    #[must_use]
    pub fn is_unterminated(&self) -> bool {
        self.kind == BlockKind::CodeBlock && self.span.len() == self.lines.len() + 1
    }
}
