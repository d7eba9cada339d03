use serde::Serialize;

use crate::parsing::{
    blocks::{Block, BlockKind},
    inline::{Segment, SegmentKind},
    lists::{ListItem, build_forest},
    parse_inline_for_block,
};

/// Snapshot of a parsed document for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    /// All blocks in the document.
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block.
#[derive(Debug, Serialize)]
pub struct BlockSnap {
    /// Block kind, e.g. "codeblock" or "list".
    pub kind: String,
    /// Line span as `start..end`.
    pub span: String,
    /// One entry per rendered line: raw code lines, tokenized text lines, or
    /// list items indented by depth.
    pub lines: Vec<String>,
}

/// Converts parsed blocks into a compact, human-readable snapshot.
///
/// Segments print as `kind(content)`, links as `link(label -> url)`.
pub fn normalize(blocks: &[Block]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| {
            let lines = match b.kind {
                BlockKind::CodeBlock => b.lines.iter().map(|l| format!("| {l}")).collect(),
                BlockKind::List => {
                    let mut out = vec![];
                    list_lines(&build_forest(&b.lines), 0, &mut out);
                    out
                }
                BlockKind::Text | BlockKind::BlockQuote => parse_inline_for_block(b)
                    .iter()
                    .map(|segments| segments_line(segments))
                    .collect(),
            };
            BlockSnap {
                kind: kind_label(b.kind).to_string(),
                span: format!("{}..{}", b.span.start, b.span.end),
                lines,
            }
        })
        .collect();

    Snap { blocks }
}

fn kind_label(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::CodeBlock => "codeblock",
        BlockKind::List => "list",
        BlockKind::BlockQuote => "blockquote",
        BlockKind::Text => "text",
    }
}

fn list_lines(items: &[ListItem], depth: usize, out: &mut Vec<String>) {
    for item in items {
        let marker = if item.is_ordered { "1." } else { "-" };
        let segments = crate::parsing::tokenize(&item.content);
        out.push(format!(
            "{}{marker} {}",
            "  ".repeat(depth),
            segments_line(&segments)
        ));
        list_lines(&item.children, depth + 1, out);
    }
}

fn segments_line(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| match (s.kind, &s.url) {
            (SegmentKind::Link, Some(url)) => format!("link({} -> {url})", s.content),
            (kind, _) => format!("{}({})", segment_label(kind), s.content),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn segment_label(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Text => "text",
        SegmentKind::Bold => "bold",
        SegmentKind::Italic => "italic",
        SegmentKind::BoldItalic => "bold_italic",
        SegmentKind::Strikethrough => "strike",
        SegmentKind::Highlight => "highlight",
        SegmentKind::Code => "code",
        SegmentKind::Link => "link",
    }
}
