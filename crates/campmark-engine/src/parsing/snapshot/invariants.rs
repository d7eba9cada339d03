use crate::parsing::{
    blocks::{Block, BlockKind, kinds::CodeFence},
    inline::Segment,
    lines::document_lines,
    parse_inline_for_block,
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Block spans tile the document's lines in order, with no gaps
/// - Non-code blocks hold exactly the source lines of their span
/// - Code blocks hold the lines between their fences (closing fence optional)
/// - Every text-bearing line tokenizes into segments that tile it
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(document: &str, blocks: &[Block]) {
    let source: Vec<&str> = document_lines(document).map(|l| l.text).collect();

    let mut next = 0;
    for b in blocks {
        assert_eq!(
            b.span.start, next,
            "block span does not start where the previous ended: {:?}",
            b.span
        );
        assert!(
            b.span.start < b.span.end && b.span.end <= source.len(),
            "block span out of bounds: {:?} (line count: {})",
            b.span,
            source.len()
        );
        next = b.span.end;

        if b.kind == BlockKind::CodeBlock {
            assert!(
                CodeFence::is_fence(source[b.span.start]),
                "code block does not start on a fence: {:?}",
                b.span
            );
            let body = &source[b.span.start + 1..b.span.start + 1 + b.lines.len()];
            assert_eq!(b.lines, body, "code lines differ from source at {:?}", b.span);
            let fences = b.span.len() - b.lines.len();
            assert!(
                fences == 1 || fences == 2,
                "code block span {:?} has {} lines for {} content lines",
                b.span,
                b.span.len(),
                b.lines.len()
            );
        } else {
            assert_eq!(
                b.lines,
                &source[b.span.start..b.span.end],
                "block lines differ from source at {:?}",
                b.span
            );
        }

        for segments in parse_inline_for_block(b) {
            check_segments(&segments);
        }
    }
    assert_eq!(next, source.len(), "blocks do not cover the whole document");
}

/// Asserts that segment spans are contiguous from zero.
///
/// # Panics
/// Panics if a segment starts anywhere but where the previous one ended.
pub fn check_segments(segments: &[Segment]) {
    let mut pos = 0;
    for s in segments {
        assert_eq!(s.span.start, pos, "segment gap or overlap at {:?}", s.span);
        assert!(s.span.start <= s.span.end, "inverted segment span {:?}", s.span);
        pos = s.span.end;
    }
}
