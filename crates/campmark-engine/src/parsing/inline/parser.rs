use crate::parsing::span::Span;

use super::{
    kinds,
    types::{Candidate, Segment},
};

/// Tokenizes one line into an ordered, non-overlapping [`Segment`] sequence.
///
/// Every pattern in the catalogue is run over the whole line independently,
/// the matches are merged by start position, and overlaps are resolved
/// leftmost-start-wins (see [`resolve_overlaps`]). The gaps between accepted
/// matches become [`SegmentKind::Text`](super::SegmentKind::Text) segments.
///
/// Never fails: unterminated or unmatched delimiters are left in text. A line
/// with no surviving match (including the empty line) is returned as a single
/// text segment.
pub fn tokenize(line: &str) -> Vec<Segment> {
    let accepted = resolve_overlaps(candidates(line));
    if accepted.is_empty() {
        return vec![Segment::text(line, Span::new(0, line.len()))];
    }

    // Helper to flush the gap before a match as a Text segment
    fn flush_text(out: &mut Vec<Segment>, line: &str, start: usize, end: usize) {
        if end > start {
            out.push(Segment::text(&line[start..end], Span::new(start, end)));
        }
    }

    let mut out = Vec::with_capacity(accepted.len() * 2 + 1);
    let mut pos = 0;
    for c in accepted {
        flush_text(&mut out, line, pos, c.span.start);
        out.push(Segment {
            kind: c.kind,
            content: line[c.content.start..c.content.end].to_string(),
            url: c.url.map(|u| line[u.start..u.end].to_string()),
            span: c.span,
        });
        pos = c.span.end;
    }
    flush_text(&mut out, line, pos, line.len());
    out
}

/// Collects every pattern match in the line, sorted by start position.
///
/// Each pattern contributes its own leftmost-first, non-overlapping matches;
/// matches of different patterns may overlap freely. The sort is stable, so
/// matches sharing a start keep catalogue order.
pub fn candidates(line: &str) -> Vec<Candidate> {
    let mut out = Vec::new();
    for (pattern, re) in kinds::catalogue() {
        for caps in re.captures_iter(line) {
            let (Some(full), Some(content)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.push(Candidate {
                kind: pattern.kind,
                span: Span::new(full.start(), full.end()),
                content: Span::new(content.start(), content.end()),
                url: caps.get(2).map(|m| Span::new(m.start(), m.end())),
            });
        }
    }
    out.sort_by_key(|c| c.span.start);
    out
}

/// Keeps each candidate only if it starts at or after the end of the last
/// accepted one.
///
/// Expects candidates sorted by start, as [`candidates`] returns them. An
/// earlier start always wins, whatever pattern produced it, so markers of a
/// different kind inside an accepted span stay literal.
pub fn resolve_overlaps(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut accepted: Vec<Candidate> = Vec::with_capacity(candidates.len());
    let mut last_end = 0;
    for c in candidates {
        if c.span.start >= last_end {
            last_end = c.span.end;
            accepted.push(c);
        } else {
            log::trace!(
                "dropping {:?} match at {:?}: overlaps accepted span ending at {last_end}",
                c.kind,
                c.span
            );
        }
    }
    accepted
}
