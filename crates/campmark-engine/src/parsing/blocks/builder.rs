use crate::parsing::{lines::LineRef, span::Span};

use super::{
    classify::{LineKind, classify},
    kinds::CodeFence,
    types::{Block, BlockKind},
};

/// The structurer's state between lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GroupState {
    /// No group open: start of document, or just after a closing fence.
    #[default]
    Idle,
    /// A group is collecting lines.
    Open {
        kind: BlockKind,
        /// True for code blocks: only a closing fence ends them.
        delimited: bool,
        /// Index of the first line the group covers (the fence, for code).
        start: usize,
        lines: Vec<String>,
    },
}

impl GroupState {
    fn open(kind: BlockKind, start: usize, lines: Vec<String>) -> Self {
        GroupState::Open {
            kind,
            delimited: kind.is_delimited(),
            start,
            lines,
        }
    }

    /// Turns the open group into a block ending before line `end`.
    fn close(self, end: usize) -> Option<Block> {
        match self {
            GroupState::Idle => None,
            GroupState::Open {
                kind, start, lines, ..
            } => Some(Block {
                kind,
                lines,
                span: Span::new(start, end),
            }),
        }
    }
}

/// Advances the state machine by one line.
///
/// Returns the next state and at most one finished block:
/// - inside a code block, a fence closes it and anything else is appended verbatim
/// - otherwise a fence flushes the open group and opens a code block
/// - a line of the open group's kind continues it
/// - any other line flushes the open group and starts a new one
pub fn step(state: GroupState, line: LineRef<'_>) -> (GroupState, Option<Block>) {
    if let GroupState::Open {
        kind,
        delimited: true,
        start,
        mut lines,
    } = state
    {
        if CodeFence::is_fence(line.text) {
            let block = Block {
                kind,
                lines,
                span: Span::new(start, line.index + 1),
            };
            return (GroupState::Idle, Some(block));
        }
        lines.push(line.text.to_string());
        return (GroupState::open(kind, start, lines), None);
    }

    let line_kind = classify(line.text);
    if line_kind == LineKind::Fence {
        let flushed = state.close(line.index);
        let next = GroupState::open(BlockKind::CodeBlock, line.index, vec![]);
        return (next, flushed);
    }

    let kind = line_kind.block_kind();
    match state {
        GroupState::Open {
            kind: open_kind,
            start,
            mut lines,
            ..
        } if open_kind == kind => {
            lines.push(line.text.to_string());
            (GroupState::open(kind, start, lines), None)
        }
        other => {
            let flushed = other.close(line.index);
            let next = GroupState::open(kind, line.index, vec![line.text.to_string()]);
            (next, flushed)
        }
    }
}

/// Flushes whatever is open at end of input.
///
/// An unterminated code fence becomes a code block holding the rest of the
/// document, possibly no lines at all.
pub fn finish(state: GroupState, line_count: usize) -> Option<Block> {
    if let GroupState::Open {
        delimited: true,
        start,
        ..
    } = &state
    {
        log::debug!("code fence opened at line {start} is unterminated; closing at end of input");
    }
    state.close(line_count)
}

/// Drives [`step`] over a document, collecting the emitted blocks.
pub struct BlockBuilder {
    state: GroupState,
    line_count: usize,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            state: GroupState::Idle,
            line_count: 0,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: LineRef<'_>) {
        let (next, emitted) = step(std::mem::take(&mut self.state), line);
        self.state = next;
        self.line_count = line.index + 1;
        self.out.extend(emitted);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.out.extend(finish(self.state, self.line_count));
        self.out
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn line(index: usize, text: &str) -> LineRef<'_> {
        LineRef { index, text }
    }

    fn open(kind: BlockKind, start: usize, lines: &[&str]) -> GroupState {
        GroupState::open(kind, start, lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn idle_text_line_opens_text_group() {
        let (state, emitted) = step(GroupState::Idle, line(0, "hello"));
        assert_eq!(state, open(BlockKind::Text, 0, &["hello"]));
        assert!(emitted.is_none());
    }

    #[test]
    fn same_kind_continues_group() {
        let state = open(BlockKind::List, 0, &["- a"]);
        let (state, emitted) = step(state, line(1, "- b"));
        assert_eq!(state, open(BlockKind::List, 0, &["- a", "- b"]));
        assert!(emitted.is_none());
    }

    #[test]
    fn kind_change_flushes_group() {
        let state = open(BlockKind::List, 0, &["- a"]);
        let (state, emitted) = step(state, line(1, "> q"));
        assert_eq!(state, open(BlockKind::BlockQuote, 1, &["> q"]));
        assert_eq!(
            emitted,
            Some(Block {
                kind: BlockKind::List,
                lines: vec!["- a".into()],
                span: Span::new(0, 1),
            })
        );
    }

    #[test]
    fn fence_flushes_group_and_opens_code() {
        let state = open(BlockKind::Text, 0, &["intro"]);
        let (state, emitted) = step(state, line(1, "```"));
        assert_eq!(state, open(BlockKind::CodeBlock, 1, &[]));
        assert!(matches!(state, GroupState::Open { delimited: true, .. }));
        assert_eq!(emitted.map(|b| b.kind), Some(BlockKind::Text));
    }

    #[test]
    fn fence_from_idle_emits_nothing() {
        let (state, emitted) = step(GroupState::Idle, line(0, "```"));
        assert_eq!(state, open(BlockKind::CodeBlock, 0, &[]));
        assert!(emitted.is_none());
    }

    #[test]
    fn code_lines_are_never_classified() {
        let state = open(BlockKind::CodeBlock, 0, &[]);
        let (state, _) = step(state, line(1, "- not a list"));
        let (state, emitted) = step(state, line(2, "> not a quote"));
        assert_eq!(
            state,
            open(BlockKind::CodeBlock, 0, &["- not a list", "> not a quote"])
        );
        assert!(emitted.is_none());
    }

    #[test]
    fn closing_fence_emits_code_block_and_goes_idle() {
        let state = open(BlockKind::CodeBlock, 3, &["x"]);
        let (state, emitted) = step(state, line(5, "  ```"));
        assert_eq!(state, GroupState::Idle);
        assert_eq!(
            emitted,
            Some(Block {
                kind: BlockKind::CodeBlock,
                lines: vec!["x".into()],
                span: Span::new(3, 6),
            })
        );
    }

    #[test]
    fn finish_idle_is_none() {
        assert!(finish(GroupState::Idle, 4).is_none());
    }

    #[test]
    fn finish_closes_unterminated_fence() {
        let state = open(BlockKind::CodeBlock, 1, &["a", "b"]);
        assert_eq!(
            finish(state, 4),
            Some(Block {
                kind: BlockKind::CodeBlock,
                lines: vec!["a".into(), "b".into()],
                span: Span::new(1, 4),
            })
        );
    }

    #[test]
    fn builder_collects_blocks_in_order() {
        let mut b = BlockBuilder::new();
        for (i, text) in ["one", "- two", "- three", "four"].into_iter().enumerate() {
            b.push(line(i, text));
        }
        let kinds: Vec<BlockKind> = b.finish().into_iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![BlockKind::Text, BlockKind::List, BlockKind::Text]
        );
    }
}
