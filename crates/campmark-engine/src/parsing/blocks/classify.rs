use super::{
    kinds::{BlockQuote, CodeFence, ListMarker, Paragraph},
    types::BlockKind,
};

/// What a single line looks like on its own, without surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// A bare code fence. Opens (or, inside a code block, closes) a block.
    Fence,
    List,
    BlockQuote,
    Text,
}

impl LineKind {
    /// The block a line of this kind opens or continues.
    pub fn block_kind(self) -> BlockKind {
        match self {
            LineKind::Fence => BlockKind::CodeBlock,
            LineKind::List => BlockKind::List,
            LineKind::BlockQuote => BlockKind::BlockQuote,
            LineKind::Text => BlockKind::Text,
        }
    }
}

/// One row of the classification table.
#[derive(Clone, Copy)]
pub struct Rule {
    pub priority: u8,
    pub kind: LineKind,
    pub detect: fn(&str) -> bool,
}

/// Classification rules, highest priority first. The last rule always matches.
pub const RULES: [Rule; 4] = [
    Rule {
        priority: 100,
        kind: LineKind::Fence,
        detect: CodeFence::is_fence,
    },
    Rule {
        priority: 80,
        kind: LineKind::List,
        detect: ListMarker::matches,
    },
    Rule {
        priority: 70,
        kind: LineKind::BlockQuote,
        detect: BlockQuote::matches,
    },
    Rule {
        priority: 0,
        kind: LineKind::Text,
        detect: Paragraph::matches,
    },
];

/// Classifies lines for the block structuring phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Returns the kind of the highest-priority rule matching the line.
    pub fn classify(&self, line: &str) -> LineKind {
        RULES
            .iter()
            .find(|rule| (rule.detect)(line))
            .map_or(LineKind::Text, |rule| rule.kind)
    }
}

/// Shorthand for [`LineClassifier::classify`].
pub fn classify(line: &str) -> LineKind {
    LineClassifier.classify(line)
}
