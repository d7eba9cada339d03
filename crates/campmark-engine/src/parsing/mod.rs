//! # Parsing
//!
//! The three pure passes behind rendering:
//!
//! - [`blocks::structure`] groups document lines into blocks
//! - [`inline::tokenize`] splits one line into formatted segments
//! - [`lists::build_forest`] nests a list block's items by indentation
//!
//! None of them can fail and none keep state between calls.

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod lists;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

pub use blocks::{Block, BlockKind, structure};
pub use inline::{Segment, SegmentKind, tokenize};
pub use lists::{ListItem, build_forest};

use blocks::kinds::BlockQuote;

/// The text a block exposes to inline parsing, one entry per line.
///
/// Quote lines lose their prefix and list lines are reduced to item content.
/// Code blocks expose nothing: their content is never tokenized.
pub fn inline_lines(b: &Block) -> Vec<String> {
    match b.kind {
        BlockKind::CodeBlock => vec![],
        BlockKind::Text => b.lines.clone(),
        BlockKind::BlockQuote => b
            .lines
            .iter()
            .map(|l| BlockQuote::strip_prefix(l).to_string())
            .collect(),
        BlockKind::List => b
            .lines
            .iter()
            .filter_map(|l| lists::ListEntry::parse(l))
            .map(|e| e.content)
            .collect(),
    }
}

/// Inline parse every text-bearing line of a block.
///
/// Test support: the snapshot helpers walk blocks through this. Rendering
/// goes through `render::document`, which nests list items first.
pub fn parse_inline_for_block(b: &Block) -> Vec<Vec<Segment>> {
    inline_lines(b).iter().map(|l| tokenize(l)).collect()
}
