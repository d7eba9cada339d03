//! # Block Parsing
//!
//! Groups a document's lines into [`Block`]s: code fences, lists, quotes and
//! plain text.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is matched against a
//!    priority-ordered rule table (fence 100, list 80, quote 70, text 0).
//!
//! 2. **Block Construction** (`builder`): a pure `step(state, line)` function
//!    moves a [`GroupState`] through the document, emitting a block whenever a
//!    group is flushed or a fence closes.
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockKind`
//! - **`kinds`**: block syntax owners (CodeFence, ListMarker, BlockQuote, Paragraph)
//! - **`classify`**: `LineClassifier` and the rule table
//! - **`builder`**: `GroupState`, `step`, `finish`, and the `BlockBuilder` driver
//!
//! ## Key Invariants
//!
//! - Block spans tile the document's line indices in order, with no gaps
//! - Fenced code is a raw zone: no classification or inline parsing inside
//! - An unterminated fence swallows the rest of the document
//! - Any input yields some block sequence; there is no error path

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, GroupState, finish, step};
pub use classify::{LineClassifier, LineKind, classify};
pub use types::{Block, BlockKind};

use crate::parsing::lines::document_lines;

/// Splits a whole document into ordered blocks. An empty document has none.
pub fn structure(document: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::new();
    for line in document_lines(document) {
        builder.push(line);
    }
    builder.finish()
}
