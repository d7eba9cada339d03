//! Lightweight markdown-like rendering for short user-written text.
//!
//! [`parsing`] holds the pure passes (block structuring, inline
//! tokenizing, list nesting). [`render`] maps their output to a display
//! tree and writes HTML.

pub mod parsing;
pub mod render;

pub use parsing::{
    Block, BlockKind, ListItem, Segment, SegmentKind, build_forest, structure, tokenize,
};
pub use render::{DocumentTree, RenderOptions, Theme, render, render_with, to_html};
