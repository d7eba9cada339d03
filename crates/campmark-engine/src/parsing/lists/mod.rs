//! # Nested Lists
//!
//! Rebuilds list nesting from indentation alone.
//!
//! A list block's lines are parsed into [`ListEntry`]s (level = leading
//! spaces / 4), then threaded into a forest by a single stack pass over a
//! [`ListArena`]. Siblings are later split into [`MarkerRun`]s so that bullet
//! and numbered items never share one container.

pub mod arena;
pub mod runs;
pub mod types;

pub use arena::{ListArena, ListNode};
pub use runs::{MarkerRun, marker_runs};
pub use types::{ListEntry, ListItem};

/// Builds the nested-list forest for one list block's raw lines.
///
/// Lines that do not parse as items are skipped. No items, no forest.
pub fn build_forest<I, S>(lines: I) -> Vec<ListItem>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ListArena::build(lines).to_forest()
}
