//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed blocks to a stable `Snap` format for
//!   `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (block spans tile
//!   the document, block lines match the source, segments tile their line)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
