//! # Inline Parsing
//!
//! Turns one line of text into typed [`Segment`]s.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs once per
//! text-bearing line: paragraph lines, quote lines (prefix stripped) and list
//! item content. Code blocks are never tokenized.
//!
//! 1. Every [`InlinePattern`](kinds::InlinePattern) in the catalogue is matched
//!    against the full line on its own.
//! 2. All matches are merged and sorted by start offset.
//! 3. Overlaps are resolved greedily: leftmost start wins, ties go to the
//!    pattern declared first.
//! 4. Gaps between accepted matches become text segments.
//!
//! Formatting does not nest. `**a *b* c**` is one bold segment whose content
//! still contains the literal `*`.
//!
//! ## Modules
//!
//! - **`types`**: `Segment`, `SegmentKind`, `Candidate`
//! - **`kinds`**: delimiter owners and the ordered pattern catalogue
//! - **`parser`**: `tokenize()` plus the `candidates`/`resolve_overlaps` phases

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{candidates, resolve_overlaps, tokenize};
pub use types::{Candidate, Segment, SegmentKind};
