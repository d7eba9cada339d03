//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters, plus the ordered
//! pattern catalogue built from them.
//!
//! ## Types
//!
//! - **`Emphasis`**: `***`, `___`, `**`, `__`, `*`, `_`
//! - **`Strikethrough`** / **`Highlight`**: `~~`, `==`
//! - **`CodeSpan`**: `` ` ``
//! - **`Link`**: `[`, `](`, `)`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code. The
//! parser only walks [`catalogue`]; adding a construct means adding one
//! [`InlinePattern`] entry.

pub mod code_span;
pub mod decoration;
pub mod emphasis;
pub mod link;

use std::sync::OnceLock;

use regex::Regex;

pub use code_span::CodeSpan;
pub use decoration::{Highlight, Strikethrough};
pub use emphasis::Emphasis;
pub use link::Link;

use super::types::SegmentKind;

/// How a pattern's delimiters surround its captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `open content close`, one capture.
    Wrapped {
        open: &'static str,
        close: &'static str,
    },
    /// `open label middle target close`, two captures.
    Labelled {
        open: &'static str,
        middle: &'static str,
        close: &'static str,
    },
}

/// One entry in the inline pattern catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlinePattern {
    pub kind: SegmentKind,
    pub shape: Shape,
}

impl InlinePattern {
    pub const fn wrapped(kind: SegmentKind, open: &'static str, close: &'static str) -> Self {
        Self {
            kind,
            shape: Shape::Wrapped { open, close },
        }
    }

    pub const fn labelled(
        kind: SegmentKind,
        open: &'static str,
        middle: &'static str,
        close: &'static str,
    ) -> Self {
        Self {
            kind,
            shape: Shape::Labelled {
                open,
                middle,
                close,
            },
        }
    }

    /// Regex source for this pattern. Captures are lazy and non-empty.
    pub fn regex_source(&self) -> String {
        match self.shape {
            Shape::Wrapped { open, close } => {
                format!("{}(.+?){}", regex::escape(open), regex::escape(close))
            }
            Shape::Labelled {
                open,
                middle,
                close,
            } => format!(
                "{}(.+?){}(.+?){}",
                regex::escape(open),
                regex::escape(middle),
                regex::escape(close)
            ),
        }
    }
}

/// Patterns in declaration order. Ties on start position keep this order.
pub const CATALOGUE: [InlinePattern; 10] = [
    InlinePattern::wrapped(
        SegmentKind::BoldItalic,
        Emphasis::BOLD_ITALIC_STAR,
        Emphasis::BOLD_ITALIC_STAR,
    ),
    InlinePattern::wrapped(
        SegmentKind::BoldItalic,
        Emphasis::BOLD_ITALIC_UNDERSCORE,
        Emphasis::BOLD_ITALIC_UNDERSCORE,
    ),
    InlinePattern::wrapped(SegmentKind::Bold, Emphasis::BOLD_STAR, Emphasis::BOLD_STAR),
    InlinePattern::wrapped(
        SegmentKind::Bold,
        Emphasis::BOLD_UNDERSCORE,
        Emphasis::BOLD_UNDERSCORE,
    ),
    InlinePattern::wrapped(
        SegmentKind::Italic,
        Emphasis::ITALIC_STAR,
        Emphasis::ITALIC_STAR,
    ),
    InlinePattern::wrapped(
        SegmentKind::Italic,
        Emphasis::ITALIC_UNDERSCORE,
        Emphasis::ITALIC_UNDERSCORE,
    ),
    InlinePattern::wrapped(
        SegmentKind::Strikethrough,
        Strikethrough::TILDES,
        Strikethrough::TILDES,
    ),
    InlinePattern::wrapped(SegmentKind::Highlight, Highlight::EQUALS, Highlight::EQUALS),
    InlinePattern::wrapped(SegmentKind::Code, CodeSpan::TICK, CodeSpan::TICK),
    InlinePattern::labelled(SegmentKind::Link, Link::OPEN, Link::MIDDLE, Link::CLOSE),
];

/// The catalogue with each pattern compiled once per process.
pub fn catalogue() -> &'static [(InlinePattern, Regex)] {
    static COMPILED: OnceLock<Vec<(InlinePattern, Regex)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        CATALOGUE
            .iter()
            .map(|p| {
                let re = Regex::new(&p.regex_source()).expect("Invalid inline pattern regex");
                (*p, re)
            })
            .collect()
    })
}
