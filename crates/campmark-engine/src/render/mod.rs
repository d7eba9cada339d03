//! # Rendering
//!
//! Turns a document into a [`DocumentTree`]: blocks from
//! [`crate::parsing::structure`], segments from [`crate::parsing::tokenize`]
//! and list nesting from [`crate::parsing::build_forest`], mapped to
//! presentation. [`html::to_html`] writes the tree out.
//!
//! Dark mode only selects the [`Theme`]; the structure is the same in both.

pub mod document;
pub mod emoji;
pub mod html;
pub mod theme;
pub mod tree;

pub use document::build_tree;
pub use html::to_html;
pub use theme::Theme;
pub use tree::{
    DocumentTree, InlineNode, InlineStyle, ListGroup, RenderBlock, RenderLine, RenderListItem,
};

use crate::parsing::structure;

/// Switches for the rendering passes that sit on top of parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub dark_mode: bool,
    /// Replace `:name:` shortcodes outside code.
    pub emoji_shortcodes: bool,
    /// Draw `---` and `***` text lines as rules.
    pub horizontal_rules: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dark_mode: false,
            emoji_shortcodes: true,
            horizontal_rules: true,
        }
    }
}

/// Renders a document with default options in the given mode.
pub fn render(text: &str, dark_mode: bool) -> DocumentTree {
    render_with(
        text,
        &RenderOptions {
            dark_mode,
            ..RenderOptions::default()
        },
    )
}

pub fn render_with(text: &str, options: &RenderOptions) -> DocumentTree {
    let blocks = structure(text);
    log::debug!("rendering {} blocks (dark_mode={})", blocks.len(), options.dark_mode);
    build_tree(&blocks, options)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plain(text: &str) -> InlineNode {
        InlineNode {
            style: InlineStyle::Plain,
            text: text.into(),
        }
    }

    fn item(text: &str, children: Vec<ListGroup>) -> RenderListItem {
        RenderListItem {
            content: vec![plain(text)],
            children,
        }
    }

    #[test]
    fn empty_document_renders_nothing() {
        assert_eq!(render("", false).blocks, vec![]);
    }

    #[test]
    fn dark_mode_changes_only_the_theme() {
        let text = "**a** ==b==\n> c\n- d\n    1. e\n```\nf\n```\n---";
        let light = render(text, false);
        let dark = render(text, true);
        assert_eq!(light.blocks, dark.blocks);
        assert_eq!(light.theme, Theme::LIGHT);
        assert_eq!(dark.theme, Theme::DARK);
    }

    #[test]
    fn list_runs_and_nesting() {
        let tree = render("- a\n    - b\n1. c\n2. d", false);
        assert_eq!(
            tree.blocks,
            vec![RenderBlock::List {
                groups: vec![
                    ListGroup {
                        ordered: false,
                        items: vec![item(
                            "a",
                            vec![ListGroup {
                                ordered: false,
                                items: vec![item("b", vec![])],
                            }],
                        )],
                    },
                    ListGroup {
                        ordered: true,
                        items: vec![item("c", vec![]), item("d", vec![])],
                    },
                ],
            }]
        );
    }

    #[test]
    fn quote_lines_are_stripped_and_tokenized() {
        let tree = render("> hello\n> **bold**", false);
        assert_eq!(
            tree.blocks,
            vec![RenderBlock::Quote {
                lines: vec![
                    vec![plain("hello")],
                    vec![InlineNode {
                        style: InlineStyle::Strong,
                        text: "bold".into(),
                    }],
                ],
            }]
        );
    }

    #[test]
    fn stray_fence_at_end_renders_nothing() {
        assert_eq!(
            render("text\n```", false).blocks,
            vec![RenderBlock::Paragraphs {
                lines: vec![RenderLine::Inline(vec![plain("text")])],
            }]
        );
    }

    #[test]
    fn unterminated_fence_with_content_still_renders() {
        assert_eq!(
            render("```\nx", false).blocks,
            vec![RenderBlock::Code { text: "x".into() }]
        );
    }

    #[test]
    fn closed_empty_fence_renders_empty_code() {
        assert_eq!(
            render("```\n```", false).blocks,
            vec![RenderBlock::Code {
                text: String::new()
            }]
        );
    }

    #[test]
    fn code_block_keeps_raw_text() {
        let tree = render("```\n  **x** :fire:\ny\n```", false);
        assert_eq!(
            tree.blocks,
            vec![RenderBlock::Code {
                text: "  **x** :fire:\ny".into(),
            }]
        );
    }

    #[test]
    fn rules_can_be_disabled() {
        let options = RenderOptions {
            horizontal_rules: false,
            ..RenderOptions::default()
        };
        let tree = render_with("---", &options);
        assert_eq!(
            tree.blocks,
            vec![RenderBlock::Paragraphs {
                lines: vec![RenderLine::Inline(vec![plain("---")])],
            }]
        );
        assert_eq!(
            render("---", false).blocks,
            vec![RenderBlock::Paragraphs {
                lines: vec![RenderLine::Rule],
            }]
        );
    }

    #[test]
    fn shortcodes_expand_in_text() {
        let tree = render("nice :tada:", false);
        assert_eq!(
            tree.blocks,
            vec![RenderBlock::Paragraphs {
                lines: vec![RenderLine::Inline(vec![plain("nice 🎉")])],
            }]
        );
    }
}
