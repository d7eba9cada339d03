use crate::parsing::{
    blocks::{Block, BlockKind},
    inline::tokenize,
    inline_lines,
    lists::{ListItem, build_forest, marker_runs},
};

use super::{
    RenderOptions,
    theme::Theme,
    tree::{DocumentTree, InlineNode, ListGroup, RenderBlock, RenderLine, RenderListItem},
};

/// Lines that become a horizontal rule inside text blocks.
const RULE_LINES: [&str; 2] = ["---", "***"];

/// Builds the display tree for already-structured blocks.
///
/// A stray fence with nothing after it renders nothing.
pub fn build_tree(blocks: &[Block], options: &RenderOptions) -> DocumentTree {
    DocumentTree {
        theme: Theme::for_mode(options.dark_mode),
        blocks: blocks
            .iter()
            .filter(|b| !(b.is_unterminated() && b.lines.is_empty()))
            .map(|b| render_block(b, options))
            .collect(),
    }
}

fn render_block(block: &Block, options: &RenderOptions) -> RenderBlock {
    match block.kind {
        BlockKind::CodeBlock => RenderBlock::Code {
            text: block.lines.join("\n"),
        },
        BlockKind::Text => RenderBlock::Paragraphs {
            lines: block
                .lines
                .iter()
                .map(|line| render_text_line(line, options))
                .collect(),
        },
        BlockKind::BlockQuote => RenderBlock::Quote {
            lines: inline_lines(block)
                .iter()
                .map(|line| inline_nodes(line, options))
                .collect(),
        },
        BlockKind::List => RenderBlock::List {
            groups: list_groups(&build_forest(&block.lines), options),
        },
    }
}

fn render_text_line(line: &str, options: &RenderOptions) -> RenderLine {
    if options.horizontal_rules && RULE_LINES.contains(&line) {
        RenderLine::Rule
    } else {
        RenderLine::Inline(inline_nodes(line, options))
    }
}

fn list_groups(items: &[ListItem], options: &RenderOptions) -> Vec<ListGroup> {
    marker_runs(items)
        .into_iter()
        .map(|run| ListGroup {
            ordered: run.ordered,
            items: run
                .items
                .iter()
                .map(|item| RenderListItem {
                    content: inline_nodes(&item.content, options),
                    children: list_groups(&item.children, options),
                })
                .collect(),
        })
        .collect()
}

/// Tokenizes one line and maps every segment to its presentation.
pub fn inline_nodes(line: &str, options: &RenderOptions) -> Vec<InlineNode> {
    tokenize(line)
        .iter()
        .map(|segment| InlineNode::from_segment(segment, options.emoji_shortcodes))
        .collect()
}
