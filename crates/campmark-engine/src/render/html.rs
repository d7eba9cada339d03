//! HTML writer for [`DocumentTree`].
//!
//! Every piece of source text passes through `html-escape` before it is
//! written, so the output never carries markup from the document itself.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{
    theme::Theme,
    tree::{DocumentTree, InlineNode, InlineStyle, ListGroup, RenderBlock, RenderLine},
};

/// Writes the tree as an HTML fragment, one top-level element per line.
pub fn to_html(tree: &DocumentTree) -> String {
    let mut out = String::new();
    for block in &tree.blocks {
        write_block(&mut out, block, &tree.theme);
    }
    out
}

fn write_block(out: &mut String, block: &RenderBlock, theme: &Theme) {
    match block {
        RenderBlock::Code { text } => {
            out.push_str(&format!(
                "<pre style=\"background: {}; padding: 8px; border-radius: 4px; overflow-x: auto;\"><code>",
                theme.code_bg
            ));
            out.push_str(&encode_text(text));
            out.push_str("</code></pre>\n");
        }
        RenderBlock::Paragraphs { lines } => {
            for line in lines {
                match line {
                    RenderLine::Rule => out.push_str(&format!(
                        "<hr style=\"border: none; border-top: 1px solid {};\">\n",
                        theme.rule_color
                    )),
                    RenderLine::Inline(nodes) => {
                        out.push_str("<p>");
                        write_inline(out, nodes, theme);
                        out.push_str("</p>\n");
                    }
                }
            }
        }
        RenderBlock::Quote { lines } => {
            out.push_str(&format!(
                "<blockquote style=\"border-left: 3px solid {}; padding-left: 12px; margin: 8px 0;\">",
                theme.quote_accent
            ));
            for (i, nodes) in lines.iter().enumerate() {
                if i > 0 {
                    out.push_str("<br>");
                }
                write_inline(out, nodes, theme);
            }
            out.push_str("</blockquote>\n");
        }
        RenderBlock::List { groups } => {
            for group in groups {
                write_group(out, group, theme);
                out.push('\n');
            }
        }
    }
}

fn write_group(out: &mut String, group: &ListGroup, theme: &Theme) {
    let tag = if group.ordered { "ol" } else { "ul" };
    out.push_str(&format!("<{tag}>"));
    for item in &group.items {
        out.push_str("<li>");
        write_inline(out, &item.content, theme);
        for child in &item.children {
            write_group(out, child, theme);
        }
        out.push_str("</li>");
    }
    out.push_str(&format!("</{tag}>"));
}

fn write_inline(out: &mut String, nodes: &[InlineNode], theme: &Theme) {
    for node in nodes {
        let text = encode_text(&node.text);
        match &node.style {
            InlineStyle::Plain => out.push_str(&text),
            InlineStyle::Strong => out.push_str(&format!("<strong>{text}</strong>")),
            InlineStyle::Emphasis => out.push_str(&format!("<em>{text}</em>")),
            InlineStyle::StrongEmphasis => {
                out.push_str(&format!("<strong><em>{text}</em></strong>"))
            }
            InlineStyle::Struck => {
                out.push_str(&format!("<del style=\"opacity: 0.7;\">{text}</del>"))
            }
            InlineStyle::Marked => out.push_str(&format!(
                "<mark style=\"background-color: {}; padding: 2px 4px; border-radius: 3px;\">{text}</mark>",
                theme.highlight_bg
            )),
            InlineStyle::Monospace => out.push_str(&format!(
                "<code style=\"background: {}; padding: 2px 4px; border-radius: 3px; font-family: monospace;\">{text}</code>",
                theme.code_bg
            )),
            InlineStyle::Anchor { href } => out.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" style=\"color: {}; text-decoration: underline;\">{text}</a>",
                encode_double_quoted_attribute(href),
                theme.link_color
            )),
        }
    }
}
