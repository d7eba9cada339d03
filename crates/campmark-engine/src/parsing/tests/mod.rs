//! Integration tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/`; expectations are inline debug
//! snapshots of the normalized block structure.

use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{BlockKind, structure},
    build_forest,
    inline::{SegmentKind, tokenize},
    lists::marker_runs,
    snapshot::{self, normalize},
};

fn fixture(name: &str) -> String {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    );
    std::fs::read_to_string(path).unwrap()
}

fn parse_fixture(name: &str) -> snapshot::Snap {
    let md = fixture(name);
    let blocks = structure(&md);
    snapshot::invariants(&md, &blocks);
    normalize(&blocks)
}

// Fixture-based snapshot tests

#[test]
fn fixture_game_post() {
    insta::assert_debug_snapshot!(parse_fixture("game_post"), @r#"
    Snap {
        blocks: [
            BlockSnap {
                kind: "text",
                span: "0..3",
                lines: [
                    "text(Check out my ) bold(new game) text(!)",
                    "text(It has ) highlight(three) text( levels and a ) code(boss) text(.)",
                    "text()",
                ],
            },
            BlockSnap {
                kind: "list",
                span: "3..9",
                lines: [
                    "- text(Download it ) link(here -> https://camp.example/g/7)",
                    "- text(Controls:)",
                    "  - text(WASD to ) italic(move)",
                    "  - text(Space to ) strike(jump) text( dash)",
                    "1. text(Beat level one)",
                    "1. text(Tell me your time)",
                ],
            },
            BlockSnap {
                kind: "text",
                span: "9..10",
                lines: [
                    "text()",
                ],
            },
            BlockSnap {
                kind: "blockquote",
                span: "10..12",
                lines: [
                    "text(This is the best jam entry)",
                    "text(straight from the comments)",
                ],
            },
            BlockSnap {
                kind: "text",
                span: "12..13",
                lines: [
                    "text()",
                ],
            },
            BlockSnap {
                kind: "codeblock",
                span: "13..16",
                lines: [
                    "| let speed = **fast**;",
                ],
            },
            BlockSnap {
                kind: "text",
                span: "16..18",
                lines: [
                    "text(Thanks for playing :fire:)",
                    "text()",
                ],
            },
        ],
    }
    "#);
}

#[test]
fn fixture_overlaps() {
    insta::assert_debug_snapshot!(parse_fixture("overlaps"), @r#"
    Snap {
        blocks: [
            BlockSnap {
                kind: "text",
                span: "0..5",
                lines: [
                    "bold(a*b*c)",
                    "code(**x**) text( then ) bold(`y`)",
                    "bold_italic(both) text( and ) bold_italic(both)",
                    "link(**label** -> u) text( a ** b)",
                    "text()",
                ],
            },
        ],
    }
    "#);
}

#[test]
fn fixture_fences() {
    insta::assert_debug_snapshot!(parse_fixture("fences"), @r#"
    Snap {
        blocks: [
            BlockSnap {
                kind: "text",
                span: "0..1",
                lines: [
                    "text(Before)",
                ],
            },
            BlockSnap {
                kind: "codeblock",
                span: "1..5",
                lines: [
                    "| - raw",
                    "| > raw",
                ],
            },
            BlockSnap {
                kind: "codeblock",
                span: "5..8",
                lines: [
                    "| unterminated **code**",
                    "| ",
                ],
            },
        ],
    }
    "#);
}

#[test]
fn fixture_nested_lists() {
    insta::assert_debug_snapshot!(parse_fixture("nested_lists"), @r#"
    Snap {
        blocks: [
            BlockSnap {
                kind: "list",
                span: "0..8",
                lines: [
                    "- text(level zero)",
                    "  - text(level one)",
                    "    - text(level three)",
                    "    - text(level two)",
                    "  1. text(numbered child)",
                    "  1. text(second numbered)",
                    "- text(back to zero)",
                    "- text(star bullet)",
                ],
            },
            BlockSnap {
                kind: "text",
                span: "8..9",
                lines: [
                    "text()",
                ],
            },
        ],
    }
    "#);
}

// Invariant tests

/// Awkward inputs that must still produce a well-formed block sequence.
const TRICKY_DOCUMENTS: &[&str] = &[
    "",
    "\n",
    "```",
    "```\n```\n```",
    "- \n- a",
    ">\n> \n>> x",
    "****\n~~~~\n====",
    "    - orphan indent\n- root",
    "text\r\nmore\r\n",
    "[a](b)[c](d)``",
    "ünïcødé **ß** _ø_",
];

#[test]
fn tricky_documents_keep_invariants() {
    for doc in TRICKY_DOCUMENTS {
        let blocks = structure(doc);
        snapshot::invariants(doc, &blocks);
    }
}

#[test]
fn reparsing_is_deterministic() {
    for doc in TRICKY_DOCUMENTS {
        assert_eq!(structure(doc), structure(doc));
    }
    let md = fixture("game_post");
    assert_eq!(
        format!("{:?}", normalize(&structure(&md))),
        format!("{:?}", normalize(&structure(&md)))
    );
}

#[test]
fn code_content_is_never_tokenized() {
    let blocks = structure("```\nX\n**Y**\n```");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::CodeBlock);
    assert!(crate::parsing::parse_inline_for_block(&blocks[0]).is_empty());
}

#[test]
fn quote_lines_tokenize_independently() {
    let blocks = structure("> **one\n> two**");
    let lines = crate::parsing::parse_inline_for_block(&blocks[0]);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().flatten().all(|s| s.kind == SegmentKind::Text));
}

#[test]
fn list_block_runs_split_by_marker() {
    let blocks = structure("- a\n1. b\n- c");
    assert_eq!(blocks.len(), 1);
    let forest = build_forest(&blocks[0].lines);
    let ordered: Vec<bool> = marker_runs(&forest).iter().map(|r| r.ordered).collect();
    assert_eq!(ordered, vec![false, true, false]);
}

#[test]
fn list_items_tokenize_their_content() {
    let forest = build_forest(["- **bold** item"]);
    let segments = tokenize(&forest[0].content);
    assert_eq!(segments[0].kind, SegmentKind::Bold);
    assert_eq!(segments[0].content, "bold");
}
