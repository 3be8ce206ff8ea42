// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    heading = { Block::heading(2, "Infra"), "## Infra" },
    quote = { Block::Quote("note".into()), "> note" },
    line = { Block::line("plain"), "plain" },
    bullet = { Block::bullet("top"), "- top" },
    sub_bullet = { Block::sub_bullet("nested"), "  - nested" },
    emphasis = { Block::Emphasis("Generated".into()), "_Generated_" },
    blank = { Block::Blank, "" },
)]
fn block_renders_single_line(block: Block, expected: &str) {
    let mut doc = Document::new();
    doc.push(block);
    assert_eq!(doc.lines(), vec![expected.to_string()]);
}

#[test]
fn fenced_wraps_inner_blocks() {
    let mut doc = Document::new();
    doc.push(Block::Fenced(vec![Block::line("Hey"), Block::bullet("x")]));
    assert_eq!(doc.lines(), vec!["```", "Hey", "- x", "```"]);
}

#[test]
fn render_terminates_with_newline() {
    let mut doc = Document::new();
    doc.extend([Block::heading(1, "Title"), Block::Blank, Block::line("body")]);
    assert_eq!(doc.render(), "# Title\n\nbody\n");
}

#[test]
fn empty_document_renders_single_newline() {
    assert_eq!(Document::new().render(), "\n");
}
