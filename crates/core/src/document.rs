// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered document model and its markdown rendering.

/// One element of a rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Quote(String),
    Line(String),
    Bullet { depth: u8, text: String },
    /// A code fence whose contents are pasted verbatim by the reader.
    Fenced(Vec<Block>),
    Emphasis(String),
    Blank,
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn line(text: impl Into<String>) -> Self {
        Block::Line(text.into())
    }

    pub fn bullet(text: impl Into<String>) -> Self {
        Block::Bullet {
            depth: 0,
            text: text.into(),
        }
    }

    pub fn sub_bullet(text: impl Into<String>) -> Self {
        Block::Bullet {
            depth: 1,
            text: text.into(),
        }
    }

    fn render_into(&self, lines: &mut Vec<String>) {
        match self {
            Block::Heading { level, text } => {
                lines.push(format!("{} {}", "#".repeat(usize::from(*level)), text))
            }
            Block::Quote(text) => lines.push(format!("> {}", text)),
            Block::Line(text) => lines.push(text.clone()),
            Block::Bullet { depth, text } => {
                lines.push(format!("{}- {}", "  ".repeat(usize::from(*depth)), text))
            }
            Block::Fenced(inner) => {
                lines.push("```".to_string());
                for block in inner {
                    block.render_into(lines);
                }
                lines.push("```".to_string());
            }
            Block::Emphasis(text) => lines.push(format!("_{}_", text)),
            Block::Blank => lines.push(String::new()),
        }
    }
}

/// A document as an ordered list of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
    }

    /// Rendered lines, without terminators.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for block in &self.blocks {
            block.render_into(&mut lines);
        }
        lines
    }

    /// Markdown text, newline-terminated.
    pub fn render(&self) -> String {
        let mut text = self.lines().join("\n");
        text.push('\n');
        text
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
