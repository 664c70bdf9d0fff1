//! Flatten the tree-sitter-md block tree into top-level blocks.
//!
//! `section` nodes are transparent: the grammar wraps every heading and the
//! blocks under it in one, but documents are mined as a flat block sequence.

use ast_grep_core::{Doc, Node};

use crate::parser::parse_markdown_source;

/// Width of an indented code block's indentation.
const CODE_INDENT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Block {
    Frontmatter {
        raw: String,
        line: usize,
    },
    Paragraph {
        lines: Vec<String>,
        line: usize,
    },
    Code {
        value: String,
        lang: Option<String>,
        line: usize,
    },
    Other {
        kind: String,
        line: usize,
    },
}

pub(crate) fn collect_blocks(source: &str) -> Vec<Block> {
    let tree = parse_markdown_source(source);
    let mut blocks = Vec::new();
    for child in tree.root().children() {
        push_block(&child, &mut blocks);
    }
    blocks
}

fn push_block<D: Doc>(node: &Node<'_, D>, out: &mut Vec<Block>) {
    if !node.is_named() {
        return;
    }

    let line = node.start_pos().line() + 1;
    match node.kind().as_ref() {
        "section" => {
            for child in node.children() {
                push_block(&child, out);
            }
        }
        "minus_metadata" => out.push(Block::Frontmatter {
            raw: metadata_body(&node.text()),
            line,
        }),
        "paragraph" => out.push(Block::Paragraph {
            lines: paragraph_lines(&node.text()),
            line,
        }),
        "fenced_code_block" => {
            let value = node
                .children()
                .find(|c| c.kind().as_ref() == "code_fence_content")
                .map(|c| strip_final_newline(&c.text()).to_string())
                .unwrap_or_default();
            let lang = node
                .children()
                .find(|c| c.kind().as_ref() == "info_string")
                .and_then(|c| c.text().split_whitespace().next().map(str::to_string));
            out.push(Block::Code { value, lang, line });
        }
        "indented_code_block" => out.push(Block::Code {
            value: dedent_code(&node.text()),
            lang: None,
            line,
        }),
        kind => out.push(Block::Other {
            kind: kind.to_string(),
            line,
        }),
    }
}

/// The YAML between the `---` delimiters of a metadata block.
fn metadata_body(raw: &str) -> String {
    raw.lines()
        .skip(1)
        .take_while(|line| {
            let line = line.trim_end();
            line != "---" && line != "..."
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Paragraph lines with CommonMark's leading and trailing whitespace removed.
fn paragraph_lines(raw: &str) -> Vec<String> {
    strip_final_newline(raw)
        .lines()
        .map(|line| line.trim().to_string())
        .collect()
}

fn strip_final_newline(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}

fn dedent_code(raw: &str) -> String {
    raw.trim_end_matches(['\n', '\r'])
        .lines()
        .map(|line| {
            let indent = line
                .chars()
                .take(CODE_INDENT)
                .take_while(|c| *c == ' ')
                .count();
            &line[indent..]
        })
        .collect::<Vec<_>>()
        .join("\n")
}
