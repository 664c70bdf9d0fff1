//! The document tree handed to the gatherer.
//!
//! Block structure comes from tree-sitter-md; container directives are
//! recognised on top of it, because the grammar sees `:::name{...}` fences as
//! ordinary paragraph lines. A directive owns every block between its opening
//! and closing fence, so a fenced code block inside `:::code` becomes a child
//! of the directive rather than a sibling.

use crate::blocks::{Block, collect_blocks};
use crate::directive::{Attributes, parse_closer, parse_opener};

/// A parsed Markdown document: its top-level nodes in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

/// One node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Frontmatter(Frontmatter),
    Directive(Directive),
    Paragraph(Paragraph),
    Text(Text),
    Code(Code),
    Other(Other),
}

/// Raw YAML of a leading `---` metadata block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    pub value: String,
    pub line: usize,
}

/// A `:::name[label]{attributes}` container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub label: Option<String>,
    pub attributes: Attributes,
    pub children: Vec<Node>,
    /// Line of the opening fence.
    pub line: usize,
}

/// Consecutive text lines. Children are [`Node::Text`] runs.
///
/// Inline Markdown is kept as written, so code spans and backslash escapes
/// reach the text runs undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub children: Vec<Node>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub value: String,
    pub line: usize,
}

/// A fenced or indented code block; `value` excludes the closing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    pub value: String,
    pub lang: Option<String>,
    pub line: usize,
}

/// Any block the gatherer does not interpret (headings, lists, tables, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Other {
    pub kind: String,
    pub line: usize,
}

impl Paragraph {
    /// A paragraph holding a single text run.
    #[must_use]
    pub fn from_text(value: impl Into<String>, line: usize) -> Self {
        Self {
            children: vec![Node::Text(Text {
                value: value.into(),
                line,
            })],
            line,
        }
    }
}

impl Document {
    /// Parse Markdown source.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let blocks = collect_blocks(source);
        let nodes = Assembler::default().run(blocks);
        tracing::trace!(nodes = nodes.len(), "parsed markdown document");
        Self { nodes }
    }

    /// The first top-level node, where frontmatter must sit.
    #[must_use]
    pub fn first(&self) -> Option<&Node> {
        self.nodes.first()
    }
}

struct OpenDirective {
    fence: usize,
    directive: Directive,
}

#[derive(Default)]
struct Assembler {
    top: Vec<Node>,
    open: Vec<OpenDirective>,
}

impl Assembler {
    fn run(mut self, blocks: Vec<Block>) -> Vec<Node> {
        for block in blocks {
            match block {
                Block::Frontmatter { raw, line } => {
                    self.push(Node::Frontmatter(Frontmatter { value: raw, line }));
                }
                Block::Paragraph { lines, line } => self.paragraph(lines, line),
                Block::Code { value, lang, line } => {
                    self.push(Node::Code(Code { value, lang, line }));
                }
                Block::Other { kind, line } => self.push(Node::Other(Other { kind, line })),
            }
        }

        // Unclosed directives run to the end of the document.
        while let Some(open) = self.open.pop() {
            self.push(Node::Directive(open.directive));
        }
        self.top
    }

    fn push(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(open) => open.directive.children.push(node),
            None => self.top.push(node),
        }
    }

    fn paragraph(&mut self, lines: Vec<String>, first_line: usize) {
        let mut pending: Vec<String> = Vec::new();
        let mut pending_line = first_line;

        for (offset, text) in lines.into_iter().enumerate() {
            let line = first_line + offset;

            if let Some(opener) = parse_opener(&text) {
                self.flush(&mut pending, pending_line);
                self.open.push(OpenDirective {
                    fence: opener.fence,
                    directive: Directive {
                        name: opener.name,
                        label: opener.label,
                        attributes: opener.attributes,
                        children: Vec::new(),
                        line,
                    },
                });
                continue;
            }

            let closes = parse_closer(&text)
                .is_some_and(|fence| self.open.last().is_some_and(|open| fence >= open.fence));
            if closes {
                self.flush(&mut pending, pending_line);
                if let Some(open) = self.open.pop() {
                    self.push(Node::Directive(open.directive));
                }
                continue;
            }

            if pending.is_empty() {
                pending_line = line;
            }
            pending.push(text);
        }

        self.flush(&mut pending, pending_line);
    }

    fn flush(&mut self, pending: &mut Vec<String>, line: usize) {
        if pending.is_empty() {
            return;
        }
        let value = std::mem::take(pending).join("\n");
        self.push(Node::Paragraph(Paragraph::from_text(value, line)));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn assemble(blocks: Vec<Block>) -> Vec<Node> {
        Assembler::default().run(blocks)
    }

    fn para(lines: &[&str], line: usize) -> Block {
        Block::Paragraph {
            lines: lines.iter().map(|l| (*l).to_string()).collect(),
            line,
        }
    }

    fn directive(nodes: &[Node]) -> &Directive {
        match nodes {
            [Node::Directive(d)] => d,
            other => panic!("expected a single directive, got {other:?}"),
        }
    }

    #[test]
    fn directive_inside_one_paragraph() {
        let nodes = assemble(vec![para(
            &[":::code{showCopyAction=true}", "$ ls", "$ pwd", ":::"],
            5,
        )]);

        let d = directive(&nodes);
        assert_eq!(d.name, "code");
        assert_eq!(d.line, 5);
        assert_eq!(d.attributes.get("showCopyAction"), Some("true"));
        assert_eq!(d.children, vec![Node::Paragraph(Paragraph::from_text("$ ls\n$ pwd", 6))]);
    }

    #[test]
    fn directive_wraps_following_code_block() {
        let nodes = assemble(vec![
            para(&[":::code{showCopyAction=true}"], 3),
            Block::Code {
                value: "echo hi".to_string(),
                lang: Some("bash".to_string()),
                line: 4,
            },
            para(&[":::"], 7),
        ]);

        let d = directive(&nodes);
        assert_eq!(
            d.children,
            vec![Node::Code(Code {
                value: "echo hi".to_string(),
                lang: Some("bash".to_string()),
                line: 4,
            })]
        );
    }

    #[test]
    fn text_around_directive_stays_outside() {
        let nodes = assemble(vec![para(&["Before.", ":::note", "Inside.", ":::", "After."], 1)]);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], Node::Paragraph(Paragraph::from_text("Before.", 1)));
        assert!(matches!(&nodes[1], Node::Directive(d) if d.name == "note" && d.line == 2));
        assert_eq!(nodes[2], Node::Paragraph(Paragraph::from_text("After.", 5)));
    }

    #[test]
    fn nested_directive_closes_innermost_first() {
        let nodes = assemble(vec![para(
            &["::::tabs", ":::code{a=1}", "ls", ":::", "::::"],
            1,
        )]);

        let outer = directive(&nodes);
        assert_eq!(outer.name, "tabs");
        let inner = directive(&outer.children);
        assert_eq!(inner.name, "code");
        assert_eq!(inner.children, vec![Node::Paragraph(Paragraph::from_text("ls", 3))]);
    }

    #[test]
    fn short_closer_does_not_close_long_fence() {
        let nodes = assemble(vec![para(&["::::tabs", "x", ":::", "::::"], 1)]);
        let outer = directive(&nodes);
        assert_eq!(
            outer.children,
            vec![Node::Paragraph(Paragraph::from_text("x\n:::", 2))]
        );
    }

    #[test]
    fn unclosed_directive_runs_to_end() {
        let nodes = assemble(vec![
            para(&[":::code{showCopyAction=true}", "ls"], 1),
            Block::Other {
                kind: "atx_heading".to_string(),
                line: 4,
            },
        ]);
        let d = directive(&nodes);
        assert_eq!(d.children.len(), 2);
    }

    #[test]
    fn stray_closer_is_text() {
        let nodes = assemble(vec![para(&[":::"], 1)]);
        assert_eq!(nodes, vec![Node::Paragraph(Paragraph::from_text(":::", 1))]);
    }
}
