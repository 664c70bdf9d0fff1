//! # mdsh-parser
//!
//! Markdown parsing for mdsh.
//!
//! Turns one Markdown file into a [`Document`]: a flat sequence of top-level
//! [`Node`]s (frontmatter, container directives, paragraphs, code blocks).
//! Block structure comes from tree-sitter-md through ast-grep; container
//! directives (`:::name{key=value}` ... `:::`) are layered on top.

pub mod directive;
pub mod document;
pub mod error;
pub mod frontmatter;
pub mod parser;

mod blocks;

pub use directive::Attributes;
pub use document::{Code, Directive, Document, Frontmatter, Node, Other, Paragraph, Text};
pub use error::ParserError;
