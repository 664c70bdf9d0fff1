//! ast-grep wrapper around the tree-sitter-md block grammar.

use std::borrow::Cow;

use ast_grep_core::language::Language;
use ast_grep_core::matcher::{Pattern, PatternBuilder, PatternError};
use ast_grep_core::tree_sitter::{LanguageExt, StrDoc, TSLanguage};

/// The concrete AST tree type returned by [`parse_markdown_source`].
pub type AstTree = ast_grep_core::AstGrep<StrDoc<MarkdownLang>>;

/// Block-level Markdown (CommonMark + GFM tables + YAML metadata).
#[derive(Clone, Copy, Debug)]
pub struct MarkdownLang;

impl Language for MarkdownLang {
    fn pre_process_pattern<'q>(&self, query: &'q str) -> Cow<'q, str> {
        Cow::Borrowed(query)
    }

    fn kind_to_id(&self, kind: &str) -> u16 {
        self.get_ts_language().id_for_node_kind(kind, true)
    }

    fn field_to_id(&self, field: &str) -> Option<u16> {
        self.get_ts_language()
            .field_id_for_name(field)
            .map(std::num::NonZero::get)
    }

    fn build_pattern(&self, builder: &PatternBuilder) -> Result<Pattern, PatternError> {
        builder.build(|src| StrDoc::try_new(src, *self))
    }
}

impl LanguageExt for MarkdownLang {
    fn get_ts_language(&self) -> TSLanguage {
        tree_sitter_md::LANGUAGE.into()
    }
}

/// Parse Markdown source into an ast-grep tree.
#[must_use]
pub fn parse_markdown_source(source: &str) -> AstTree {
    MarkdownLang.ast_grep(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_source_produces_document_root() {
        let tree = parse_markdown_source("# Title\n\nBody.\n");
        assert_eq!(tree.root().kind().as_ref(), "document");
    }
}
