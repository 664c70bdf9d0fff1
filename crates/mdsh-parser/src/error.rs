//! Parser error types for mdsh-parser.

/// Errors raised while decoding document metadata.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("frontmatter must be a mapping, found {found}")]
    NotAMapping { found: &'static str },
}
