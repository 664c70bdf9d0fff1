//! Switches that change how documents are interpreted.

use serde::{Deserialize, Serialize};

/// What to do with a Markdown file whose first node is not frontmatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontmatterPolicy {
    /// Abort the whole gather.
    #[default]
    Strict,
    /// Leave the file out of the plan and report a diagnostic.
    Skip,
}

/// How `$ ` prompts are treated inside `<<EOF` heredoc bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeredocMode {
    /// Heredoc regions are tracked but prompts are stripped everywhere.
    #[default]
    Inert,
    /// Lines inside a heredoc body are kept exactly as written.
    Verbatim,
}
