//! Gather configuration.

use mdsh_core::{FrontmatterPolicy, HeredocMode};
use mdsh_gather::GatherOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GatherConfig {
    /// `strict` aborts on a page without frontmatter, `skip` drops the page
    /// with a warning.
    #[serde(default)]
    pub frontmatter: FrontmatterPolicy,

    /// `inert` strips prompts inside heredoc bodies, `verbatim` keeps them.
    #[serde(default)]
    pub heredoc: HeredocMode,
}

impl GatherConfig {
    #[must_use]
    pub const fn options(&self) -> GatherOptions {
        GatherOptions {
            frontmatter: self.frontmatter,
            heredoc: self.heredoc,
        }
    }
}
