//! Build one [`Page`] from a Markdown file.

use std::path::Path;

use mdsh_core::{Diagnostic, DiagnosticKind, FrontmatterPolicy, Page};
use mdsh_parser::Document;

use crate::error::GatherError;
use crate::frontmatter::resolve_frontmatter;
use crate::gatherer::Gatherer;
use crate::miner::mine_scripts;

impl Gatherer {
    /// Read, parse and mine `file`.
    ///
    /// Returns `None` for a non-index page without scripts, and for a page
    /// skipped under [`FrontmatterPolicy::Skip`].
    ///
    /// # Errors
    /// [`GatherError::Io`] when the file cannot be read, plus any
    /// frontmatter or attribute error.
    pub fn build_page(&self, file: &Path, is_index: bool) -> Result<Option<Page>, GatherError> {
        let source = std::fs::read_to_string(file).map_err(GatherError::io(file))?;
        let document = Document::parse(&source);

        let meta = match resolve_frontmatter(&document, file) {
            Ok(meta) => meta,
            Err(GatherError::MissingFrontmatter { .. })
                if self.options.frontmatter == FrontmatterPolicy::Skip =>
            {
                self.sink.report(Diagnostic {
                    file: file.to_path_buf(),
                    line: None,
                    kind: DiagnosticKind::SkippedFile {
                        reason: "no frontmatter".to_string(),
                    },
                });
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let scripts = mine_scripts(&document, file, self.options.heredoc, self.sink.as_ref())?;
        if !is_index && scripts.is_empty() {
            tracing::debug!(file = %file.display(), "page has no scripts, dropped");
            return Ok(None);
        }

        tracing::debug!(file = %file.display(), scripts = scripts.len(), is_index, "page kept");
        Ok(Some(Page {
            title: meta.title,
            weight: meta.weight,
            file: file.to_path_buf(),
            is_index,
            scripts,
        }))
    }
}
