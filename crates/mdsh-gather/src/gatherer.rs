//! Gather entry point and options.

use std::path::Path;
use std::sync::Arc;

use mdsh_core::{Category, DiagnosticSink, FrontmatterPolicy, HeredocMode, TracingSink};

use crate::error::GatherError;

/// Interpretation switches for one gather.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GatherOptions {
    pub frontmatter: FrontmatterPolicy,
    pub heredoc: HeredocMode,
}

/// Walks a documentation tree into a [`Category`] plan.
///
/// Holds no state between calls; one instance can gather any number of
/// trees.
#[derive(Clone)]
pub struct Gatherer {
    pub(crate) options: GatherOptions,
    pub(crate) sink: Arc<dyn DiagnosticSink>,
}

impl std::fmt::Debug for Gatherer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gatherer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for Gatherer {
    fn default() -> Self {
        Self::new(GatherOptions::default())
    }
}

impl Gatherer {
    /// A gatherer reporting diagnostics through `tracing`.
    #[must_use]
    pub fn new(options: GatherOptions) -> Self {
        Self {
            options,
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Gather the plan rooted at `root`.
    ///
    /// Returns `Ok(None)` when the tree holds no page worth running.
    ///
    /// # Errors
    /// [`GatherError::NotFound`] when `root` is not an existing directory;
    /// otherwise the first error met while walking.
    pub fn gather(&self, root: impl AsRef<Path>) -> Result<Option<Category>, GatherError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(GatherError::NotFound {
                path: root.to_path_buf(),
            });
        }

        tracing::debug!(root = %root.display(), options = ?self.options, "gathering test plan");
        let plan = self.walk(root)?;
        if plan.is_none() {
            tracing::debug!(root = %root.display(), "no runnable pages found");
        }
        Ok(plan)
    }
}

/// Gather `root` with default options and the tracing sink.
///
/// # Errors
/// See [`Gatherer::gather`].
pub fn gather(root: impl AsRef<Path>) -> Result<Option<Category>, GatherError> {
    Gatherer::default().gather(root)
}
