//! Recursive directory walk.

use std::fs;
use std::path::{Path, PathBuf};

use mdsh_core::Category;

use crate::error::GatherError;
use crate::gatherer::Gatherer;

/// Index page names, highest priority first.
pub const INDEX_PAGES: [&str; 3] = ["_index.md", "index.en.md", "index.md"];

/// A file with this name marks its directory as not to be run.
pub const SENTINEL: &str = ".notest";

const MARKDOWN_EXTENSION: &str = "md";

impl Gatherer {
    /// Build the category for `dir`, recursing into subdirectories.
    ///
    /// Returns `None` when neither `dir` nor any descendant holds a page.
    ///
    /// # Errors
    /// Any error from reading the directory or building its pages.
    pub fn walk(&self, dir: &Path) -> Result<Option<Category>, GatherError> {
        tracing::debug!(dir = %dir.display(), "entering directory");

        let mut entries = fs::read_dir(dir)
            .map_err(GatherError::io(dir))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<PathBuf>, _>>()
            .map_err(GatherError::io(dir))?;
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut kinds = Vec::with_capacity(entries.len());
        for path in entries {
            let metadata = fs::metadata(&path).map_err(GatherError::io(&path))?;
            kinds.push((path, metadata.is_dir(), metadata.is_file()));
        }
        let files: Vec<&Path> = kinds
            .iter()
            .filter(|(_, _, is_file)| *is_file)
            .map(|(path, _, _)| path.as_path())
            .collect();

        let run = !files.iter().any(|file| file_name_is(file, SENTINEL));
        if !run {
            tracing::debug!(dir = %dir.display(), "{SENTINEL} found, category will not run");
        }

        let index = INDEX_PAGES
            .iter()
            .find_map(|name| files.iter().copied().find(|file| file_name_is(file, name)));

        let mut children = Vec::new();
        let mut pages = Vec::new();
        for (path, is_dir, is_file) in &kinds {
            if *is_dir {
                if let Some(child) = self.walk(path)? {
                    children.push(child);
                }
            } else if *is_file && is_markdown(path) {
                let is_index = index == Some(path.as_path());
                if let Some(page) = self.build_page(path, is_index)? {
                    pages.push(page);
                }
            }
        }

        let category = Category::assemble(dir, run, children, pages);
        if category.is_none() {
            tracing::debug!(dir = %dir.display(), "directory has no pages, pruned");
        }
        Ok(category)
    }
}

fn file_name_is(path: &Path, name: &str) -> bool {
    path.file_name().is_some_and(|n| n == name)
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION)
}
