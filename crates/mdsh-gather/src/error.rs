//! Gather error types for mdsh-gather.

use std::path::PathBuf;

/// Conditions that abort a gather.
#[derive(Debug, thiserror::Error)]
pub enum GatherError {
    /// The root directory handed to `gather` does not exist.
    #[error("Directory '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    /// A Markdown file does not start with a frontmatter block.
    #[error("No Frontmatter found at {}", .file.display())]
    MissingFrontmatter { file: PathBuf },

    /// The frontmatter block exists but cannot be interpreted.
    #[error("Invalid frontmatter in {}: {reason}", .file.display())]
    InvalidFrontmatter { file: PathBuf, reason: String },

    /// An integer directive attribute holds something other than an integer.
    #[error(
        "Invalid value '{value}' for '{key}' in code directive at {}:{line}: expected a non-negative integer",
        .file.display()
    )]
    InvalidAttribute {
        file: PathBuf,
        line: usize,
        key: String,
        value: String,
    },

    /// Reading a directory or file failed.
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GatherError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
