//! Non-fatal findings reported while gathering.
//!
//! The gatherer never prints; it hands every warning to a [`DiagnosticSink`].
//! The CLI uses [`TracingSink`], tests use [`CollectingSink`].

use std::fmt;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A `:::code` directive carried an attribute the gatherer does not know.
    UnknownAttribute { key: String },
    /// A Markdown file was left out of the plan.
    SkippedFile { reason: String },
}

/// A warning tied to a source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: PathBuf,
    pub line: Option<usize>,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        match &self.kind {
            DiagnosticKind::UnknownAttribute { key } => {
                write!(f, ": unrecognized param {key} in code directive")
            }
            DiagnosticKind::SkippedFile { reason } => write!(f, ": skipped ({reason})"),
        }
    }
}

/// Receiver for gather diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!(file = %diagnostic.file.display(), line = ?diagnostic.line, "{diagnostic}");
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    seen: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, in report order.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_sink_keeps_order() {
        let sink = CollectingSink::new();
        for key in ["language", "title"] {
            sink.report(Diagnostic {
                file: PathBuf::from("a.md"),
                line: Some(3),
                kind: DiagnosticKind::UnknownAttribute {
                    key: key.to_string(),
                },
            });
        }

        let keys: Vec<_> = sink
            .diagnostics()
            .into_iter()
            .map(|d| match d.kind {
                DiagnosticKind::UnknownAttribute { key } => key,
                DiagnosticKind::SkippedFile { reason } => reason,
            })
            .collect();
        assert_eq!(keys, vec!["language", "title"]);
    }

    #[test]
    fn display_names_file_line_and_key() {
        let diagnostic = Diagnostic {
            file: PathBuf::from("docs/a.md"),
            line: Some(12),
            kind: DiagnosticKind::UnknownAttribute {
                key: "language".to_string(),
            },
        };
        assert_eq!(
            diagnostic.to_string(),
            "docs/a.md:12: unrecognized param language in code directive"
        );
    }

    #[test]
    fn display_without_line() {
        let diagnostic = Diagnostic {
            file: PathBuf::from("b.md"),
            line: None,
            kind: DiagnosticKind::SkippedFile {
                reason: "no frontmatter".to_string(),
            },
        };
        assert_eq!(diagnostic.to_string(), "b.md: skipped (no frontmatter)");
    }
}
