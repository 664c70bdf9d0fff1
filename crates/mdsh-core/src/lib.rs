//! # mdsh-core
//!
//! Shared types for mdsh, the Markdown test-plan gatherer.
//!
//! - [`plan`]: categories, pages, scripts, and weight ordering
//! - [`diagnostics`]: the injectable warning sink
//! - [`policy`]: interpretation switches shared by the gatherer and config

pub mod diagnostics;
pub mod plan;
pub mod policy;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink};
pub use plan::{Category, Page, Script, Weighted, sort_by_weight};
pub use policy::{FrontmatterPolicy, HeredocMode};
