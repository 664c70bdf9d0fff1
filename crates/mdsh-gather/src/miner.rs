//! Turn `:::code` directives into scripts.
//!
//! Only top-level directives are mined. A directive qualifies when it is
//! named `code` and carries `showCopyAction="true"`; its attributes then set
//! the script's timings, hook, and error expectation.

use std::path::Path;

use mdsh_core::{Diagnostic, DiagnosticKind, DiagnosticSink, HeredocMode, Script};
use mdsh_parser::{Directive, Document, Node};

use crate::command::reconstruct_command;
use crate::error::GatherError;

pub const DIRECTIVE_NAME: &str = "code";
pub const SHOW_COPY_ACTION_KEY: &str = "showCopyAction";
pub const WAIT_KEY: &str = "wait";
pub const TIMEOUT_KEY: &str = "timeout";
pub const TEST_KEY: &str = "test";
pub const EXPECT_ERROR_KEY: &str = "expectError";
pub const RAW_KEY: &str = "raw";
pub const HOOK_KEY: &str = "hook";
pub const HOOK_TIMEOUT_KEY: &str = "hookTimeout";

/// Collect the scripts of `document` in document order.
///
/// Unknown attribute keys are reported to `sink` and otherwise ignored.
///
/// # Errors
/// Returns [`GatherError::InvalidAttribute`] when `wait`, `timeout` or
/// `hookTimeout` is not a non-negative integer.
pub fn mine_scripts(
    document: &Document,
    file: &Path,
    heredoc: HeredocMode,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<Script>, GatherError> {
    let mut scripts = Vec::new();

    for node in &document.nodes {
        let Node::Directive(directive) = node else {
            continue;
        };
        if !qualifies(directive) {
            continue;
        }

        let settings = DirectiveSettings::resolve(directive, file, sink)?;
        if !settings.include {
            tracing::debug!(file = %file.display(), line = directive.line, "code directive excluded by test=false");
            continue;
        }

        let content = directive_content(directive);
        if content.is_empty() {
            continue;
        }

        let command = reconstruct_command(&content, settings.raw, heredoc);
        if command.is_empty() {
            continue;
        }

        scripts.push(Script {
            command,
            wait: settings.wait,
            timeout: settings.timeout,
            hook: settings.hook,
            hook_timeout: settings.hook_timeout,
            expect_error: settings.expect_error,
            line_number: directive.line,
        });
    }

    Ok(scripts)
}

fn qualifies(directive: &Directive) -> bool {
    directive.name == DIRECTIVE_NAME
        && directive.attributes.get(SHOW_COPY_ACTION_KEY) == Some("true")
}

/// Attribute values of one qualifying directive.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DirectiveSettings {
    include: bool,
    raw: bool,
    wait: u64,
    timeout: u64,
    hook: Option<String>,
    hook_timeout: u64,
    expect_error: bool,
}

impl Default for DirectiveSettings {
    fn default() -> Self {
        let script = Script::new(String::new(), 0);
        Self {
            include: true,
            raw: false,
            wait: script.wait,
            timeout: script.timeout,
            hook: script.hook,
            hook_timeout: script.hook_timeout,
            expect_error: script.expect_error,
        }
    }
}

impl DirectiveSettings {
    fn resolve(
        directive: &Directive,
        file: &Path,
        sink: &dyn DiagnosticSink,
    ) -> Result<Self, GatherError> {
        let mut settings = Self::default();
        let seconds = |key: &str, value: &str| {
            value
                .trim()
                .parse::<u64>()
                .map_err(|_| GatherError::InvalidAttribute {
                    file: file.to_path_buf(),
                    line: directive.line,
                    key: key.to_string(),
                    value: value.to_string(),
                })
        };

        for (key, value) in directive.attributes.iter() {
            match key {
                WAIT_KEY => settings.wait = seconds(key, value)?,
                TIMEOUT_KEY => settings.timeout = seconds(key, value)?,
                TEST_KEY => settings.include = value != "false",
                EXPECT_ERROR_KEY => settings.expect_error = value == "true",
                RAW_KEY => settings.raw = value == "true",
                HOOK_KEY => settings.hook = Some(value.to_string()),
                HOOK_TIMEOUT_KEY => settings.hook_timeout = seconds(key, value)?,
                SHOW_COPY_ACTION_KEY => {}
                unknown => sink.report(Diagnostic {
                    file: file.to_path_buf(),
                    line: Some(directive.line),
                    kind: DiagnosticKind::UnknownAttribute {
                        key: unknown.to_string(),
                    },
                }),
            }
        }

        Ok(settings)
    }
}

/// Code values, paragraph text runs and bare text among the directive's
/// children, concatenated in order.
fn directive_content(directive: &Directive) -> String {
    let mut content = String::new();
    for child in &directive.children {
        match child {
            Node::Code(code) => content.push_str(&code.value),
            Node::Paragraph(paragraph) => {
                for run in &paragraph.children {
                    if let Node::Text(text) = run {
                        content.push_str(&text.value);
                    }
                }
            }
            Node::Text(text) => content.push_str(&text.value),
            Node::Frontmatter(_) | Node::Directive(_) | Node::Other(_) => {}
        }
    }
    content
}
