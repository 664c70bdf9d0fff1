//! Rebuild runnable shell text from directive content.

use mdsh_core::HeredocMode;

/// Shell prompt stripped from the start of command lines.
pub const PROMPT: &str = "$ ";

const HEREDOC_START: &str = "<<EOF";
const HEREDOC_END: &str = "EOF";

/// Turn directive content into the command a runner executes.
///
/// With `raw` the content is returned untouched. Otherwise every line loses a
/// leading [`PROMPT`]. Lines between a `<<EOF` line and the next line
/// mentioning `EOF` form a heredoc body; `heredoc` decides whether prompts in
/// that body are stripped too.
#[must_use]
pub fn reconstruct_command(content: &str, raw: bool, heredoc: HeredocMode) -> String {
    if raw {
        return content.to_string();
    }

    let mut in_heredoc = false;
    let mut lines = Vec::new();

    for line in content.split('\n') {
        let line = if in_heredoc && heredoc == HeredocMode::Verbatim {
            line
        } else {
            line.strip_prefix(PROMPT).unwrap_or(line)
        };

        if line.contains(HEREDOC_START) {
            in_heredoc = true;
        } else if in_heredoc && line.contains(HEREDOC_END) {
            in_heredoc = false;
        }

        lines.push(line);
    }

    lines.join("\n")
}
