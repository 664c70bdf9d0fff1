//! Page title and weight from a document's leading frontmatter.

use std::path::Path;

use mdsh_core::plan::UNKNOWN_TITLE;
use mdsh_parser::frontmatter::{parse_mapping, value_kind};
use mdsh_parser::{Document, Node};
use serde_yaml::{Mapping, Value};

use crate::error::GatherError;

pub const TITLE_KEY: &str = "title";
pub const WEIGHT_KEY: &str = "weight";
pub const SIDEBAR_POSITION_KEY: &str = "sidebar_position";

/// Frontmatter fields the plan cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub weight: i64,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: UNKNOWN_TITLE.to_string(),
            weight: 0,
        }
    }
}

/// Resolve title and weight from the first node of `document`.
///
/// `weight` wins over `sidebar_position`; with neither the weight is 0.
///
/// # Errors
/// [`GatherError::MissingFrontmatter`] when the first node is not a
/// frontmatter block, [`GatherError::InvalidFrontmatter`] when it is not a
/// YAML mapping or a weight has no integer reading.
pub fn resolve_frontmatter(document: &Document, file: &Path) -> Result<PageMeta, GatherError> {
    let Some(Node::Frontmatter(frontmatter)) = document.first() else {
        return Err(GatherError::MissingFrontmatter {
            file: file.to_path_buf(),
        });
    };

    let invalid = |reason: String| GatherError::InvalidFrontmatter {
        file: file.to_path_buf(),
        reason,
    };

    let mapping = parse_mapping(&frontmatter.value).map_err(|e| invalid(e.to_string()))?;

    let title = title(&mapping).map_err(&invalid)?;
    let weight = match integer(&mapping, WEIGHT_KEY).map_err(&invalid)? {
        Some(weight) => weight,
        None => integer(&mapping, SIDEBAR_POSITION_KEY)
            .map_err(&invalid)?
            .unwrap_or(0),
    };

    Ok(PageMeta { title, weight })
}

fn title(mapping: &Mapping) -> Result<String, String> {
    match mapping.get(TITLE_KEY) {
        None | Some(Value::Null) => Ok(UNKNOWN_TITLE.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(format!(
            "'{TITLE_KEY}' must be a string, found {}",
            value_kind(other)
        )),
    }
}

/// Integer reading of a weight key.
///
/// Fractional numbers truncate toward zero and strings use their leading
/// integer, so `1.5` and `"2.9"` weigh 1 and 2.
fn integer(mapping: &Mapping, key: &str) -> Result<Option<i64>, String> {
    let not_integer = |found: String| format!("'{key}' must be an integer, found {found}");
    match mapping.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(truncate))
            .map(Some)
            .ok_or_else(|| not_integer(n.to_string())),
        Some(Value::String(s)) => leading_integer(s)
            .map(Some)
            .ok_or_else(|| not_integer(format!("'{s}'"))),
        Some(other) => Err(not_integer(value_kind(other).to_string())),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f64) -> i64 {
    // Saturates outside the i64 range.
    value.trunc() as i64
}

/// Optional sign and the digits that follow it, after leading whitespace.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .chars()
        .take_while(char::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mdsh_parser::{Frontmatter, Paragraph};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn doc(yaml: &str) -> Document {
        Document {
            nodes: vec![Node::Frontmatter(Frontmatter {
                value: yaml.to_string(),
                line: 1,
            })],
        }
    }

    fn resolve(yaml: &str) -> Result<PageMeta, GatherError> {
        resolve_frontmatter(&doc(yaml), &PathBuf::from("docs/intro.md"))
    }

    #[rstest]
    #[case("title: Intro\nweight: 5", "Intro", 5)]
    #[case("title: Intro\nsidebar_position: 3", "Intro", 3)]
    #[case("title: Intro\nweight: 2\nsidebar_position: 9", "Intro", 2)]
    #[case("title: Intro\nweight: \"7\"", "Intro", 7)]
    #[case("weight: -4", "Unknown", -4)]
    #[case("title: 2024", "2024", 0)]
    #[case("title: ~\nweight: ~\nsidebar_position: 6", "Unknown", 6)]
    #[case("", "Unknown", 0)]
    #[case("title: Intro\nsidebar_position: 1.5", "Intro", 1)]
    #[case("title: Intro\nweight: \"2.9\"", "Intro", 2)]
    #[case("weight: -3.7", "Unknown", -3)]
    #[case("weight: \" 12px\"", "Unknown", 12)]
    fn resolves_title_and_weight(#[case] yaml: &str, #[case] title: &str, #[case] weight: i64) {
        assert_eq!(
            resolve(yaml).unwrap(),
            PageMeta {
                title: title.to_string(),
                weight,
            }
        );
    }

    #[test]
    fn missing_frontmatter_names_the_file() {
        let document = Document {
            nodes: vec![Node::Paragraph(Paragraph::from_text("Hello.", 1))],
        };
        let err = resolve_frontmatter(&document, &PathBuf::from("docs/intro.md")).unwrap_err();
        assert_eq!(err.to_string(), "No Frontmatter found at docs/intro.md");
    }

    #[test]
    fn empty_document_is_missing_frontmatter() {
        let err =
            resolve_frontmatter(&Document::default(), &PathBuf::from("a.md")).unwrap_err();
        assert!(matches!(err, GatherError::MissingFrontmatter { .. }));
    }

    #[test]
    fn frontmatter_after_other_content_is_missing() {
        let document = Document {
            nodes: vec![
                Node::Paragraph(Paragraph::from_text("Hello.", 1)),
                Node::Frontmatter(Frontmatter {
                    value: "title: Late".to_string(),
                    line: 3,
                }),
            ],
        };
        assert!(matches!(
            resolve_frontmatter(&document, &PathBuf::from("a.md")),
            Err(GatherError::MissingFrontmatter { .. })
        ));
    }

    #[rstest]
    #[case("weight: heavy")]
    #[case("weight: \"-\"")]
    #[case("weight: .nan")]
    #[case("sidebar_position: [1]")]
    #[case("title: [a, b]")]
    #[case("- just\n- a list")]
    fn invalid_frontmatter_is_rejected(#[case] yaml: &str) {
        assert!(matches!(
            resolve(yaml),
            Err(GatherError::InvalidFrontmatter { file, .. }) if file == PathBuf::from("docs/intro.md")
        ));
    }
}
