//! YAML frontmatter decoding.

use serde_yaml::{Mapping, Value};

use crate::error::ParserError;

/// Decode the raw YAML of a frontmatter block into a key/value mapping.
///
/// An empty block decodes to an empty mapping.
///
/// # Errors
/// Returns [`ParserError::Yaml`] for malformed YAML and
/// [`ParserError::NotAMapping`] when the document is a scalar or sequence.
pub fn parse_mapping(raw: &str) -> Result<Mapping, ParserError> {
    if raw.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(raw)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(ParserError::NotAMapping {
            found: value_kind(&other),
        }),
    }
}

/// Human-readable YAML type name for error messages.
#[must_use]
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
