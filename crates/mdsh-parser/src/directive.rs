//! Line-level recognition of container directive fences.
//!
//! ```text
//! :::code{showCopyAction=true language=bash}
//! $ ls
//! :::
//! ```
//!
//! An opening fence is three or more colons, a name, an optional `[label]`
//! and an optional `{attributes}` block. A closing fence is a line of colons
//! only, at least as long as the fence it closes.

/// Minimum number of colons in a container fence.
const MIN_FENCE: usize = 3;

/// Directive attributes in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Set `key`, keeping its original position when it already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.0.push((key, value));
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::default();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

/// A parsed opening fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opener {
    pub fence: usize,
    pub name: String,
    pub label: Option<String>,
    pub attributes: Attributes,
}

/// Parse `line` as an opening fence.
#[must_use]
pub fn parse_opener(line: &str) -> Option<Opener> {
    let line = line.trim();
    let fence = line.chars().take_while(|c| *c == ':').count();
    if fence < MIN_FENCE {
        return None;
    }
    let rest = &line[fence..];

    let name_len = rest
        .char_indices()
        .find(|(i, c)| {
            let valid = if *i == 0 {
                c.is_ascii_alphabetic()
            } else {
                c.is_ascii_alphanumeric() || *c == '-' || *c == '_'
            };
            !valid
        })
        .map_or(rest.len(), |(i, _)| i);
    if name_len == 0 {
        return None;
    }
    let name = rest[..name_len].to_string();
    let mut rest = &rest[name_len..];

    let mut label = None;
    if let Some(inner) = rest.strip_prefix('[') {
        let close = inner.find(']')?;
        label = Some(inner[..close].to_string());
        rest = &inner[close + 1..];
    }

    let mut attributes = Attributes::default();
    if let Some(inner) = rest.strip_prefix('{') {
        let close = inner.rfind('}')?;
        attributes = parse_attributes(&inner[..close]);
        rest = &inner[close + 1..];
    }

    if !rest.trim().is_empty() {
        return None;
    }

    Some(Opener {
        fence,
        name,
        label,
        attributes,
    })
}

/// Length of the closing fence on `line`, if it is one.
#[must_use]
pub fn parse_closer(line: &str) -> Option<usize> {
    let line = line.trim();
    let fence = line.chars().take_while(|c| *c == ':').count();
    (fence >= MIN_FENCE && fence == line.len()).then_some(fence)
}

/// Parse the inside of an `{...}` attribute block.
///
/// Supports `key=value`, `key="value"`, `key='value'`, bare `key`,
/// `#id` and `.class` shortcuts.
#[must_use]
pub fn parse_attributes(source: &str) -> Attributes {
    let mut attributes = Attributes::default();
    let mut classes: Vec<String> = Vec::new();
    let mut chars = source.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let Some(&first) = chars.peek() else {
            break;
        };

        match first {
            '#' | '.' => {
                chars.next();
                let token = take_bare(&mut chars);
                if token.is_empty() {
                    continue;
                }
                if first == '#' {
                    attributes.insert("id", token);
                } else {
                    classes.push(token);
                }
            }
            _ => {
                let key: String =
                    std::iter::from_fn(|| chars.next_if(|c| !c.is_whitespace() && *c != '='))
                        .collect();
                while chars.next_if(|c| c.is_whitespace()).is_some() {}
                let value = if chars.next_if_eq(&'=').is_some() {
                    while chars.next_if(|c| c.is_whitespace()).is_some() {}
                    take_value(&mut chars)
                } else {
                    String::new()
                };
                if key.is_empty() {
                    // A stray '=' with no key; skip past whatever followed it.
                    continue;
                }
                attributes.insert(key, value);
            }
        }
    }

    if !classes.is_empty() {
        attributes.insert("class", classes.join(" "));
    }
    attributes
}

fn take_bare(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    std::iter::from_fn(|| chars.next_if(|c| !c.is_whitespace())).collect()
}

fn take_value(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    match chars.peek().copied() {
        Some(quote @ ('"' | '\'')) => {
            chars.next();
            let value: String = std::iter::from_fn(|| chars.next_if(|c| *c != quote)).collect();
            chars.next();
            value
        }
        _ => take_bare(chars),
    }
}
