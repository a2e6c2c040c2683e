//! Triggering elements and the selectors that qualify them.
//!
//! An [`Element`] is a snapshot of an action control (link, button, submit
//! input) as the host page sees it: its tag name and attributes. The modal
//! layer only ever reads attributes; the host owns the real control.

use crate::error::SelectorError;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Stable identity of a triggering element, assigned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Action control with its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub tag: String,
    attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn new(id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: ElementId::new(id),
            tag: tag.into().to_ascii_lowercase(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style `data-*` setter; `key` is given without the prefix
    pub fn with_data(self, key: &str, value: impl Into<String>) -> Self {
        self.with_attr(format!("data-{key}"), value)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into().to_ascii_lowercase(), value.into());
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.attr(&format!("data-{key}"))
    }

    /// Confirmation text, the attribute that makes the element confirmable
    pub fn confirm_text(&self) -> Option<&str> {
        self.data("confirm")
    }
}

/// Attribute filter inside a selector: `[name]` or `[name=value]`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AttributeFilter {
    name: String,
    value: Option<String>,
}

/// Compound selector of the form `tag[attr][attr=value]`.
///
/// Only the subset used for confirmable elements is supported: an optional
/// tag name (or `*`) followed by any number of presence or equality filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    tag: Option<String>,
    filters: Vec<AttributeFilter>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(SelectorError::Empty);
        }

        let (tag_part, mut rest) = match trimmed.find('[') {
            Some(index) => trimmed.split_at(index),
            None => (trimmed, ""),
        };
        let tag = match tag_part.trim() {
            "" | "*" => None,
            tag => Some(tag.to_ascii_lowercase()),
        };

        let mut filters = Vec::new();
        while !rest.is_empty() {
            let Some(body) = rest.strip_prefix('[') else {
                return Err(SelectorError::InvalidFilter {
                    selector: trimmed.to_string(),
                    filter: rest.to_string(),
                });
            };
            let Some(end) = body.find(']') else {
                return Err(SelectorError::Unterminated(trimmed.to_string()));
            };
            filters.push(Self::parse_filter(trimmed, &body[..end])?);
            rest = &body[end + 1..];
        }

        Ok(Self {
            source: trimmed.to_string(),
            tag,
            filters,
        })
    }

    fn parse_filter(selector: &str, filter: &str) -> Result<AttributeFilter, SelectorError> {
        let invalid = || SelectorError::InvalidFilter {
            selector: selector.to_string(),
            filter: filter.to_string(),
        };

        let (name, value) = match filter.split_once('=') {
            Some((name, value)) => {
                let value = value.trim();
                let unquoted = value
                    .strip_prefix('"')
                    .and_then(|v| v.strip_suffix('"'))
                    .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                    .unwrap_or(value);
                (name.trim(), Some(unquoted.to_string()))
            }
            None => (filter.trim(), None),
        };

        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(invalid());
        }

        Ok(AttributeFilter {
            name: name.to_ascii_lowercase(),
            value,
        })
    }

    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if *tag != element.tag {
                return false;
            }
        }

        self.filters.iter().all(|filter| match (&filter.value, element.attr(&filter.name)) {
            (None, present) => present.is_some(),
            (Some(expected), Some(actual)) => expected == actual,
            (Some(_), None) => false,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Whether any of `selectors` matches the element. Unparseable selectors never match.
pub fn matches_any<S: AsRef<str>>(selectors: &[S], element: &Element) -> bool {
    selectors.iter().any(|source| match Selector::parse(source.as_ref()) {
        Ok(selector) => selector.matches(element),
        Err(e) => {
            log::warn!("Ignoring confirmable selector: {}", e);
            false
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compound_selector() {
        let selector = Selector::parse("input[type=submit][data-confirm]").unwrap();
        assert_eq!(selector.tag.as_deref(), Some("input"));
        assert_eq!(selector.filters.len(), 2);
        assert_eq!(selector.filters[0].value.as_deref(), Some("submit"));
        assert_eq!(selector.filters[1].value, None);
    }

    #[test]
    fn test_quoted_values() {
        let selector = Selector::parse("button[data-dismiss='modal']").unwrap();
        assert_eq!(selector.filters[0].value.as_deref(), Some("modal"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Selector::parse("  "), Err(SelectorError::Empty));
        assert!(matches!(Selector::parse("a[data-confirm"), Err(SelectorError::Unterminated(_))));
        assert!(matches!(Selector::parse("a[]"), Err(SelectorError::InvalidFilter { .. })));
        assert!(matches!(Selector::parse("a[x]y"), Err(SelectorError::InvalidFilter { .. })));
    }

    #[test]
    fn test_matching() {
        let submit = Element::new("s", "INPUT").with_attr("type", "submit").with_data("confirm", "Sure?");
        let text = Element::new("t", "input").with_attr("type", "text").with_data("confirm", "Sure?");

        let selector = Selector::parse("input[type=submit][data-confirm]").unwrap();
        assert!(selector.matches(&submit));
        assert!(!selector.matches(&text));
        assert!(Selector::parse("[data-confirm]").unwrap().matches(&text));
    }
}
