//! The key-convention grammar of the markup builder.
//!
//! Mapping keys carry structural meaning: a `@` prefix turns a scalar entry
//! into an attribute, the reserved `#` key inlines its value into the
//! current element, and a sequence under a non-numeric key expands into
//! repeated sibling elements. Everything else becomes a single child
//! element, with invalid or numeric names silently resolving to a
//! configured anonymous container tag. The grammar is evaluated once per
//! key by [`classify_key`].

use ebaylink_model::Value;

/// The structural role a mapping key plays for a given value shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole<'a> {
    /// Set an attribute (named by the `@`-stripped key) on the current
    /// element instead of creating a child.
    Attribute(&'a str),
    /// Apply the value as inline content of the current element itself.
    InlineContent,
    /// Expand the sequence into one sibling element per item, all sharing
    /// this key's tag.
    RepeatedElement,
    /// Create a single child element for the value.
    ChildElement,
}

/// Classify a mapping key against the shape of its value.
///
/// Rules, in priority order:
///
/// 1. `@name` with a scalar value and a valid `name` token → [`KeyRole::Attribute`]
/// 2. the reserved key `#` → [`KeyRole::InlineContent`]
/// 3. a sequence value under a non-numeric key → [`KeyRole::RepeatedElement`]
/// 4. anything else → [`KeyRole::ChildElement`]
///
/// A `@`-prefixed key whose value is not scalar (or whose remainder is not
/// a valid name) falls through to the later rules, keeping its literal key.
#[must_use]
pub fn classify_key<'a>(key: &'a str, value: &Value) -> KeyRole<'a> {
    if let Some(name) = key.strip_prefix('@') {
        if value.is_scalar() && is_valid_element_name(name) {
            return KeyRole::Attribute(name);
        }
    }
    if key == "#" {
        return KeyRole::InlineContent;
    }
    if matches!(value, Value::Seq(_)) && !is_numeric_key(key) {
        return KeyRole::RepeatedElement;
    }
    KeyRole::ChildElement
}

/// Whether `name` is a valid XML element-name token: non-empty, no space,
/// a letter or underscore first, then letters, digits, `.`, `_`, `:`, `-`.
#[must_use]
pub fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | ':' | '-'))
}

/// Resolve the element name for a key, substituting `fallback` for numeric
/// or invalid names. Name-validity failures never raise an error.
#[must_use]
pub fn resolve_element_name<'a>(key: &'a str, fallback: &'a str) -> &'a str {
    if is_numeric_key(key) || !is_valid_element_name(key) {
        fallback
    } else {
        key
    }
}

/// Whether a string value must be wrapped in a CDATA section.
#[must_use]
pub fn needs_cdata(text: &str) -> bool {
    text.contains(['<', '>', '&'])
}

/// Whether the key reads as a number (`"0"`, `"-3"`, `"1.5"`, `"2e4"`).
fn is_numeric_key(key: &str) -> bool {
    let key = key.trim_start();
    key.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
        && key.parse::<f64>().is_ok()
}
