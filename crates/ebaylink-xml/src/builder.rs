//! The markup tree builder: recursive expansion of node-source values into
//! element trees.
//!
//! The builder holds no state of its own; every call threads an immutable
//! [`EncodeContext`] down the recursion, so a builder invocation touches
//! nothing but the element tree it is handed.

use std::fmt;

use ebaylink_model::{CatalogRecord, Element, Value};

use crate::error::EncodeError;
use crate::grammar::{KeyRole, classify_key, needs_cdata, resolve_element_name};

/// Converts an opaque catalog record into the mapping form the builder can
/// expand. Invoked whenever the builder encounters a [`Value::Record`].
pub trait ItemNormalizer: Send + Sync {
    /// Produce the ordered mapping form of `record`.
    fn to_mapping(&self, record: &dyn CatalogRecord) -> Result<Value, EncodeError>;
}

/// Immutable per-encode settings threaded through the builder recursion.
#[derive(Clone, Copy)]
pub struct EncodeContext<'a> {
    /// Element name substituted for anonymous or invalid keys.
    pub container_tag: &'a str,
    /// Attribute name used for caller-supplied correlation keys.
    pub correlation_attr: &'a str,
    /// Resolver for opaque catalog records, when configured.
    pub normalizer: Option<&'a dyn ItemNormalizer>,
}

impl fmt::Debug for EncodeContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeContext")
            .field("container_tag", &self.container_tag)
            .field("correlation_attr", &self.correlation_attr)
            .field("normalizer", &self.normalizer.is_some())
            .finish()
    }
}

/// Build `value` into `parent`, either as a named child element or as
/// inline content of `parent` itself when `name` is `None`.
///
/// When `correlation` is supplied, the created element is tagged with the
/// context's correlation attribute, disambiguating generically-named
/// repeated nodes. Returns whether anything was appended.
pub fn build_node(
    parent: &mut Element,
    value: &Value,
    name: Option<&str>,
    correlation: Option<&str>,
    ctx: EncodeContext<'_>,
) -> Result<bool, EncodeError> {
    match name {
        Some(name) => append_child(
            parent,
            value,
            resolve_element_name(name, ctx.container_tag),
            correlation,
            ctx,
        ),
        None => append_value(parent, value, ctx),
    }
}

/// Apply `value` as content of `parent`: children, text, CDATA, or (through
/// mapping expansion) attributes. Returns whether anything was appended.
pub fn append_value(
    parent: &mut Element,
    value: &Value,
    ctx: EncodeContext<'_>,
) -> Result<bool, EncodeError> {
    match value {
        Value::Node(element) => {
            parent.push_element(element.clone());
            Ok(true)
        }
        Value::Map(entries) => expand_mapping(parent, entries, ctx),
        Value::Seq(items) => {
            // Anonymous array: each member becomes a container-tag child.
            let mut appended = false;
            for item in items {
                appended |= append_child(parent, item, ctx.container_tag, None, ctx)?;
            }
            Ok(appended)
        }
        Value::Record(record) => {
            let Some(normalizer) = ctx.normalizer else {
                return Err(EncodeError::UnencodableValue(record.describe()));
            };
            let mapped = normalizer.to_mapping(record.as_ref())?;
            if matches!(mapped, Value::Record(_)) {
                return Err(EncodeError::UnencodableValue(record.describe()));
            }
            append_value(parent, &mapped, ctx)
        }
        Value::Text(text) => {
            if needs_cdata(text) {
                parent.push_cdata(text);
            } else {
                parent.push_text(text);
            }
            Ok(true)
        }
        Value::Null => {
            parent.push_text("");
            Ok(true)
        }
        Value::Bool(b) => {
            parent.push_text(if *b { "1" } else { "0" });
            Ok(true)
        }
        Value::Int(n) => {
            parent.push_text(n.to_string());
            Ok(true)
        }
        Value::Float(n) => {
            parent.push_text(n.to_string());
            Ok(true)
        }
    }
}

/// Create a child element named `name` under `parent` and build `value`
/// into it. The child is only attached when its content expanded to
/// something; an element whose mapping or sequence content appends nothing
/// is dropped.
fn append_child(
    parent: &mut Element,
    value: &Value,
    name: &str,
    correlation: Option<&str>,
    ctx: EncodeContext<'_>,
) -> Result<bool, EncodeError> {
    let mut node = Element::new(name);
    if let Some(correlation) = correlation {
        node.set_attribute(ctx.correlation_attr, correlation);
    }
    let appended = append_value(&mut node, value, ctx)?;
    if appended {
        parent.push_element(node);
        return Ok(true);
    }
    Ok(false)
}

/// Expand an ordered mapping into `parent`, evaluating the key grammar once
/// per entry.
fn expand_mapping(
    parent: &mut Element,
    entries: &[(String, Value)],
    ctx: EncodeContext<'_>,
) -> Result<bool, EncodeError> {
    let mut appended = false;
    for (key, value) in entries {
        match classify_key(key, value) {
            KeyRole::Attribute(name) => {
                // The attribute role guarantees a scalar value.
                if let Some(text) = value.scalar_text() {
                    parent.set_attribute(name, text);
                    appended = true;
                }
            }
            KeyRole::InlineContent => {
                appended |= append_value(parent, value, ctx)?;
            }
            KeyRole::RepeatedElement => {
                if let Value::Seq(items) = value {
                    let name = resolve_element_name(key, ctx.container_tag);
                    for item in items {
                        appended |= append_child(parent, item, name, None, ctx)?;
                    }
                }
            }
            KeyRole::ChildElement => {
                let name = resolve_element_name(key, ctx.container_tag);
                appended |= append_child(parent, value, name, None, ctx)?;
            }
        }
    }
    Ok(appended)
}
