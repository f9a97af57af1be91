//! The document encoder: document-level settings around the tree builder.

use std::fmt;

use ebaylink_model::{Element, Value};

use crate::builder::{EncodeContext, ItemNormalizer, append_value};
use crate::error::EncodeError;
use crate::serialize::to_xml;

/// The `eBLBaseComponents` document namespace.
pub const EBAY_NAMESPACE: &str = "urn:ebay:apis:eBLBaseComponents";

/// Default root element name.
pub const DEFAULT_ROOT_NAME: &str = "AddItemsRequest";

/// Default anonymous container tag for unnamed array members.
pub const DEFAULT_CONTAINER_TAG: &str = "AddItemRequestContainer";

/// Default attribute name for caller-supplied correlation keys.
pub const DEFAULT_CORRELATION_ATTR: &str = "key";

/// Document-level encoding options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Indent the output for readability.
    pub pretty: bool,
    /// Declared XML version.
    pub xml_version: String,
    /// Declared document encoding.
    pub xml_encoding: String,
    /// Declared standalone flag, when set.
    pub standalone: Option<bool>,
    /// Per-call override of the encoder's root element name.
    pub root_name: Option<String>,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            xml_version: "1.0".to_owned(),
            xml_encoding: "UTF-8".to_owned(),
            standalone: None,
            root_name: None,
        }
    }
}

/// Encodes node-source values into complete `eBLBaseComponents` documents.
///
/// A fresh encoder is constructed per batch-write invocation; collaborators
/// are injected by reference rather than constructed internally.
///
/// # Examples
///
/// ```
/// use ebaylink_model::Value;
/// use ebaylink_xml::DocumentEncoder;
///
/// let value = Value::Map(vec![("Title".to_owned(), Value::from("Vintage camera"))]);
/// let xml = DocumentEncoder::new().encode(&value).unwrap();
/// assert!(xml.contains("<Title>Vintage camera</Title>"));
/// ```
pub struct DocumentEncoder<'a> {
    root_name: String,
    container_tag: String,
    correlation_attr: String,
    options: EncoderOptions,
    normalizer: Option<&'a dyn ItemNormalizer>,
}

impl fmt::Debug for DocumentEncoder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentEncoder")
            .field("root_name", &self.root_name)
            .field("container_tag", &self.container_tag)
            .field("correlation_attr", &self.correlation_attr)
            .field("options", &self.options)
            .field("normalizer", &self.normalizer.is_some())
            .finish()
    }
}

impl Default for DocumentEncoder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> DocumentEncoder<'a> {
    /// Create an encoder with the default root name, container tag, and
    /// correlation attribute.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_owned(),
            container_tag: DEFAULT_CONTAINER_TAG.to_owned(),
            correlation_attr: DEFAULT_CORRELATION_ATTR.to_owned(),
            options: EncoderOptions::default(),
            normalizer: None,
        }
    }

    /// Set the root element name.
    #[must_use]
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Set the anonymous container tag.
    #[must_use]
    pub fn with_container_tag(mut self, tag: impl Into<String>) -> Self {
        self.container_tag = tag.into();
        self
    }

    /// Set the correlation attribute name.
    #[must_use]
    pub fn with_correlation_attr(mut self, attr: impl Into<String>) -> Self {
        self.correlation_attr = attr.into();
        self
    }

    /// Set document-level options.
    #[must_use]
    pub fn with_options(mut self, options: EncoderOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach the item normalizer used to resolve opaque catalog records.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: &'a dyn ItemNormalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    /// Encode a node-source value into a complete serialized document.
    ///
    /// Mappings and sequences expand under a namespaced root element.
    /// Pre-built nodes serialize unmodified. A bare scalar produces a
    /// document whose root element carries the scalar's text directly,
    /// with no intermediate wrapper element. Opaque records resolve
    /// through the configured normalizer first.
    pub fn encode(&self, value: &Value) -> Result<String, EncodeError> {
        let root_name = self.options.root_name.as_deref().unwrap_or(&self.root_name);

        match value {
            Value::Node(element) => Ok(to_xml(element, &self.options)?),
            Value::Map(_) | Value::Seq(_) => {
                let mut root = Element::new(root_name);
                root.set_attribute("xmlns", EBAY_NAMESPACE);
                append_value(&mut root, value, self.context())?;
                Ok(to_xml(&root, &self.options)?)
            }
            Value::Record(record) => {
                let Some(normalizer) = self.normalizer else {
                    return Err(EncodeError::UnencodableValue(record.describe()));
                };
                let mapped = normalizer.to_mapping(record.as_ref())?;
                if matches!(mapped, Value::Record(_)) {
                    return Err(EncodeError::UnencodableValue(record.describe()));
                }
                self.encode(&mapped)
            }
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Text(_) => {
                let mut root = Element::new(root_name);
                append_value(&mut root, value, self.context())?;
                Ok(to_xml(&root, &self.options)?)
            }
        }
    }

    fn context(&self) -> EncodeContext<'_> {
        EncodeContext {
            container_tag: &self.container_tag,
            correlation_attr: &self.correlation_attr,
            normalizer: self.normalizer,
        }
    }
}
