//! The markup element tree built by the encoder.
//!
//! The tree is materialized before serialization because mapping expansion
//! can set attributes on an element after its children have started to
//! accumulate, and because elements whose content expands to nothing are
//! dropped rather than attached.

/// One node in an element's child list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// A nested element.
    Element(Element),
    /// A plain text node (escaped on serialization).
    Text(String),
    /// A CDATA section (emitted raw).
    CData(String),
}

/// A markup element: tag name, ordered unique attributes, ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl Element {
    /// Create an empty element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attributes, in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// The children, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Set an attribute, replacing any existing attribute of the same name
    /// in place. Attribute names stay unique.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Append a child element.
    pub fn push_element(&mut self, element: Element) {
        self.children.push(XmlNode::Element(element));
    }

    /// Append a text node.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(XmlNode::Text(text.into()));
    }

    /// Append a CDATA section.
    pub fn push_cdata(&mut self, text: impl Into<String>) {
        self.children.push(XmlNode::CData(text.into()));
    }

    /// Whether the element carries any attributes or children.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.attributes.is_empty() || !self.children.is_empty()
    }

    /// The concatenated text of the direct text and CDATA children.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            match child {
                XmlNode::Text(t) | XmlNode::CData(t) => text.push_str(t),
                XmlNode::Element(_) => {}
            }
        }
        text
    }

    /// Iterate over the direct child elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            XmlNode::Element(e) => Some(e),
            _ => None,
        })
    }
}
