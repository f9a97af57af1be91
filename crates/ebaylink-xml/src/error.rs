//! Error types for the XML layer.

use std::io;

/// Errors that can occur during XML serialization or response reading.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An unexpected XML element was encountered.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// An error parsing a value from XML text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}

/// Errors raised while encoding a node-source value into a document.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The value has no valid encoding path (an opaque record with no
    /// normalizer configured, or one the normalizer cannot resolve).
    #[error("value cannot be encoded as markup: {0}")]
    UnencodableValue(String),

    /// The item normalizer rejected a record.
    #[error("item could not be normalized: {0}")]
    Normalize(String),

    /// Serialization of the built tree failed.
    #[error(transparent)]
    Xml(#[from] XmlError),
}
