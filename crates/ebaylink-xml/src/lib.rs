//! XML layer for the eBay Trading API connector.
//!
//! This crate turns generic node-source values into `eBLBaseComponents`
//! request documents and reads error entries back out of response documents.
//!
//! # Key components
//!
//! - [`grammar`]: the key-convention grammar (`@` attributes, `#` inline
//!   content, repeated sibling elements, anonymous container fallback)
//! - [`builder`]: the recursive markup tree builder over [`Value`]
//! - [`encoder`]: the [`DocumentEncoder`] producing serialized documents
//! - [`deserialize`]: minimal response reading for error extraction
//!
//! # Wire conventions
//!
//! - Namespace: `urn:ebay:apis:eBLBaseComponents`
//! - Booleans: `1` / `0`
//! - Strings containing `<`, `>`, or `&`: CDATA sections
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`
//!
//! [`Value`]: ebaylink_model::Value

pub mod builder;
pub mod deserialize;
pub mod encoder;
pub mod error;
pub mod grammar;
pub mod serialize;

pub use builder::{EncodeContext, ItemNormalizer, build_node};
pub use deserialize::read_response_errors;
pub use encoder::{
    DEFAULT_CONTAINER_TAG, DEFAULT_CORRELATION_ATTR, DEFAULT_ROOT_NAME, DocumentEncoder,
    EBAY_NAMESPACE, EncoderOptions,
};
pub use error::{EncodeError, XmlError};
pub use grammar::{KeyRole, classify_key, is_valid_element_name, needs_cdata, resolve_element_name};
pub use serialize::to_xml;
