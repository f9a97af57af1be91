//! Data model for the eBay Trading API connector.
//!
//! This crate defines the types shared between the XML layer and the batch
//! writer:
//!
//! - [`Value`]: the generic node-source value consumed by the encoder
//!   (ordered mappings, sequences, scalars, pre-built nodes, and opaque
//!   catalog records)
//! - [`Element`] / [`XmlNode`]: the markup element tree the encoder builds
//!   and serializes
//! - [`Envelope`] / [`Credentials`]: one bounded batch of items plus the
//!   requester credentials block
//! - [`Severity`] / [`ResponseError`]: per-item outcome entries extracted
//!   from Trading API responses
//! - [`TradingOperation`]: the supported Trading API calls

pub mod element;
pub mod envelope;
pub mod operations;
pub mod response;
pub mod value;

pub use element::{Element, XmlNode};
pub use envelope::{Credentials, Envelope, EnvelopeEntry};
pub use operations::TradingOperation;
pub use response::{ResponseError, Severity};
pub use value::{CatalogRecord, Value};
