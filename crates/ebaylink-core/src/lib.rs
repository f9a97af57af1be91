//! Batch listing writer for the eBay Trading API.
//!
//! This crate wires the XML layer to the Trading API: it normalizes catalog
//! listings into node-source values, slices item collections into bounded
//! envelopes, submits them sequentially over a [`TransportClient`], and
//! reduces per-item response errors into one aggregate outcome.
//!
//! # Example
//!
//! ```no_run
//! use ebaylink_core::config::ConnectorConfig;
//! use ebaylink_core::transport::HttpTransport;
//! use ebaylink_core::writer::BatchWriter;
//! use ebaylink_model::{Credentials, Value};
//!
//! # async fn run(items: Vec<Value>) -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConnectorConfig::from_env();
//! let transport = HttpTransport::new(&config);
//! let writer = BatchWriter::new(&transport).with_chunk_capacity(config.chunk_capacity);
//!
//! let summary = writer.submit(&items, &config.credentials()).await?;
//! println!("submitted {} items", summary.submitted);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod listing;
pub mod normalize;
pub mod transport;
pub mod writer;

pub use config::{ApiEnvironment, ConnectorConfig};
pub use listing::{Listing, ReturnPolicy, ShippingService};
pub use normalize::{ListingNormalizer, SiteDefaults};
pub use transport::{HttpTransport, TransportClient, TransportError};
pub use writer::{BatchWriter, WriteError, WriteSummary};
