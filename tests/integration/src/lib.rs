//! Integration tests for the eBay Trading API connector.
//!
//! The suite runs hermetically: batch-write flows are exercised against an
//! in-process scripted transport, and the HTTP transport is exercised
//! against a local wiremock server. No marketplace credentials are needed.

use std::collections::VecDeque;
use std::sync::{Mutex, Once};

use async_trait::async_trait;

use ebaylink_core::listing::Listing;
use ebaylink_core::normalize::SiteDefaults;
use ebaylink_core::transport::{TransportClient, TransportError};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A ready-to-submit listing with predictable fields.
#[must_use]
pub fn sample_listing(n: usize) -> Listing {
    let mut listing = Listing::new(format!("CAM-{n:03}"), format!("Vintage camera #{n}"));
    listing.description = format!("Working <b>1960s</b> rangefinder, lot {n}");
    listing.category_id = "625".to_owned();
    listing.start_price = 149.5;
    listing.specifics = vec![("Brand".to_owned(), "Canonet".to_owned())];
    listing
}

/// Site defaults used across the suite.
#[must_use]
pub fn sample_defaults() -> SiteDefaults {
    SiteDefaults {
        country: "US".to_owned(),
        postal_code: "95125".to_owned(),
        paypal_email: "seller@example.com".to_owned(),
        ..SiteDefaults::default()
    }
}

/// A response with no error entries.
#[must_use]
pub fn success_response() -> String {
    "<AddItemsResponse xmlns=\"urn:ebay:apis:eBLBaseComponents\">\
     <Ack>Success</Ack></AddItemsResponse>"
        .to_owned()
}

/// A response with a single `Warning` entry.
#[must_use]
pub fn warning_response(message: &str) -> String {
    format!(
        "<AddItemsResponse xmlns=\"urn:ebay:apis:eBLBaseComponents\"><Ack>Warning</Ack>\
         <Errors><ShortMessage>{message}</ShortMessage><LongMessage>{message}</LongMessage>\
         <SeverityCode>Warning</SeverityCode></Errors></AddItemsResponse>"
    )
}

/// A response with a single fatal `Error` entry.
#[must_use]
pub fn error_response(message: &str) -> String {
    format!(
        "<AddItemsResponse xmlns=\"urn:ebay:apis:eBLBaseComponents\"><Ack>Failure</Ack>\
         <Errors><ShortMessage>{message}</ShortMessage><LongMessage>{message}</LongMessage>\
         <ErrorCode>21916250</ErrorCode><SeverityCode>Error</SeverityCode></Errors>\
         </AddItemsResponse>"
    )
}

/// In-process transport double: records every request and replays scripted
/// responses in order; unscripted calls answer with [`success_response`].
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<(String, String)>>,
    responses: Mutex<VecDeque<String>>,
}

impl RecordingTransport {
    /// Create a transport that always answers with a success response.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport replaying the given responses in order.
    #[must_use]
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        }
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The body of the `index`-th request.
    #[must_use]
    pub fn request_body(&self, index: usize) -> String {
        self.requests.lock().unwrap()[index].0.clone()
    }

    /// The call name of the `index`-th request.
    #[must_use]
    pub fn call_name(&self, index: usize) -> String {
        self.requests.lock().unwrap()[index].1.clone()
    }
}

#[async_trait]
impl TransportClient for RecordingTransport {
    async fn send(&self, body: &str, call_name: &str) -> Result<String, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push((body.to_owned(), call_name.to_owned()));
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(success_response))
    }
}

mod test_batch_write;
mod test_http_transport;
