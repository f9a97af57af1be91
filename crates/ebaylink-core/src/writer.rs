//! The batch writer: envelope sequencing, submission, and outcome
//! aggregation.

use std::fmt;

use ebaylink_model::{Credentials, Envelope, ResponseError, TradingOperation, Value};
use ebaylink_xml::{
    DocumentEncoder, EncodeError, ItemNormalizer, XmlError, read_response_errors,
};

use crate::transport::{TransportClient, TransportError};

/// Errors raised by a batch write.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// No auth token was supplied; nothing was submitted.
    #[error("missing API credentials: an auth token is required")]
    MissingCredentials,

    /// An envelope could not be encoded; the batch stops at that chunk.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The transport failed; remaining chunks are not submitted and chunks
    /// already submitted are not rolled back.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A response was not well-formed XML.
    #[error("response could not be parsed: {0}")]
    MalformedResponse(#[from] XmlError),

    /// The remote API rejected one or more envelopes. Raised once, after
    /// every chunk has been attempted.
    #[error("batch rejected by remote API: {}", .messages.join("."))]
    Remote {
        /// Fatal messages in chunk-then-within-chunk order.
        messages: Vec<String>,
    },
}

/// Result of a successful batch write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    /// Number of items submitted.
    pub submitted: usize,
    /// Number of envelopes sent.
    pub envelopes: usize,
}

/// Submits an ordered item collection in bounded envelopes.
///
/// Chunks are encoded and submitted strictly in order; one chunk's full
/// round-trip completes before the next begins. Fatal response entries are
/// accumulated and surfaced once at the end so a bad item does not block
/// submission of the rest. A fresh writer (and encoder) is intended per
/// batch-write invocation; collaborators are injected by reference.
pub struct BatchWriter<'a> {
    transport: &'a dyn TransportClient,
    normalizer: Option<&'a dyn ItemNormalizer>,
    operation: TradingOperation,
    chunk_capacity: usize,
}

impl fmt::Debug for BatchWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchWriter")
            .field("operation", &self.operation)
            .field("chunk_capacity", &self.chunk_capacity)
            .field("normalizer", &self.normalizer.is_some())
            .finish()
    }
}

impl<'a> BatchWriter<'a> {
    /// Default number of items per envelope.
    pub const DEFAULT_CHUNK_CAPACITY: usize = 5;

    /// Create a writer submitting `AddItems` envelopes of the default
    /// capacity over the given transport.
    #[must_use]
    pub fn new(transport: &'a dyn TransportClient) -> Self {
        Self {
            transport,
            normalizer: None,
            operation: TradingOperation::AddItems,
            chunk_capacity: Self::DEFAULT_CHUNK_CAPACITY,
        }
    }

    /// Select the Trading API call to submit.
    #[must_use]
    pub fn with_operation(mut self, operation: TradingOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Set the envelope capacity. Values below 1 are clamped to 1.
    #[must_use]
    pub fn with_chunk_capacity(mut self, capacity: usize) -> Self {
        self.chunk_capacity = capacity.max(1);
        self
    }

    /// Attach the normalizer used to resolve opaque catalog records.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: &'a dyn ItemNormalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    /// Submit `items` in envelopes of the configured capacity.
    ///
    /// Every item is submitted: the collection is partitioned into
    /// `ceil(len / capacity)` consecutive envelopes in original order, and
    /// a trailing chunk smaller than the capacity (including a single
    /// item) is still sent. `MessageID`s restart at 1 in every envelope.
    pub async fn submit(
        &self,
        items: &[Value],
        credentials: &Credentials,
    ) -> Result<WriteSummary, WriteError> {
        if credentials.is_empty() {
            return Err(WriteError::MissingCredentials);
        }

        let encoder = self.encoder();
        let mut failures = Vec::new();
        let mut envelopes = 0_usize;

        for (index, chunk) in items.chunks(self.chunk_capacity).enumerate() {
            let envelope = Envelope::new(chunk, credentials.clone());
            let body = encoder.encode(&envelope.to_value(self.operation.container_tag()))?;

            tracing::debug!(
                operation = %self.operation,
                envelope = index,
                items = chunk.len(),
                "submitting envelope"
            );
            let response = self.transport.send(&body, self.operation.as_str()).await?;

            let entries = read_response_errors(&response)?;
            failures.extend(collect_fatal_messages(entries));
            envelopes += 1;
        }

        if !failures.is_empty() {
            return Err(WriteError::Remote { messages: failures });
        }

        Ok(WriteSummary {
            submitted: items.len(),
            envelopes,
        })
    }

    /// Build the per-invocation encoder for this writer's operation.
    fn encoder(&self) -> DocumentEncoder<'a> {
        let encoder = DocumentEncoder::new()
            .with_root_name(self.operation.request_root())
            .with_container_tag(self.operation.container_tag());
        match self.normalizer {
            Some(normalizer) => encoder.with_normalizer(normalizer),
            None => encoder,
        }
    }
}

/// Reduce response entries to the fatal messages, preserving order. An
/// entry with severity `Warning` is dropped; every other severity is fatal.
pub fn collect_fatal_messages<I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = ResponseError>,
{
    entries
        .into_iter()
        .filter(|entry| entry.severity.is_fatal())
        .map(|entry| entry.long_message)
        .collect()
}
