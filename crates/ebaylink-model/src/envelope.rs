//! Batch envelopes: one bounded slice of items plus requester credentials.

use crate::value::Value;

/// Requester credentials attached to every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    /// The Trading API auth token for the user making the call.
    pub auth_token: String,
}

impl Credentials {
    /// Create credentials from an auth token.
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
        }
    }

    /// Whether the credentials are missing a token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.auth_token.is_empty()
    }
}

/// One item of an envelope with its envelope-local correlation id.
#[derive(Debug, Clone)]
pub struct EnvelopeEntry {
    /// The item payload in node-source form.
    pub item: Value,
    /// 1-based position within the envelope, used as `MessageID`.
    pub message_id: u32,
}

/// One batch of items submitted as a single request.
///
/// Correlation ids restart at 1 for every envelope; they identify an item's
/// position within its own envelope only.
#[derive(Debug, Clone)]
pub struct Envelope {
    entries: Vec<EnvelopeEntry>,
    credentials: Credentials,
}

impl Envelope {
    /// Build an envelope from a slice of items, assigning 1-based ids in
    /// original order.
    #[must_use]
    pub fn new(items: &[Value], credentials: Credentials) -> Self {
        let entries = items
            .iter()
            .enumerate()
            .map(|(index, item)| EnvelopeEntry {
                item: item.clone(),
                message_id: u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1),
            })
            .collect();
        Self {
            entries,
            credentials,
        }
    }

    /// Number of items in the envelope.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the envelope holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The envelope entries, in submission order.
    #[must_use]
    pub fn entries(&self) -> &[EnvelopeEntry] {
        &self.entries
    }

    /// Render the envelope as a node-source mapping in the request wire
    /// shape: one `container_tag` sibling per item, each holding `Item` and
    /// `MessageID`, followed by the `RequesterCredentials` block.
    #[must_use]
    pub fn to_value(&self, container_tag: &str) -> Value {
        let containers: Vec<Value> = self
            .entries
            .iter()
            .map(|entry| {
                Value::Map(vec![
                    ("Item".to_owned(), entry.item.clone()),
                    ("MessageID".to_owned(), Value::from(entry.message_id)),
                ])
            })
            .collect();

        Value::Map(vec![
            (container_tag.to_owned(), Value::Seq(containers)),
            (
                "RequesterCredentials".to_owned(),
                Value::Map(vec![(
                    "eBayAuthToken".to_owned(),
                    Value::from(self.credentials.auth_token.clone()),
                )]),
            ),
        ])
    }
}
