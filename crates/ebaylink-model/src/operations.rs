//! Trading API calls supported by the batch writer.

use std::fmt;

/// A Trading API call that submits a batch of item containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TradingOperation {
    /// List new items (`AddItems`).
    #[default]
    AddItems,
    /// Revise existing listings (`ReviseItems`).
    ReviseItems,
    /// End active listings (`EndItems`).
    EndItems,
}

impl TradingOperation {
    /// The call name, as carried in the `X-EBAY-API-CALL-NAME` header.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TradingOperation::AddItems => "AddItems",
            TradingOperation::ReviseItems => "ReviseItems",
            TradingOperation::EndItems => "EndItems",
        }
    }

    /// Root element name of the request document.
    #[must_use]
    pub fn request_root(self) -> &'static str {
        match self {
            TradingOperation::AddItems => "AddItemsRequest",
            TradingOperation::ReviseItems => "ReviseItemsRequest",
            TradingOperation::EndItems => "EndItemsRequest",
        }
    }

    /// Root element name of the response document.
    #[must_use]
    pub fn response_root(self) -> &'static str {
        match self {
            TradingOperation::AddItems => "AddItemsResponse",
            TradingOperation::ReviseItems => "ReviseItemsResponse",
            TradingOperation::EndItems => "EndItemsResponse",
        }
    }

    /// Anonymous container tag for the per-item entries of the request.
    #[must_use]
    pub fn container_tag(self) -> &'static str {
        match self {
            TradingOperation::AddItems => "AddItemRequestContainer",
            TradingOperation::ReviseItems => "ReviseItemRequestContainer",
            TradingOperation::EndItems => "EndItemRequestContainer",
        }
    }
}

impl fmt::Display for TradingOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
