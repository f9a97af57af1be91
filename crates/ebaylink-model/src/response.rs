//! Per-item outcome entries extracted from Trading API responses.

use std::fmt;

/// Severity of a response error entry.
///
/// Only `Warning` is non-fatal; any other severity (including severities
/// this crate does not know about) fails the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    /// Non-fatal advisory; the item was still accepted.
    Warning,
    /// The item was rejected.
    Error,
    /// A severity code this crate does not recognize; treated as fatal.
    Custom(String),
}

impl Severity {
    /// String form as carried in `SeverityCode`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Custom(code) => code,
        }
    }

    /// Whether entries of this severity fail the batch.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Severity::Warning)
    }
}

impl From<&str> for Severity {
    fn from(code: &str) -> Self {
        match code {
            "Warning" => Severity::Warning,
            "Error" => Severity::Error,
            other => Severity::Custom(other.to_owned()),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `Errors` entry of a Trading API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseError {
    /// Severity code of the entry.
    pub severity: Severity,
    /// The long, user-facing message.
    pub long_message: String,
    /// The short message, when present.
    pub short_message: Option<String>,
    /// The numeric error code, when present.
    pub error_code: Option<String>,
}
