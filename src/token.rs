//! The verification token handed to the widget.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a [VerificationToken] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    /// Typed into the token-entry form.
    UserTyped,
    /// Read from the query string of the incoming request.
    UrlSupplied,
}

/// An opaque token identifying a verification session.
///
/// No validation happens here: the value is carried through untouched,
/// empty strings included.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    value: String,
    source: TokenSource,
}

impl VerificationToken {
    /// A token typed by the user.
    pub fn typed(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: TokenSource::UserTyped,
        }
    }

    /// A token taken from the request URL. A missing parameter yields the empty token.
    pub fn from_query(value: Option<&str>) -> Self {
        Self {
            value: value.unwrap_or_default().to_string(),
            source: TokenSource::UrlSupplied,
        }
    }

    /// The raw token text.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Where the token came from.
    pub fn source(&self) -> TokenSource {
        self.source
    }

    /// Whether no token was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

// Tokens end up in logs via `?token`; keep the value itself out of them.
impl fmt::Debug for VerificationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationToken")
            .field("len", &self.value.len())
            .field("source", &self.source)
            .finish()
    }
}
