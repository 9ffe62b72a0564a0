//! Request context extractor

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::{collections::BTreeMap, convert::Infallible};
use url::form_urlencoded;

/// What a page gets to know about the request it renders for.
///
/// Query parameters are decoded into a plain key to string map. Parsing never
/// fails: undecodable sequences are replaced, and when a key repeats the first
/// occurrence wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestContext {
    path: String,
    query: BTreeMap<String, String>,
}

impl RequestContext {
    /// Build a context from a path and an optional raw (still encoded) query string.
    pub fn new(path: impl Into<String>, raw_query: Option<&str>) -> Self {
        let mut query = BTreeMap::new();
        if let Some(raw) = raw_query {
            for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
                query
                    .entry(key.into_owned())
                    .or_insert_with(|| value.into_owned());
            }
        }

        Self {
            path: path.into(),
            query,
        }
    }

    /// The request path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Look up a decoded query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// All decoded query parameters.
    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::new(parts.uri.path(), parts.uri.query()))
    }
}
