//! A URL paired with the function that turns its response body into a value.
//!
//! # Design
//! `Resource` is the declarative half of a load: it says where to fetch and
//! how to decode, but performs no I/O. The parse function sits behind an
//! `Arc` so resources clone cheaply and move freely onto worker tasks.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ParseError;

type ParseFn<A> = dyn Fn(&[u8]) -> Result<A, ParseError> + Send + Sync;

/// Where to fetch a value of type `A`, and how to decode it.
pub struct Resource<A> {
    url: Url,
    parse: Arc<ParseFn<A>>,
}

impl<A> Resource<A> {
    pub fn new<F>(url: Url, parse: F) -> Self
    where
        F: Fn(&[u8]) -> Result<A, ParseError> + Send + Sync + 'static,
    {
        Self {
            url,
            parse: Arc::new(parse),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Run the parse function over a response body.
    pub fn parse(&self, body: &[u8]) -> Result<A, ParseError> {
        (self.parse)(body)
    }
}

impl<A: DeserializeOwned> Resource<A> {
    /// Decode the body as UTF-8 JSON.
    ///
    /// Timestamps in the record types are `chrono::DateTime<Utc>`, which
    /// deserialize from ISO-8601 (RFC 3339) strings such as
    /// `2020-07-05T20:00:00Z`.
    pub fn json(url: Url) -> Self {
        Self::new(url, |body| Ok(serde_json::from_slice(body)?))
    }
}

impl Resource<String> {
    /// Decode the body as a string. A JSON string literal is unquoted; any
    /// other body is taken verbatim as UTF-8 text.
    pub fn text(url: Url) -> Self {
        Self::new(url, parse_text)
    }
}

fn parse_text(body: &[u8]) -> Result<String, ParseError> {
    if let Ok(text) = serde_json::from_slice::<String>(body) {
        return Ok(text);
    }
    Ok(std::str::from_utf8(body)?.to_owned())
}

impl<A> Clone for Resource<A> {
    fn clone(&self) -> Self {
        Self {
            url: self.url.clone(),
            parse: Arc::clone(&self.parse),
        }
    }
}

impl<A> fmt::Debug for Resource<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}
