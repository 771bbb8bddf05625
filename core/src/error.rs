//! Error types for the Afterparty API client.
//!
//! # Design
//! Loads fail in only two ways. `AddressUnreachable` covers every transport
//! fault and carries the URL so the UI can say which address failed. Anything
//! that reached the server but could not be turned into the expected value
//! (bad status, bad body) is `InvalidResponse`. The underlying cause is logged
//! where it happens and not carried, which keeps `ApiError` `Clone + Eq`.

use url::Url;

/// Errors delivered by [`Load`](crate::Load).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response: DNS, refused connection,
    /// timeout, TLS, or a failure while reading the body.
    #[error("{0} is not reachable.")]
    AddressUnreachable(Url),

    /// The server answered, but not with what the resource expected.
    #[error("The server response is invalid.")]
    InvalidResponse,
}

impl ApiError {
    /// The unreachable address, if this is a transport failure.
    pub fn url(&self) -> Option<&Url> {
        match self {
            ApiError::AddressUnreachable(url) => Some(url),
            ApiError::InvalidResponse => None,
        }
    }
}

/// Failure returned by a [`Resource`](crate::Resource) parse function.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("body is not UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Errors raised while constructing an [`AfterpartyApi`](crate::AfterpartyApi).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("no tokio runtime in context: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    #[error("loads need a multi-threaded tokio runtime, got current_thread")]
    SingleThreadedRuntime,

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
