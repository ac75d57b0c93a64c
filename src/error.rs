/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types returned by the Akeneo client
//!
//! Every failure surfaces as an [`AppError`]. Responses the server rejected carry
//! a [`RequestError`] holding the full request/response context so the caller can
//! print a useful diagnostic.

use crate::model::http::ResponseBody;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Context of a request the server answered with a non-success status
#[derive(Debug, Clone, Error)]
#[error(
    "ERROR {} {method} {url}\nData sent : {}\nData received : {response_body}",
    .status.as_u16(),
    .request_body.as_deref().unwrap_or("")
)]
pub struct RequestError {
    /// HTTP method of the failed request
    pub method: Method,
    /// Full URL of the failed request
    pub url: String,
    /// Status returned by the server
    pub status: StatusCode,
    /// Headers returned by the server
    pub headers: HeaderMap,
    /// Rendered request body, if one was sent
    pub request_body: Option<String>,
    /// Decoded JSON or raw text returned by the server
    pub response_body: ResponseBody,
}

/// Main error type of the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The server rejected the request with a status above 299 other than 404
    #[error("{0}")]
    Request(RequestError),
    /// The server answered 404
    #[error("{0}")]
    NotFound(RequestError),
    /// A field required by the client is missing from a parsed response
    #[error("key {expected} not found in {got}")]
    UnexpectedResponse {
        /// Name of the missing field
        expected: String,
        /// Body the field was looked up in
        got: ResponseBody,
    },
    /// An authenticated call was attempted without a session
    #[error("not authenticated")]
    NotAuthenticated,
    /// The client was closed and its credentials wiped
    #[error("client closed")]
    Closed,
    /// Transport level failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// JSON encoding or decoding failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Filesystem failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A URL could not be built
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    /// A header value contains forbidden characters
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    /// The caller supplied unusable input
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The configuration is incomplete
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the request context for both [`AppError::Request`] and [`AppError::NotFound`]
    #[must_use]
    pub fn request_error(&self) -> Option<&RequestError> {
        match self {
            AppError::Request(e) | AppError::NotFound(e) => Some(e),
            _ => None,
        }
    }

    /// Checks if the server answered 404
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}
