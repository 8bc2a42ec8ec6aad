//! Error types for x-callback-url construction and parsing.

use thiserror::Error;

/// Errors that can occur while building or parsing an x-callback-url.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum XCallbackError {
    /// The request's URL scheme is empty.
    #[error("Scheme must not be empty")]
    EmptyScheme,

    /// The request's URL scheme contains characters outside the RFC 3986
    /// scheme grammar (a letter followed by letters, digits, `+`, `-`, `.`).
    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    /// The request's action is empty.
    #[error("Action must not be empty")]
    EmptyAction,

    /// The request's action contains characters that would split it into
    /// more than one path segment or leak into the query or fragment.
    #[error("Action is not a valid single path segment: {0}")]
    InvalidAction(String),

    /// The request's source identifier is empty.
    #[error("Source must not be empty")]
    EmptySource,

    /// The open parameter map contains a key reserved by the protocol
    /// (`x-source`, `x-success`, `x-error`, `x-cancel`).
    #[error("Parameter key is reserved by the x-callback-url protocol: {0}")]
    ReservedKey(String),

    /// URL parsing failed using the url crate.
    #[error("URL parsing failed: {0}")]
    UrlParse(String),

    /// The URL's authority is not the `x-callback-url` token.
    #[error("URL authority is not x-callback-url")]
    NotCallbackUrl,

    /// The URL has no action path segment.
    #[error("URL has no action path segment")]
    MissingAction,
}

impl From<url::ParseError> for XCallbackError {
    fn from(err: url::ParseError) -> Self {
        XCallbackError::UrlParse(err.to_string())
    }
}
