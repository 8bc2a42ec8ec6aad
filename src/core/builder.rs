//! Building compliant x-callback-urls from structured requests.

use url::Url;

use crate::error::XCallbackError;
use crate::query::codec::encode_query;
use crate::query::percent::encode_component;
use crate::types::{
    is_reserved_parameter, XCallbackRequest, CANCEL_PARAMETER, ERROR_PARAMETER, SOURCE_PARAMETER,
    SUCCESS_PARAMETER, X_CALLBACK_HOST,
};

/// Build the compliant URL for an [`XCallbackRequest`].
///
/// The result always has the shape
/// `scheme://x-callback-url/action?x-source=...`, with `x-success`,
/// `x-error`, and `x-cancel` pairs present only when the corresponding
/// callback was supplied, followed by the open parameters in lexicographic
/// key order. Reserved keys are emitted literally; every value is
/// percent-encoded. The URL never carries a fragment.
///
/// Construction is all-or-nothing: every validation error is reported
/// before any URL text is assembled.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use xcallback::{build_url, XCallbackRequest};
///
/// let request = XCallbackRequest::new("myapp", "open", "OtherApp")
///     .with_success_url(Url::parse("myapp2://done").unwrap());
///
/// let url = build_url(&request).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "myapp://x-callback-url/open?x-source=OtherApp&x-success=myapp2%3A%2F%2Fdone"
/// );
/// ```
pub fn build_url(request: &XCallbackRequest) -> Result<Url, XCallbackError> {
    // Step 1: Check the mandatory fields and the open parameter map
    validate_scheme(&request.scheme)?;
    validate_action(&request.action)?;
    if request.source.is_empty() {
        return Err(XCallbackError::EmptySource);
    }
    for key in request.parameters.keys() {
        if is_reserved_parameter(key) {
            return Err(XCallbackError::ReservedKey(key.clone()));
        }
    }

    // Step 2: Assemble the query: x-source, optional callbacks, open parameters
    let mut pairs = Vec::with_capacity(4 + request.parameters.len());
    pairs.push(format!(
        "{}={}",
        SOURCE_PARAMETER,
        encode_component(&request.source)
    ));
    if let Some(success_url) = &request.success_url {
        pairs.push(format!(
            "{}={}",
            SUCCESS_PARAMETER,
            encode_component(success_url.as_str())
        ));
    }
    if let Some(error_url) = &request.error_url {
        pairs.push(format!(
            "{}={}",
            ERROR_PARAMETER,
            encode_component(error_url.as_str())
        ));
    }
    if let Some(cancel_url) = &request.cancel_url {
        pairs.push(format!(
            "{}={}",
            CANCEL_PARAMETER,
            encode_component(cancel_url.as_str())
        ));
    }
    if !request.parameters.is_empty() {
        pairs.push(encode_query(&request.parameters));
    }

    // Step 3: Put scheme, authority token, action, and query together
    let text = format!(
        "{}://{}/{}?{}",
        request.scheme,
        X_CALLBACK_HOST,
        request.action,
        pairs.join("&")
    );

    Ok(Url::parse(&text)?)
}

/// Validate a URL scheme against the RFC 3986 scheme grammar.
///
/// A scheme is one ASCII letter followed by any number of letters, digits,
/// `+`, `-`, or `.`.
pub fn validate_scheme(scheme: &str) -> Result<(), XCallbackError> {
    if scheme.is_empty() {
        return Err(XCallbackError::EmptyScheme);
    }

    let mut chars = scheme.chars();
    let first_ok = chars
        .next()
        .map(|ch| ch.is_ascii_alphabetic())
        .unwrap_or(false);
    let rest_ok = chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'));

    if !first_ok || !rest_ok {
        return Err(XCallbackError::InvalidScheme(scheme.to_string()));
    }

    Ok(())
}

/// Validate an action as a single URL path segment.
///
/// Accepted characters are the RFC 3986 `pchar` set: unreserved characters,
/// sub-delimiters, `:`, `@`, plus `%` so pre-encoded actions pass through.
/// This keeps the action from splitting into multiple segments or leaking
/// into the query or fragment.
///
/// Dot segments (`.` and `..`, raw or percent-encoded in any casing) are
/// rejected as well: URL path normalization deletes them, which would erase
/// the action from the built URL.
pub fn validate_action(action: &str) -> Result<(), XCallbackError> {
    if action.is_empty() {
        return Err(XCallbackError::EmptyAction);
    }

    for ch in action.chars() {
        if !is_path_segment_char(ch) {
            return Err(XCallbackError::InvalidAction(action.to_string()));
        }
    }

    if is_dot_segment(action) {
        return Err(XCallbackError::InvalidAction(action.to_string()));
    }

    Ok(())
}

// A path segment reading `.` or `..` once every `%2E` escape is folded
// to a dot. Only `%2e` and `%2E` spell a dot; `2` has no case variant.
fn is_dot_segment(action: &str) -> bool {
    let folded = action.replace("%2e", ".").replace("%2E", ".");
    folded == "." || folded == ".."
}

fn is_path_segment_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            '-' | '.'
                | '_'
                | '~'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | ';'
                | '='
                | ':'
                | '@'
                | '%'
        )
}
