//! Parsing x-callback-urls back into their structured pieces.

use std::collections::BTreeMap;

use url::Url;

use crate::core::validator::is_callback_url;
use crate::error::XCallbackError;
use crate::query::codec::decode_query;
use crate::types::{
    XCallbackParts, CANCEL_PARAMETER, ERROR_PARAMETER, SOURCE_PARAMETER, SUCCESS_PARAMETER,
};

/// Parse an x-callback-url string into [`XCallbackParts`].
///
/// The URL must parse and carry the `x-callback-url` authority with an
/// action segment. The reserved pairs are lifted out of the query:
/// `x-source` becomes the optional source string and the success, error,
/// and cancel values become typed URLs. Everything else lands in
/// `parameters`, decoded.
///
/// # Examples
///
/// ```
/// use xcallback::parse_url;
///
/// let parts = parse_url(
///     "myapp://x-callback-url/open?x-source=OtherApp&x-success=myapp2%3A%2F%2Fdone&note=Milk",
/// )
/// .unwrap();
///
/// assert_eq!(parts.scheme, "myapp");
/// assert_eq!(parts.action, "open");
/// assert_eq!(parts.source.as_deref(), Some("OtherApp"));
/// assert_eq!(parts.success_url.as_ref().map(|u| u.as_str()), Some("myapp2://done"));
/// assert_eq!(parts.parameters["note"], "Milk");
/// ```
pub fn parse_url(url: &str) -> Result<XCallbackParts, XCallbackError> {
    let parsed = Url::parse(url)?;
    parse_callback(&parsed)
}

/// Parse an already parsed URL into [`XCallbackParts`].
///
/// Same contract as [`parse_url`] without the string parsing step.
pub fn parse_callback(url: &Url) -> Result<XCallbackParts, XCallbackError> {
    // Step 1: Only compliant URLs have x-callback structure to extract
    if !is_callback_url(url) {
        return Err(XCallbackError::NotCallbackUrl);
    }

    // Step 2: The action is the path without its leading slash, verbatim
    let path = url.path();
    let action = path.strip_prefix('/').unwrap_or(path).to_string();
    if action.is_empty() {
        return Err(XCallbackError::MissingAction);
    }

    // Step 3: Decode the query, then lift the reserved pairs out of it
    let mut parameters = decode_query(url.query().unwrap_or(""));
    let source = parameters.remove(SOURCE_PARAMETER);
    let success_url = take_callback(&mut parameters, SUCCESS_PARAMETER);
    let error_url = take_callback(&mut parameters, ERROR_PARAMETER);
    let cancel_url = take_callback(&mut parameters, CANCEL_PARAMETER);

    Ok(XCallbackParts {
        scheme: url.scheme().to_string(),
        action,
        source,
        success_url,
        error_url,
        cancel_url,
        parameters,
    })
}

/// Extract the decoded query parameters of a URL string, reserved keys
/// included.
///
/// Unlike [`parse_url`] this works on any URL, compliant or not, and
/// applies no structure beyond the query pair grammar.
///
/// # Examples
///
/// ```
/// use xcallback::query_parameters;
///
/// let parameters = query_parameters("myapp://x-callback-url/open?x-source=A&foo=bar%20baz").unwrap();
///
/// assert_eq!(parameters["x-source"], "A");
/// assert_eq!(parameters["foo"], "bar baz");
/// ```
pub fn query_parameters(url: &str) -> Result<BTreeMap<String, String>, XCallbackError> {
    let parsed = Url::parse(url)?;
    Ok(url_query_parameters(&parsed))
}

/// Extract the decoded query parameters of an already parsed URL.
pub fn url_query_parameters(url: &Url) -> BTreeMap<String, String> {
    decode_query(url.query().unwrap_or(""))
}

// Removes the pair either way; only a value that parses as an absolute
// URL survives as a typed callback.
fn take_callback(parameters: &mut BTreeMap<String, String>, key: &str) -> Option<Url> {
    parameters
        .remove(key)
        .and_then(|value| Url::parse(&value).ok())
}
