//! Compliance checks for x-callback-url candidates.

use url::Url;

use crate::types::X_CALLBACK_HOST;

/// Check whether a URL string follows the x-callback-url convention.
///
/// A compliant URL parses as an absolute URL and carries the literal
/// authority `x-callback-url`, nothing more: no port, no userinfo, and
/// no deviation in case. The check never fails; unparseable input is
/// simply non-compliant.
///
/// # Examples
///
/// ```
/// use xcallback::is_compliant;
///
/// assert!(is_compliant("myapp://x-callback-url/open?x-source=App"));
/// assert!(!is_compliant("myapp://X-Callback-URL/open"));
/// assert!(!is_compliant("https://example.com/open"));
/// assert!(!is_compliant("not a url"));
/// ```
pub fn is_compliant(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| is_callback_url(&parsed))
        .unwrap_or(false)
}

/// Check whether an already parsed URL follows the x-callback-url
/// convention.
///
/// Custom schemes keep their host text verbatim, so a miscased authority
/// like `X-Callback-URL` stays visible here and is rejected.
pub fn is_callback_url(url: &Url) -> bool {
    let host_ok = url
        .host_str()
        .map(|host| host == X_CALLBACK_HOST)
        .unwrap_or(false);

    host_ok && url.port().is_none() && url.username().is_empty() && url.password().is_none()
}
