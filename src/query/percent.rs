//! Percent-encoding and strict percent-decoding of single query components.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped in a query component: everything outside the RFC 3986
/// unreserved set (letters, digits, `-`, `_`, `.`, `~`).
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a single query key or value.
///
/// Every byte of the UTF-8 representation outside the unreserved set is
/// replaced by `%XX` with uppercase hex digits. Space becomes `%20`, never
/// `+`.
///
/// # Examples
///
/// ```
/// use xcallback::encode_component;
///
/// assert_eq!(encode_component("bar baz"), "bar%20baz");
/// assert_eq!(encode_component("myapp2://done"), "myapp2%3A%2F%2Fdone");
/// assert_eq!(encode_component("safe-chars_.~"), "safe-chars_.~");
/// ```
pub fn encode_component(component: &str) -> String {
    utf8_percent_encode(component, QUERY_COMPONENT).to_string()
}

/// Percent-decode a single query key or value.
///
/// Each `%XX` escape is interpreted as one raw byte and the resulting byte
/// sequence is reassembled as UTF-8. `+` is left as a literal plus sign;
/// the convention encodes spaces as `%20`.
///
/// Returns `None` when an escape is truncated or non-hex, or when the
/// decoded bytes are not valid UTF-8.
///
/// # Examples
///
/// ```
/// use xcallback::decode_component;
///
/// assert_eq!(decode_component("bar%20baz").as_deref(), Some("bar baz"));
/// assert_eq!(decode_component("a+b").as_deref(), Some("a+b"));
/// assert_eq!(decode_component("broken%2"), None);
/// ```
pub fn decode_component(component: &str) -> Option<String> {
    let bytes = component.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = hex_value(*bytes.get(i + 1)?)?;
            let lo = hex_value(*bytes.get(i + 2)?)?;
            decoded.push(hi << 4 | lo);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(decoded).ok()
}

/// Value of a single hex digit, accepting both cases.
fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
