//! Encoding and decoding of whole query strings.

use std::collections::BTreeMap;

use crate::query::percent::{decode_component, encode_component};

/// Encode a parameter mapping into a query string.
///
/// Each key and value is percent-encoded with
/// [`encode_component`](crate::encode_component), pairs are joined as
/// `key=value` and separated by `&`. Keys are emitted in lexicographic
/// order, so the output is deterministic for a given mapping. An empty
/// mapping encodes to the empty string.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use xcallback::encode_query;
///
/// let mut params = BTreeMap::new();
/// params.insert("foo".to_string(), "bar baz".to_string());
/// params.insert("page".to_string(), "2".to_string());
///
/// assert_eq!(encode_query(&params), "foo=bar%20baz&page=2");
/// ```
pub fn encode_query(parameters: &BTreeMap<String, String>) -> String {
    let pairs: Vec<String> = parameters
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect();

    pairs.join("&")
}

/// Decode a query string into a parameter mapping.
///
/// The string is split on `&` (empty segments are skipped); each segment is
/// split on its first `=` into key and value, and a segment with no `=`
/// yields an entry with an empty value. Percent-decoding is applied to key
/// and value independently; `+` is not treated as space. Duplicate keys keep
/// the last occurrence. The empty string decodes to an empty mapping.
///
/// Decoding never fails. Malformed percent-escapes degrade softly per
/// segment: an undecodable value is replaced by the empty string under its
/// key, and a pair whose key is undecodable is dropped entirely.
///
/// # Examples
///
/// ```
/// use xcallback::decode_query;
///
/// let params = decode_query("x-source=A&foo=bar%20baz");
/// assert_eq!(params.get("x-source").map(String::as_str), Some("A"));
/// assert_eq!(params.get("foo").map(String::as_str), Some("bar baz"));
///
/// assert!(decode_query("").is_empty());
/// assert_eq!(decode_query("onlykey").get("onlykey").map(String::as_str), Some(""));
/// ```
pub fn decode_query(query: &str) -> BTreeMap<String, String> {
    let mut parameters = BTreeMap::new();

    for segment in query.split('&') {
        if segment.is_empty() {
            continue;
        }

        let (raw_key, raw_value) = match segment.split_once('=') {
            Some((key, value)) => (key, value),
            None => (segment, ""),
        };

        // A pair without a decodable key has no identity to file it under.
        let key = match decode_component(raw_key) {
            Some(key) => key,
            None => continue,
        };
        let value = decode_component(raw_value).unwrap_or_default();

        parameters.insert(key, value);
    }

    parameters
}
