//! Integration tests for the x-callback-url implementation.
//!
//! These tests exercise the build, check, and parse operations together,
//! the way a calling app and a receiving app would use them.

use url::Url;
use xcallback::*;

#[test]
fn test_worked_example() {
    // The canonical one-callback example from the convention
    let request = XCallbackRequest::new("myapp", "open", "OtherApp")
        .with_success_url(Url::parse("myapp2://done").unwrap());
    let url = build_url(&request).unwrap();

    assert_eq!(
        url.as_str(),
        "myapp://x-callback-url/open?x-source=OtherApp&x-success=myapp2%3A%2F%2Fdone"
    );
    assert!(is_compliant(url.as_str()));

    let parts = parse_url(url.as_str()).unwrap();
    assert_eq!(parts.scheme, "myapp");
    assert_eq!(parts.action, "open");
    assert_eq!(parts.source.as_deref(), Some("OtherApp"));
    assert_eq!(
        parts.success_url.as_ref().map(|u| u.as_str()),
        Some("myapp2://done")
    );
    assert!(parts.parameters.is_empty());
}

#[test]
fn test_full_round_trip() {
    let request = XCallbackRequest::new("receiver", "add-note", "My App 2.0")
        .with_success_url(Url::parse("caller://ok?id=1").unwrap())
        .with_error_url(Url::parse("caller://fail").unwrap())
        .with_cancel_url(Url::parse("caller://stop").unwrap())
        .with_parameter("title", "hello world")
        .with_parameter("body", "a=b&c+d 100%")
        .with_parameter("tags", "Müller,中");

    let url = build_url(&request).unwrap();
    let parts = parse_url(url.as_str()).unwrap();

    assert_eq!(parts.scheme, request.scheme);
    assert_eq!(parts.action, request.action);
    assert_eq!(parts.source.as_deref(), Some(request.source.as_str()));
    assert_eq!(parts.success_url, request.success_url);
    assert_eq!(parts.error_url, request.error_url);
    assert_eq!(parts.cancel_url, request.cancel_url);
    assert_eq!(parts.parameters, request.parameters);
}

#[test]
fn test_round_trip_is_deterministic() {
    let request = XCallbackRequest::new("myapp", "sync", "Hub")
        .with_parameter("b", "2")
        .with_parameter("a", "1");

    let first = build_url(&request).unwrap();
    let second = build_url(&request).unwrap();
    assert_eq!(first, second);

    // Serialize, reparse, rebuild from the parts: still byte-identical
    let parts = parse_url(first.as_str()).unwrap();
    let mut rebuilt = XCallbackRequest::new(parts.scheme, parts.action, parts.source.unwrap());
    for (key, value) in parts.parameters {
        rebuilt = rebuilt.with_parameter(key, value);
    }
    assert_eq!(build_url(&rebuilt).unwrap(), first);
}

#[test]
fn test_receiving_foreign_urls() {
    // Receivers see URLs other stacks built: odd ordering, duplicates,
    // missing x-source, unencoded-but-harmless characters
    let parts = parse_url(
        "theirapp://x-callback-url/import?format=json&x-success=ours%3A%2F%2Fback&format=xml",
    )
    .unwrap();

    assert_eq!(parts.action, "import");
    assert_eq!(parts.source, None);
    assert_eq!(
        parts.success_url.as_ref().map(|u| u.as_str()),
        Some("ours://back")
    );
    // Later duplicates win
    assert_eq!(parts.parameters["format"], "xml");
}

#[test]
fn test_receiving_degraded_queries() {
    // Broken escapes never fail the parse; they degrade pair by pair
    let parts = parse_url(
        "theirapp://x-callback-url/import?good=1&bad=%zz&%G1=dropped",
    )
    .unwrap();

    assert_eq!(parts.parameters["good"], "1");
    assert_eq!(parts.parameters["bad"], "");
    assert_eq!(parts.parameters.len(), 2);
}

#[test]
fn test_nested_callback_urls() {
    // The success callback is itself an x-callback-url back into the caller
    let back = XCallbackRequest::new("caller", "resume", "Receiver")
        .with_parameter("token", "abc 123");
    let back_url = build_url(&back).unwrap();

    let outward = XCallbackRequest::new("receiver", "do-work", "Caller")
        .with_success_url(back_url.clone());
    let outward_url = build_url(&outward).unwrap();

    let parts = parse_url(outward_url.as_str()).unwrap();
    let inner = parts.success_url.unwrap();
    assert_eq!(inner, back_url);
    assert!(is_callback_url(&inner));

    let inner_parts = parse_callback(&inner).unwrap();
    assert_eq!(inner_parts.action, "resume");
    assert_eq!(inner_parts.parameters["token"], "abc 123");
}

#[test]
fn test_query_parameters_view() {
    // The raw view keeps reserved keys; the structured parse lifts them out
    let url = "myapp://x-callback-url/open?x-source=A&x-success=b%3A%2F%2Fc&note=Milk";

    let raw = query_parameters(url).unwrap();
    assert_eq!(raw.len(), 3);
    assert_eq!(raw["x-source"], "A");
    assert_eq!(raw["x-success"], "b://c");
    assert_eq!(raw["note"], "Milk");

    let parts = parse_url(url).unwrap();
    assert_eq!(parts.parameters.len(), 1);
    assert!(!parts.parameters.contains_key(SOURCE_PARAMETER));
    assert!(!parts.parameters.contains_key(SUCCESS_PARAMETER));
}

#[test]
fn test_query_parameters_on_ordinary_urls() {
    // Works on any URL; the decoded pairs follow the same strict rules
    let params = query_parameters("https://example.com/search?q=rust%20urls&page=2").unwrap();
    assert_eq!(params["q"], "rust urls");
    assert_eq!(params["page"], "2");

    let typed = Url::parse("https://example.com/search?q=1").unwrap();
    assert_eq!(url_query_parameters(&typed)["q"], "1");
}

#[test]
fn test_error_messages() {
    let test_cases = vec![
        (
            build_url(&XCallbackRequest::new("", "open", "A")).unwrap_err(),
            "Scheme must not be empty",
        ),
        (
            build_url(&XCallbackRequest::new("1app", "open", "A")).unwrap_err(),
            "Invalid URL scheme: 1app",
        ),
        (
            build_url(&XCallbackRequest::new("myapp", "a/b", "A")).unwrap_err(),
            "Action is not a valid single path segment: a/b",
        ),
        (
            build_url(&XCallbackRequest::new("myapp", "open", "A").with_parameter("x-error", "x"))
                .unwrap_err(),
            "Parameter key is reserved by the x-callback-url protocol: x-error",
        ),
        (
            parse_url("https://example.com/").unwrap_err(),
            "URL authority is not x-callback-url",
        ),
        (
            parse_url("myapp://x-callback-url/").unwrap_err(),
            "URL has no action path segment",
        ),
    ];

    for (error, expected_message) in test_cases {
        assert_eq!(error.to_string(), expected_message);
    }
}

#[test]
fn test_reserved_parameter_helpers() {
    assert_eq!(
        RESERVED_PARAMETERS,
        [SOURCE_PARAMETER, SUCCESS_PARAMETER, ERROR_PARAMETER, CANCEL_PARAMETER]
    );

    for key in RESERVED_PARAMETERS {
        assert!(is_reserved_parameter(key), "Should be reserved: {}", key);
    }
    assert!(!is_reserved_parameter("x-other"));
    assert!(!is_reserved_parameter("source"));
    // Reservation is exact, not case-folded
    assert!(!is_reserved_parameter("X-Source"));
}

#[test]
fn test_parse_does_not_decode_the_action() {
    // Actions travel verbatim in both directions
    let request = XCallbackRequest::new("myapp", "open%20note", "A");
    let url = build_url(&request).unwrap();
    assert_eq!(url.path(), "/open%20note");

    let parts = parse_url(url.as_str()).unwrap();
    assert_eq!(parts.action, "open%20note");
}
