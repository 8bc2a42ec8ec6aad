//! xcallback - Construction, parsing, and validation of x-callback-url URLs
//!
//! The [x-callback-url](https://x-callback-url.com/) convention lets apps on
//! the same device call each other through custom URL schemes and hand the
//! receiver URLs to open on success, error, or cancellation.
//!
//! This crate builds compliant URLs from structured requests, checks
//! candidate URLs for compliance, and parses compliant URLs back into their
//! structured pieces.
//!
//! # Features
//!
//! - **Compliant by construction**: Built URLs always carry the
//!   `x-callback-url` authority and a fully percent-encoded query
//! - **Round-trip safe**: Parsing a built URL recovers the exact action,
//!   source, callbacks, and parameters that went in
//! - **Strict receive-side decoding**: Malformed percent escapes degrade to
//!   empty values instead of corrupt text, and never panic
//! - **Deterministic**: Open parameters serialize in a stable lexicographic
//!   order
//!
//! # Quick Start
//!
//! ```
//! use url::Url;
//! use xcallback::{build_url, is_compliant, parse_url, XCallbackRequest};
//!
//! // Build a compliant URL
//! let request = XCallbackRequest::new("myapp", "open", "OtherApp")
//!     .with_success_url(Url::parse("myapp2://done")?)
//!     .with_parameter("note", "Milk");
//! let url = build_url(&request)?;
//! assert_eq!(
//!     url.as_str(),
//!     "myapp://x-callback-url/open?x-source=OtherApp&x-success=myapp2%3A%2F%2Fdone&note=Milk"
//! );
//!
//! // Check a candidate
//! assert!(is_compliant(url.as_str()));
//! assert!(!is_compliant("myapp://X-Callback-URL/open"));
//!
//! // Parse back into structured parts
//! let parts = parse_url(url.as_str())?;
//! assert_eq!(parts.action, "open");
//! assert_eq!(parts.source.as_deref(), Some("OtherApp"));
//! assert_eq!(parts.parameters["note"], "Milk");
//! # Ok::<(), xcallback::XCallbackError>(())
//! ```
//!
//! # URL Shape
//!
//! Every compliant URL follows this shape:
//!
//! ```text
//! <scheme>://x-callback-url/<action>?x-source=<enc>[&x-success=<enc>][&x-error=<enc>][&x-cancel=<enc>][&<key>=<enc>]*
//! ```
//!
//! The four reserved query parameters carry the protocol itself:
//!
//! | Parameter   | Role |
//! |-------------|------|
//! | `x-source`  | Name of the calling app |
//! | `x-success` | URL the receiver opens after success |
//! | `x-error`   | URL the receiver opens after failure |
//! | `x-cancel`  | URL the receiver opens after user cancellation |
//!
//! Everything else in the query is an open, action-specific parameter.
//!
//! # Error Handling
//!
//! Fallible functions return `Result<T, XCallbackError>`. Common error cases:
//!
//! - Empty or malformed scheme, action, or source when building
//! - Open parameters that collide with the reserved keys
//! - Parsing a URL that does not follow the convention
//!
//! The compliance checks and the query codec never fail: non-URLs are simply
//! non-compliant, and undecodable query text degrades pair by pair.

// Re-export main building functions
pub use crate::core::{build_url, validate_action, validate_scheme};

// Re-export main parsing functions
pub use crate::core::{parse_callback, parse_url, query_parameters, url_query_parameters};

// Re-export compliance checks
pub use crate::core::{is_callback_url, is_compliant};

// Re-export query codec essentials
pub use crate::query::{decode_component, decode_query, encode_component, encode_query};

// Re-export public types
pub use crate::error::XCallbackError;
pub use crate::types::{
    is_reserved_parameter, XCallbackParts, XCallbackRequest, CANCEL_PARAMETER, ERROR_PARAMETER,
    RESERVED_PARAMETERS, SOURCE_PARAMETER, SUCCESS_PARAMETER, X_CALLBACK_HOST,
};

// Module declarations
pub mod core;
pub mod error;
pub mod query;
pub mod types;
