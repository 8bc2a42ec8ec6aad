//! Core data structures and protocol constants for x-callback-url handling.

use std::collections::BTreeMap;

use url::Url;

/// Authority token shared by every compliant x-callback-url.
pub const X_CALLBACK_HOST: &str = "x-callback-url";

/// Reserved query key carrying the calling application's identifier.
pub const SOURCE_PARAMETER: &str = "x-source";

/// Reserved query key carrying the success callback URL.
pub const SUCCESS_PARAMETER: &str = "x-success";

/// Reserved query key carrying the error callback URL.
pub const ERROR_PARAMETER: &str = "x-error";

/// Reserved query key carrying the cancel callback URL.
pub const CANCEL_PARAMETER: &str = "x-cancel";

/// All query keys managed by the protocol rather than the caller.
pub const RESERVED_PARAMETERS: [&str; 4] = [
    SOURCE_PARAMETER,
    SUCCESS_PARAMETER,
    ERROR_PARAMETER,
    CANCEL_PARAMETER,
];

/// Check whether a query key is reserved by the x-callback-url protocol.
///
/// Reserved keys are emitted from the dedicated request fields and must not
/// appear in the open parameter map.
///
/// # Examples
///
/// ```
/// use xcallback::is_reserved_parameter;
///
/// assert!(is_reserved_parameter("x-source"));
/// assert!(!is_reserved_parameter("title"));
/// ```
pub fn is_reserved_parameter(key: &str) -> bool {
    RESERVED_PARAMETERS.contains(&key)
}

/// Inputs for building an x-callback-url.
///
/// `scheme`, `action`, and `source` are mandatory and must be non-empty;
/// the three callback URLs are optional; `parameters` is an open map of
/// additional query parameters. The map must not contain reserved keys;
/// those are derived from the dedicated fields.
///
/// Parameters are kept in a `BTreeMap` so the emitted query is
/// deterministic for a given mapping.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use xcallback::XCallbackRequest;
///
/// let url = XCallbackRequest::new("myapp", "open", "OtherApp")
///     .with_success_url(Url::parse("myapp2://done").unwrap())
///     .with_parameter("title", "hello world")
///     .build()
///     .unwrap();
///
/// assert_eq!(url.host_str(), Some("x-callback-url"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct XCallbackRequest {
    /// URL scheme of the receiving application (e.g. "myapp").
    pub scheme: String,
    /// Action to invoke, used as the URL's single path segment.
    pub action: String,
    /// Human-readable identifier of the calling application.
    pub source: String,
    /// Callback opened by the receiver on success.
    pub success_url: Option<Url>,
    /// Callback opened by the receiver on error.
    pub error_url: Option<Url>,
    /// Callback opened by the receiver when the user cancels.
    pub cancel_url: Option<Url>,
    /// Additional pass-through query parameters (reserved keys excluded).
    pub parameters: BTreeMap<String, String>,
}

impl XCallbackRequest {
    /// Create a request with the mandatory fields and no callbacks.
    pub fn new(
        scheme: impl Into<String>,
        action: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            action: action.into(),
            source: source.into(),
            success_url: None,
            error_url: None,
            cancel_url: None,
            parameters: BTreeMap::new(),
        }
    }

    /// Set the success callback URL.
    pub fn with_success_url(mut self, url: Url) -> Self {
        self.success_url = Some(url);
        self
    }

    /// Set the error callback URL.
    pub fn with_error_url(mut self, url: Url) -> Self {
        self.error_url = Some(url);
        self
    }

    /// Set the cancel callback URL.
    pub fn with_cancel_url(mut self, url: Url) -> Self {
        self.cancel_url = Some(url);
        self
    }

    /// Add one pass-through query parameter.
    ///
    /// Reserved keys are not rejected here; [`build`](Self::build) reports
    /// them so that construction stays all-or-nothing.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Build the compliant URL for this request.
    ///
    /// Convenience wrapper around [`build_url`](crate::build_url).
    pub fn build(&self) -> Result<Url, crate::error::XCallbackError> {
        crate::core::builder::build_url(self)
    }

    /// Check if a success callback is present.
    pub fn has_success_url(&self) -> bool {
        self.success_url.is_some()
    }

    /// Check if an error callback is present.
    pub fn has_error_url(&self) -> bool {
        self.error_url.is_some()
    }

    /// Check if a cancel callback is present.
    pub fn has_cancel_url(&self) -> bool {
        self.cancel_url.is_some()
    }

    /// Check if any pass-through parameters are present.
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }
}

/// Structured pieces extracted from a compliant x-callback-url.
///
/// This is the receiver-side counterpart of [`XCallbackRequest`]: the
/// action comes from the URL path, the reserved query keys are lifted into
/// dedicated fields, and everything else stays in `parameters`.
///
/// `source` is optional here: this crate always emits `x-source`, but a
/// foreign sender may omit it and the rest of the URL is still usable.
#[derive(Debug, Clone, PartialEq)]
pub struct XCallbackParts {
    /// URL scheme the sender addressed (e.g. "myapp").
    pub scheme: String,
    /// Action requested by the sender, taken verbatim from the path.
    pub action: String,
    /// Identifier of the calling application, if supplied.
    pub source: Option<String>,
    /// Success callback, if supplied and parseable as a URL.
    pub success_url: Option<Url>,
    /// Error callback, if supplied and parseable as a URL.
    pub error_url: Option<Url>,
    /// Cancel callback, if supplied and parseable as a URL.
    pub cancel_url: Option<Url>,
    /// Remaining pass-through query parameters, percent-decoded.
    pub parameters: BTreeMap<String, String>,
}

impl XCallbackParts {
    /// Check if the sender identified itself.
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Check if a success callback is present.
    pub fn has_success_url(&self) -> bool {
        self.success_url.is_some()
    }

    /// Check if an error callback is present.
    pub fn has_error_url(&self) -> bool {
        self.error_url.is_some()
    }

    /// Check if a cancel callback is present.
    pub fn has_cancel_url(&self) -> bool {
        self.cancel_url.is_some()
    }

    /// Check if any pass-through parameters are present.
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }
}
