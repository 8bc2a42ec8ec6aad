//! Core x-callback-url operations.
//!
//! This module contains the main protocol operations:
//! - Building compliant URLs from structured requests
//! - Parsing URLs back into structured parts
//! - Checking candidate URLs for compliance

pub mod builder;
pub mod parser;
pub mod validator;

// Re-export main functionality
pub use builder::{build_url, validate_action, validate_scheme};
pub use parser::{parse_callback, parse_url, query_parameters, url_query_parameters};
pub use validator::{is_callback_url, is_compliant};
