//! Query-string codec shared by the builder and the parse path.
//!
//! This module contains the percent-encoding leaf of the crate:
//! - Component-level percent-encoding and strict percent-decoding
//! - Whole-query encoding of a parameter mapping
//! - Whole-query decoding with soft per-segment degradation

pub mod codec;
pub mod percent;

// Re-export main functionality
pub use codec::{decode_query, encode_query};
pub use percent::{decode_component, encode_component};
