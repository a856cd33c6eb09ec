//! Upstream contributor adapters.
//!
//! This module provides a thin HTTP implementation of the
//! `ContributorSource` port.

mod http_source;

pub use http_source::{ContributorsHttpSource, DEFAULT_UPSTREAM_URL};
