//! Shared cache-control policies for HTTP handlers.

/// Responses that reflect one upstream fetch must never be reused.
pub const NO_STORE: &str = "no-store";

/// Build the cache-control header tuple for uncached responses.
pub const fn no_store_header() -> (&'static str, &'static str) {
    ("Cache-Control", NO_STORE)
}
