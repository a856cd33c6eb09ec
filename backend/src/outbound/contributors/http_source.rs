//! Reqwest-backed contributor source.
//!
//! This adapter owns transport details only: the GET request, timeout and
//! transport error mapping, and JSON decoding into a generic value. Schema
//! checks happen in the domain.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url, header};
use serde_json::Value;
use tracing::warn;

use crate::domain::ports::{ContributorSource, ContributorSourceError};

/// Public placeholder API serving the user list.
pub const DEFAULT_UPSTREAM_URL: &str = "https://jsonplaceholder.typicode.com/users";

const USER_AGENT: &str = concat!("bbq-tips/", env!("CARGO_PKG_VERSION"));

/// Contributor source that performs one HTTP GET against a fixed endpoint.
pub struct ContributorsHttpSource {
    client: Client,
    endpoint: Url,
}

impl ContributorsHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let endpoint = Url::parse(DEFAULT_UPSTREAM_URL)?;
    /// let source = ContributorsHttpSource::new(endpoint, Duration::from_secs(10))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContributorSource for ContributorsHttpSource {
    async fn fetch_contributors(&self) -> Result<Value, ContributorSourceError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            // The body is still decoded and validated; a JSON error document
            // from upstream fails the schema instead.
            warn!(
                status = status.as_u16(),
                body = %body_preview(body.as_ref()),
                "contributor upstream returned non-success status"
            );
        }

        serde_json::from_slice(body.as_ref()).map_err(|error| {
            ContributorSourceError::decode(format!("invalid upstream JSON payload: {error}"))
        })
    }
}

fn map_transport_error(error: reqwest::Error) -> ContributorSourceError {
    if error.is_timeout() {
        ContributorSourceError::timeout(error.to_string())
    } else {
        ContributorSourceError::transport(error.to_string())
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
