//! Driven port for fetching the raw contributor payload from upstream.
//!
//! The port hands back the decoded JSON as a generic value. Deciding whether
//! that value is a valid contributor batch is the domain's job, not the
//! adapter's.

use async_trait::async_trait;
use serde_json::Value;

/// Errors surfaced while calling the upstream user list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContributorSourceError {
    /// Network transport failed before a full response arrived.
    #[error("upstream transport failed: {message}")]
    Transport { message: String },
    /// The upstream call exceeded the configured timeout.
    #[error("upstream timeout: {message}")]
    Timeout { message: String },
    /// The response body is not JSON.
    #[error("upstream response decode failed: {message}")]
    Decode { message: String },
}

impl ContributorSourceError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for retrieving the upstream user list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContributorSource: Send + Sync {
    /// Perform exactly one upstream call and return its decoded JSON body.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use bbq_tips::domain::ports::{ContributorSource, FixtureContributorSource};
    ///
    /// let payload = FixtureContributorSource.fetch_contributors().await?;
    /// assert!(payload.is_array());
    /// # Ok::<(), bbq_tips::domain::ports::ContributorSourceError>(())
    /// ```
    async fn fetch_contributors(&self) -> Result<Value, ContributorSourceError>;
}

/// Fixture source returning an empty user list.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureContributorSource;

#[async_trait]
impl ContributorSource for FixtureContributorSource {
    async fn fetch_contributors(&self) -> Result<Value, ContributorSourceError> {
        Ok(Value::Array(Vec::new()))
    }
}
