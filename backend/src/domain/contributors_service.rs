//! Validating proxy use-case.
//!
//! One invocation performs one upstream fetch and one validation pass.
//! Failures collapse into the two caller-visible categories; the detailed
//! cause is logged with the request's trace identifier and then dropped.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{ContributorSource, ContributorsQuery};
use crate::domain::{
    Contributor, Error, FETCH_FAILED_MESSAGE, INVALID_DATA_MESSAGE, TraceId, validate_contributors,
};

/// Service implementing [`ContributorsQuery`] on top of a [`ContributorSource`].
#[derive(Clone)]
pub struct ContributorsService<S> {
    source: Arc<S>,
}

impl<S> ContributorsService<S> {
    /// Create a service backed by `source`.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> ContributorsQuery for ContributorsService<S>
where
    S: ContributorSource,
{
    async fn list_contributors(&self) -> Result<Vec<Contributor>, Error> {
        let trace_id = TraceId::current().map(|id| id.to_string());

        let payload = self.source.fetch_contributors().await.map_err(|error| {
            warn!(%error, trace_id = ?trace_id, "contributor upstream fetch failed");
            Error::unknown(FETCH_FAILED_MESSAGE)
        })?;

        let contributors = validate_contributors(&payload).map_err(|violation| {
            warn!(
                path = violation.path(),
                reason = %violation.reason(),
                trace_id = ?trace_id,
                "contributor payload rejected by schema"
            );
            Error::schema_validation(INVALID_DATA_MESSAGE)
        })?;

        debug!(count = contributors.len(), "contributor payload validated");
        Ok(contributors)
    }
}
