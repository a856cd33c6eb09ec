//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend on
//! the domain port only and stay testable without network I/O.

use std::sync::Arc;

use crate::domain::ports::{ContributorsQuery, FixtureContributorsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contributors: Arc<dyn ContributorsQuery>,
}

impl HttpState {
    /// Construct state around a contributors query.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bbq_tips::domain::ports::FixtureContributorsQuery;
    /// use bbq_tips::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureContributorsQuery));
    /// let _query = state.contributors.clone();
    /// ```
    pub fn new(contributors: Arc<dyn ContributorsQuery>) -> Self {
        Self { contributors }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureContributorsQuery))
    }
}
