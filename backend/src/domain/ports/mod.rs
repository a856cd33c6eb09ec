//! Domain ports for the hexagonal boundary.
//!
//! - [`ContributorSource`]: driven port, implemented by the upstream HTTP
//!   adapter.
//! - [`ContributorsQuery`]: driving port, consumed by inbound HTTP handlers.

mod contributor_source;
mod contributors_query;

#[cfg(test)]
pub use contributor_source::MockContributorSource;
pub use contributor_source::{
    ContributorSource, ContributorSourceError, FixtureContributorSource,
};
#[cfg(test)]
pub use contributors_query::MockContributorsQuery;
pub use contributors_query::{ContributorsQuery, FixtureContributorsQuery};
