//! Driving port for listing validated contributors.
//!
//! Inbound adapters depend on this port only. The production implementation
//! is [`crate::domain::ContributorsService`]; tests can substitute the
//! fixture or a mock.

use async_trait::async_trait;

use crate::domain::{Contributor, ContributorId, ContributorName, EmailAddress, Error};

/// Use-case port behind `GET /api/contributors` and the tips page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContributorsQuery: Send + Sync {
    /// Fetch and validate the contributor batch.
    ///
    /// Fails with [`crate::domain::ErrorCode::SchemaValidation`] when the
    /// upstream payload does not conform, and
    /// [`crate::domain::ErrorCode::Unknown`] for every other failure.
    async fn list_contributors(&self) -> Result<Vec<Contributor>, Error>;
}

/// Deterministic in-memory query returning two contributors.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureContributorsQuery;

#[async_trait]
impl ContributorsQuery for FixtureContributorsQuery {
    async fn list_contributors(&self) -> Result<Vec<Contributor>, Error> {
        const FIXTURES: [(u64, &str, &str); 2] = [
            (1, "Leanne Graham", "Sincere@april.biz"),
            (2, "Ervin Howell", "Shanna@melissa.tv"),
        ];

        FIXTURES
            .into_iter()
            .map(|(id, name, email)| -> Result<Contributor, Error> {
                let id = ContributorId::new(id)
                    .map_err(|err| Error::unknown(format!("invalid fixture id: {err}")))?;
                let name = ContributorName::new(name)
                    .map_err(|err| Error::unknown(format!("invalid fixture name: {err}")))?;
                let email = EmailAddress::new(email)
                    .map_err(|err| Error::unknown(format!("invalid fixture email: {err}")))?;
                Ok(Contributor::new(id, name, email))
            })
            .collect()
    }
}
