//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Company`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Company)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CompanySchema {
    /// Company name.
    #[schema(example = "Romaguera-Crona")]
    name: String,
    /// Optional slogan.
    #[schema(rename = "catchPhrase", example = "Multi-layered client-server neural-net")]
    catch_phrase: Option<String>,
    /// Optional business description.
    #[schema(example = "harness real-time e-markets")]
    bs: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Contributor`].
///
/// Absent optional fields are omitted from the payload.
#[derive(ToSchema)]
#[schema(as = crate::domain::Contributor)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContributorSchema {
    /// Unique positive identifier.
    #[schema(example = 1, minimum = 1)]
    id: u64,
    /// Non-empty display name.
    #[schema(example = "Leanne Graham")]
    name: String,
    /// Email address.
    #[schema(example = "Sincere@april.biz", format = "email")]
    email: String,
    #[schema(example = "Bret")]
    username: Option<String>,
    #[schema(example = "1-770-736-8031 x56442")]
    phone: Option<String>,
    /// RFC 3339 UTC timestamp with millisecond precision.
    #[schema(example = "2024-05-01T00:00:00.000Z", format = "date-time")]
    date: Option<String>,
    /// Absolute URL.
    #[schema(example = "https://hildegard.org", format = "uri")]
    website: Option<String>,
    company: Option<CompanySchema>,
}
