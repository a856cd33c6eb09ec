//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the contributors proxy, the tips page routes, and the
//! health probes, together with schema wrappers that describe domain types
//! without coupling them to utoipa.
//!
//! The document backs Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::ErrorBody;
use crate::inbound::http::schemas::{CompanySchema, ContributorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the HTTP surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "BBQ tips backend API",
        description = "Validating proxy for the contributors list, plus the server-rendered tips page."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contributors::list_contributors,
        crate::inbound::http::tips::tips_page,
        crate::inbound::http::tips::contributors_panel,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ContributorSchema, CompanySchema, ErrorBody)),
    tags(
        (name = "contributors", description = "Validated contributor records"),
        (name = "pages", description = "Server-rendered HTML"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const CONTRIBUTOR_SCHEMA_NAME: &str = "crate.domain.Contributor";

    #[rstest]
    #[case("/api/contributors")]
    #[case("/tips")]
    #[case("/tips/contributors")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(
            doc.paths.paths.contains_key(path),
            "{path} missing from the document"
        );
    }

    #[test]
    fn contributor_schema_exposes_camel_case_company_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let contributor = schemas
            .get(CONTRIBUTOR_SCHEMA_NAME)
            .expect("Contributor schema");
        match contributor {
            RefOr::T(Schema::Object(obj)) => {
                for field in ["id", "name", "email", "website", "company"] {
                    assert!(obj.properties.contains_key(field), "missing {field}");
                }
            }
            _ => panic!("expected Object schema"),
        }

        let json = doc.to_json().expect("serialise document");
        assert!(json.contains("catchPhrase"));
    }
}
