//! Tips page endpoints.
//!
//! ```text
//! GET /tips
//! GET /tips/contributors
//! ```
//!
//! The page ships with the contributors panel in its loading state; the
//! inline loader then requests the fragment exactly once.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use tracing::debug;

use crate::domain::TIPS;
use crate::inbound::http::cache_control::no_store_header;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::tips_view::{ContributorsPanel, render_page, render_panel};

/// Render the tips page.
#[utoipa::path(
    get,
    path = "/tips",
    description = "HTML page listing the five barbecue tips, with the contributors panel in its loading state.",
    responses(
        (status = 200, description = "Tips page", content_type = "text/html", body = String)
    ),
    tags = ["pages"],
    operation_id = "getTipsPage"
)]
#[get("/tips")]
pub async fn tips_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_page(&TIPS, ContributorsPanel::Loading))
}

/// Render the contributors panel after one call to the validating proxy.
///
/// Always answers 200; both proxy failure kinds collapse into the panel's
/// error state.
#[utoipa::path(
    get,
    path = "/tips/contributors",
    description = "HTML fragment for the contributors panel in its success or error state.",
    responses(
        (
            status = 200,
            description = "Contributors panel fragment",
            content_type = "text/html",
            headers(("Cache-Control" = String, description = "Always no-store")),
            body = String
        )
    ),
    tags = ["pages"],
    operation_id = "getTipsContributorsPanel"
)]
#[get("/tips/contributors")]
pub async fn contributors_panel(state: web::Data<HttpState>) -> HttpResponse {
    let html = match state.contributors.list_contributors().await {
        Ok(contributors) => render_panel(ContributorsPanel::Loaded(&contributors)),
        Err(error) => {
            debug!(code = ?error.code(), "contributors panel falling back to error state");
            render_panel(ContributorsPanel::Failed)
        }
    };
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header(no_store_header())
        .body(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;
    use crate::domain::ports::{FixtureContributorsQuery, MockContributorsQuery};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use std::sync::Arc;

    async fn get_html(state: HttpState, uri: &str) -> (StatusCode, String) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(tips_page)
                .service(contributors_panel),
        )
        .await;
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (
            status,
            String::from_utf8(body.to_vec()).expect("utf-8 HTML body"),
        )
    }

    #[rstest]
    #[actix_web::test]
    async fn page_does_not_touch_the_proxy() {
        let mut query = MockContributorsQuery::new();
        query.expect_list_contributors().never();

        let (status, html) = get_html(HttpState::new(Arc::new(query)), "/tips").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<title>BBQ Tips</title>"));
        assert!(html.contains("data-state=\"loading\""));
    }

    #[rstest]
    #[actix_web::test]
    async fn fragment_renders_grid_on_success() {
        let (status, html) = get_html(
            HttpState::new(Arc::new(FixtureContributorsQuery)),
            "/tips/contributors",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("data-state=\"success\""));
        assert!(html.contains("Ervin Howell"));
    }

    #[rstest]
    #[case::schema(Error::schema_validation("Invalid data format"))]
    #[case::unknown(Error::unknown("Failed to fetch contributors"))]
    #[actix_web::test]
    async fn fragment_collapses_both_failure_kinds(#[case] error: Error) {
        let mut query = MockContributorsQuery::new();
        query
            .expect_list_contributors()
            .times(1)
            .return_once(move || Err(error));

        let (status, html) = get_html(HttpState::new(Arc::new(query)), "/tips/contributors").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("data-state=\"error\""));
        assert!(html.contains("Failed to load contributors"));
        assert!(!html.contains("contributor-grid"));
    }
}
