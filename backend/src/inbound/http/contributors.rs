//! Validating proxy endpoint.
//!
//! ```text
//! GET /api/contributors
//! ```

use actix_web::{HttpResponse, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::no_store_header;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::ContributorSchema;
use crate::inbound::http::state::HttpState;

/// List contributors fetched from upstream and validated against the schema.
#[utoipa::path(
    get,
    path = "/api/contributors",
    description = "Fetch the upstream user list once, validate every record, and return the batch in upstream order. One invalid record rejects the whole batch.",
    responses(
        (
            status = 200,
            description = "Validated contributors",
            headers(("Cache-Control" = String, description = "Always no-store")),
            body = [ContributorSchema]
        ),
        (status = 400, description = "Upstream payload failed schema validation", body = ErrorBody),
        (status = 500, description = "Upstream could not be fetched or decoded", body = ErrorBody)
    ),
    tags = ["contributors"],
    operation_id = "listContributors"
)]
#[get("/contributors")]
pub async fn list_contributors(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let contributors = state.contributors.list_contributors().await?;
    Ok(HttpResponse::Ok()
        .insert_header(no_store_header())
        .json(contributors))
}

#[cfg(test)]
mod tests {
    //! Handler behaviour over a mocked contributors query.

    use super::*;
    use crate::domain::ports::{
        FixtureContributorSource, FixtureContributorsQuery, MockContributorsQuery,
    };
    use crate::domain::{ContributorsService, Error};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn call(state: HttpState) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api").service(list_contributors)),
        )
        .await;
        let request = actix_test::TestRequest::get()
            .uri("/api/contributors")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, serde_json::from_slice(&body).expect("JSON body"))
    }

    fn failing_query(error: Error) -> HttpState {
        let mut query = MockContributorsQuery::new();
        query
            .expect_list_contributors()
            .times(1)
            .return_once(move || Err(error));
        HttpState::new(Arc::new(query))
    }

    #[rstest]
    #[actix_web::test]
    async fn returns_contributors_as_json_array() {
        let (status, body) = call(HttpState::new(Arc::new(FixtureContributorsQuery))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                { "id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz" },
                { "id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv" }
            ])
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_upstream_list_is_an_empty_array() {
        let service = ContributorsService::new(Arc::new(FixtureContributorSource));
        let (status, body) = call(HttpState::new(Arc::new(service))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[rstest]
    #[case::schema(
        Error::schema_validation("Invalid data format"),
        StatusCode::BAD_REQUEST,
        "Invalid data format"
    )]
    #[case::unknown(
        Error::unknown("Failed to fetch contributors"),
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to fetch contributors"
    )]
    #[actix_web::test]
    async fn maps_query_errors_to_status_and_body(
        #[case] error: Error,
        #[case] expected_status: StatusCode,
        #[case] expected_message: &str,
    ) {
        let (status, body) = call(failing_query(error)).await;
        assert_eq!(status, expected_status);
        assert_eq!(body, json!({ "error": expected_message }));
    }
}
