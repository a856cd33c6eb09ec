//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn failures into `{ "error": <message> }` bodies with the
//! matching status code. Only the generic message crosses this boundary.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::inbound::http::cache_control::no_store_header;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Generic, caller-safe description of the failure.
    #[schema(example = "Invalid data format")]
    pub error: String,
}

impl From<&Error> for ErrorBody {
    fn from(error: &Error) -> Self {
        Self {
            error: error.message().to_owned(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::SchemaValidation => StatusCode::BAD_REQUEST,
        ErrorCode::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        builder.insert_header(no_store_header());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorBody::from(self))
    }
}

#[cfg(test)]
mod tests {
    //! Tests for HTTP error mapping.

    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::{Value, json};

    const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body())
            .await
            .expect("reading response body succeeds");
        serde_json::from_slice(&bytes).expect("error body is JSON")
    }

    #[rstest]
    #[case::schema(Error::schema_validation("Invalid data format"), StatusCode::BAD_REQUEST)]
    #[case::unknown(Error::unknown("Failed to fetch contributors"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(ResponseError::status_code(&error), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn body_contains_only_the_generic_message() {
        let error = Error::schema_validation("Invalid data format");
        let response = ResponseError::error_response(&error);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Invalid data format" }));
    }

    #[rstest]
    #[actix_web::test]
    async fn echoes_trace_id_header_when_present() {
        let error = Error::unknown("Failed to fetch contributors").with_trace_id(TRACE_ID);
        let response = ResponseError::error_response(&error);

        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace-id header is set")
            .to_str()
            .expect("header is ascii");
        assert_eq!(header, TRACE_ID);
        assert_eq!(
            response
                .headers()
                .get("cache-control")
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
    }

    #[rstest]
    fn omits_trace_id_header_without_scope() {
        let response = ResponseError::error_response(&Error::unknown("boom"));
        assert!(response.headers().get(TRACE_ID_HEADER).is_none());
    }
}
