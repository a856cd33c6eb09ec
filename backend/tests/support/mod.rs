//! Shared harness for end-to-end tests: a wiremock upstream feeding the real
//! reqwest adapter, the validating service, and the full HTTP surface.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::sync::Arc;
use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::HeaderMap;
use actix_web::{App, test, web};
use bbq_tips::Trace;
use bbq_tips::domain::ContributorsService;
use bbq_tips::inbound::http;
use bbq_tips::inbound::http::health::HealthState;
use bbq_tips::inbound::http::state::HttpState;
use bbq_tips::outbound::contributors::ContributorsHttpSource;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERS_PATH: &str = "/users";

/// Response captured from one in-process request.
pub struct Captured {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Captured {
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).expect("utf-8 body")
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("JSON body")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Start an upstream stub answering `GET /users` with `template` exactly once.
pub async fn upstream_serving(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    server
}

/// Build handler state wired to `endpoint` through the real adapter.
pub fn state_for(endpoint: &str, timeout: Duration) -> HttpState {
    let endpoint = Url::parse(endpoint).expect("endpoint URL");
    let source = ContributorsHttpSource::new(endpoint, timeout).expect("reqwest client");
    HttpState::new(Arc::new(ContributorsService::new(Arc::new(source))))
}

/// Build handler state for an upstream stub.
pub fn state_for_upstream(server: &MockServer) -> HttpState {
    state_for(
        &format!("{}{USERS_PATH}", server.uri()),
        Duration::from_secs(5),
    )
}

/// Return an endpoint on a loopback port with nothing listening.
pub fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local address");
    drop(listener);
    format!("http://{addr}{USERS_PATH}")
}

/// Issue a GET against the full application and capture the response.
pub async fn get(state: HttpState, uri: &str) -> Captured {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(web::Data::new(HealthState::new()))
            .wrap(Trace)
            .configure(http::configure),
    )
    .await;
    let request = test::TestRequest::get().uri(uri).to_request();
    capture(test::call_service(&app, request).await).await
}

async fn capture<B: MessageBody>(response: ServiceResponse<B>) -> Captured {
    let status = response.status();
    let headers = response.headers().clone();
    let body = test::read_body(response).await.to_vec();
    Captured {
        status,
        headers,
        body,
    }
}
