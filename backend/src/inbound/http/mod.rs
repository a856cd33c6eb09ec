//! HTTP inbound adapter exposing the proxy endpoint, the tips page, and
//! health probes.

pub mod cache_control;
pub mod contributors;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod tips;
pub mod tips_view;

pub use error::{ApiResult, ErrorBody};

use actix_web::web;

/// Register every HTTP route.
///
/// Callers attach `web::Data<HttpState>` and `web::Data<HealthState>`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use bbq_tips::inbound::http::{self, health::HealthState, state::HttpState};
///
/// let _app = App::new()
///     .app_data(web::Data::new(HttpState::default()))
///     .app_data(web::Data::new(HealthState::new()))
///     .configure(http::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").service(contributors::list_contributors))
        .service(tips::tips_page)
        .service(tips::contributors_panel)
        .service(health::ready)
        .service(health::live);
}
