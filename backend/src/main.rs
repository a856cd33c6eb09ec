//! Backend entry-point: loads settings, wires the contributors proxy, and
//! serves the tips page.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bbq_tips::config::AppSettings;
use bbq_tips::domain::ContributorsService;
use bbq_tips::inbound::http::health::HealthState;
use bbq_tips::outbound::contributors::ContributorsHttpSource;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let upstream_url = settings.upstream_url().map_err(std::io::Error::other)?;
    let upstream_timeout = settings.upstream_timeout();

    let source = ContributorsHttpSource::new(upstream_url, upstream_timeout).map_err(|e| {
        std::io::Error::other(format!("failed to build upstream client: {e}"))
    })?;
    info!(
        upstream = %source.endpoint(),
        timeout_secs = upstream_timeout.as_secs(),
        "contributors upstream configured"
    );
    let contributors = Arc::new(ContributorsService::new(Arc::new(source)));

    let config = ServerConfig::new(bind_addr, contributors);
    info!(addr = %config.bind_addr(), "starting HTTP server");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
