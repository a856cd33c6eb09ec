//! Application settings loaded via OrthoConfig.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::contributors::DEFAULT_UPSTREAM_URL;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Errors raised when a configured value cannot be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address `{value}`: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid upstream URL `{value}`: {source}")]
    UpstreamUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Runtime settings for the tips server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TIPS")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Endpoint returning the upstream user list.
    pub upstream_url: Option<String>,
    /// Upper bound on a single upstream request, in seconds.
    pub upstream_timeout_secs: Option<u64>,
}

impl AppSettings {
    /// Return the bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Return the upstream endpoint, falling back to the public placeholder API.
    pub fn upstream_url(&self) -> Result<Url, SettingsError> {
        let value = self.upstream_url.as_deref().unwrap_or(DEFAULT_UPSTREAM_URL);
        Url::parse(value).map_err(|source| SettingsError::UpstreamUrl {
            value: value.to_owned(),
            source,
        })
    }

    /// Return the upstream request timeout.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(
            self.upstream_timeout_secs
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        )
    }
}
