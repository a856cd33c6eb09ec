//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use bbq_tips::domain::ports::ContributorsQuery;

/// Settings and dependencies needed to start the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) contributors: Arc<dyn ContributorsQuery>,
}

impl ServerConfig {
    /// Construct a server configuration around the contributors query.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, contributors: Arc<dyn ContributorsQuery>) -> Self {
        Self {
            bind_addr,
            contributors,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
