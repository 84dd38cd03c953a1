//! HTTP server configuration object.

use std::net::SocketAddr;

use roster::inbound::http::state::HttpState;

/// Everything [`super::create_server`] needs besides the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) http_state: HttpState,
}

impl ServerConfig {
    pub fn new(bind_addr: SocketAddr, http_state: HttpState) -> Self {
        Self {
            bind_addr,
            http_state,
        }
    }
}
