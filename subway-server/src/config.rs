//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tracing::warn;

/// Environment variable holding the bind address.
pub const HOST_VAR: &str = "SUBWAY_HOST";

/// Environment variable holding the bind port.
pub const PORT_VAR: &str = "SUBWAY_PORT";

/// Configuration parameters for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: IpAddr,

    /// Port to bind.
    pub port: u16,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self { host, port }
    }

    /// Read `SUBWAY_HOST` and `SUBWAY_PORT`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from a variable lookup.
    ///
    /// Unparseable values are reported and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup(HOST_VAR)
            .and_then(|raw| match raw.parse() {
                Ok(host) => Some(host),
                Err(e) => {
                    warn!(value = %raw, error = %e, "invalid {HOST_VAR}, using default");
                    None
                }
            })
            .unwrap_or(defaults.host);

        let port = lookup(PORT_VAR)
            .and_then(|raw| match raw.parse() {
                Ok(port) => Some(port),
                Err(e) => {
                    warn!(value = %raw, error = %e, "invalid {PORT_VAR}, using default");
                    None
                }
            })
            .unwrap_or(defaults.port);

        Self { host, port }
    }

    /// Returns the socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
        }
    }
}
