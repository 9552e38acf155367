//! HTTP server configuration.

use std::net::{IpAddr, SocketAddr};

use clap::Args;
use serde::{Deserialize, Serialize};

/// HTTP server bind settings.
#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct ServerConfig {
    /// Address to bind the server to.
    #[arg(long = "host", env = "SERVER_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to bind the server to.
    #[arg(long = "port", env = "SERVER_PORT", default_value = "8080")]
    pub port: u16,
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns whether the server binds to all interfaces.
    pub fn binds_to_all_interfaces(&self) -> bool {
        self.host.is_unspecified()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_to_loopback() {
        let config = ServerConfig::default();
        assert!(!config.binds_to_all_interfaces());
        assert_eq!(config.server_addr().port(), 8080);
    }

    #[test]
    fn unspecified_host_is_detected() {
        let config = ServerConfig {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
        };
        assert!(config.binds_to_all_interfaces());
    }
}
