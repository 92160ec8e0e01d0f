//! Environment-based configuration for the mock servers
//!
//! Every value has a development default so the servers start from a plain
//! checkout; environment variables override them for CI and docker-compose.

use crate::{Error, Result};

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tracing::info;

/// Network address a mock server listens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerAddress {
    pub address: IpAddr,
    pub port: u16,
}

impl ServerAddress {
    pub fn new(address: IpAddr, port: u16) -> Self {
        Self { address, port }
    }

    /// `address:port`, as used when dialing the server.
    pub fn url(&self) -> String {
        self.socket_addr().to_string()
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

/// Mock server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockServerConfig {
    /// HTTP mock server bind address
    pub http: ServerAddress,
    /// gRPC mock server bind address
    pub grpc: ServerAddress,
    /// Root of the HTTP fixtures (`<root>/<service>/<operation>/<scenario>.json`)
    pub http_fixtures_root: PathBuf,
    /// Root of the gRPC fixtures (`<root>/<service>/<Rpc>/<scenario>.json`)
    pub grpc_fixtures_root: PathBuf,
}

impl Default for MockServerConfig {
    fn default() -> Self {
        let localhost = IpAddr::V4(Ipv4Addr::LOCALHOST);
        Self {
            http: ServerAddress::new(localhost, 8010),
            grpc: ServerAddress::new(localhost, 9010),
            http_fixtures_root: PathBuf::from("fixtures/http"),
            grpc_fixtures_root: PathBuf::from("fixtures/grpc"),
        }
    }
}

impl MockServerConfig {
    /// Build configuration from environment
    ///
    /// Environment variables:
    /// - MOCK_HTTP_SERVER_ADDRESS / MOCK_HTTP_SERVER_PORT (default: 127.0.0.1:8010)
    /// - MOCK_GRPC_SERVER_ADDRESS / MOCK_GRPC_SERVER_PORT (default: 127.0.0.1:9010)
    /// - MOCK_HTTP_FIXTURES_ROOT (default: fixtures/http)
    /// - MOCK_GRPC_FIXTURES_ROOT (default: fixtures/grpc)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let lookup = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let config = Self {
            http: ServerAddress::new(
                parse_or(&lookup, "MOCK_HTTP_SERVER_ADDRESS", defaults.http.address)?,
                parse_or(&lookup, "MOCK_HTTP_SERVER_PORT", defaults.http.port)?,
            ),
            grpc: ServerAddress::new(
                parse_or(&lookup, "MOCK_GRPC_SERVER_ADDRESS", defaults.grpc.address)?,
                parse_or(&lookup, "MOCK_GRPC_SERVER_PORT", defaults.grpc.port)?,
            ),
            http_fixtures_root: lookup("MOCK_HTTP_FIXTURES_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.http_fixtures_root),
            grpc_fixtures_root: lookup("MOCK_GRPC_FIXTURES_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.grpc_fixtures_root),
        };

        info!(
            http = %config.http.url(),
            grpc = %config.grpc.url(),
            http_fixtures_root = %config.http_fixtures_root.display(),
            grpc_fixtures_root = %config.grpc_fixtures_root.display(),
            "Mock server configuration resolved"
        );

        Ok(config)
    }
}

fn parse_or<T, F>(lookup: &F, name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("{name} is invalid ('{raw}'): {e}"))),
    }
}
