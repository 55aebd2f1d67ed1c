//! Server configuration derived from the environment.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Environment variable naming the listen address.
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
/// Environment variable naming the downstream employee endpoint.
pub const EMPLOYEE_API_URL_VAR: &str = "EMPLOYEE_API_URL";
/// Environment variable naming the downstream request timeout in seconds.
pub const REQUEST_TIMEOUT_VAR: &str = "REQUEST_TIMEOUT_SECONDS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_EMPLOYEE_API_URL: &str = "http://localhost:8112/api/v1/employee";
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Listen address could not be parsed as `host:port`.
    #[error("invalid listen address {value:?}")]
    InvalidBindAddr {
        /// Offending value.
        value: String,
    },
    /// Downstream endpoint could not be parsed as a URL.
    #[error("invalid employee endpoint URL {value:?}")]
    InvalidEndpoint {
        /// Offending value.
        value: String,
    },
    /// Timeout could not be parsed as whole seconds.
    #[error("invalid request timeout {value:?}")]
    InvalidTimeout {
        /// Offending value.
        value: String,
    },
}

/// Runtime configuration for the facade process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Base URL of the downstream employee mock server.
    pub employee_api_url: Url,
    /// Per-request timeout applied to the downstream client.
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for unset variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is present but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_raw =
            env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let endpoint_raw = env::var(EMPLOYEE_API_URL_VAR)
            .unwrap_or_else(|_| DEFAULT_EMPLOYEE_API_URL.to_owned());
        let timeout_raw = env::var(REQUEST_TIMEOUT_VAR).ok();

        Self::parse(&bind_raw, &endpoint_raw, timeout_raw.as_deref())
    }

    fn parse(
        bind_raw: &str,
        endpoint_raw: &str,
        timeout_raw: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidBindAddr {
            value: bind_raw.to_owned(),
        })?;
        let employee_api_url =
            Url::parse(endpoint_raw).map_err(|_| ConfigError::InvalidEndpoint {
                value: endpoint_raw.to_owned(),
            })?;
        let timeout_seconds = match timeout_raw {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidTimeout {
                value: raw.to_owned(),
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECONDS,
        };

        Ok(Self {
            bind_addr,
            employee_api_url,
            request_timeout: Duration::from_secs(timeout_seconds),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_mock_server() {
        let config = ServerConfig::parse(DEFAULT_BIND_ADDR, DEFAULT_EMPLOYEE_API_URL, None)
            .expect("defaults parse");

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(
            config.employee_api_url.as_str(),
            "http://localhost:8112/api/v1/employee"
        );
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn rejects_an_unparsable_listen_address() {
        let error = ServerConfig::parse("not-an-addr", DEFAULT_EMPLOYEE_API_URL, None)
            .expect_err("address must fail");
        assert!(matches!(error, ConfigError::InvalidBindAddr { .. }));
    }

    #[test]
    fn rejects_an_unparsable_endpoint() {
        let error = ServerConfig::parse(DEFAULT_BIND_ADDR, "not a url", None)
            .expect_err("endpoint must fail");
        assert!(matches!(error, ConfigError::InvalidEndpoint { .. }));
    }

    #[test]
    fn rejects_an_unparsable_timeout() {
        let error = ServerConfig::parse(DEFAULT_BIND_ADDR, DEFAULT_EMPLOYEE_API_URL, Some("soon"))
            .expect_err("timeout must fail");
        assert!(matches!(error, ConfigError::InvalidTimeout { .. }));
    }

    #[test]
    fn timeout_overrides_are_applied() {
        let config = ServerConfig::parse(DEFAULT_BIND_ADDR, DEFAULT_EMPLOYEE_API_URL, Some("5"))
            .expect("override parses");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
