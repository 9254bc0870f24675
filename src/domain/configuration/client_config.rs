//! Connection settings for the authorization service client.

use std::time::Duration;

use url::Url;

use super::Configuration;
use crate::domain::AppError;

pub const SERVER_RPC_ADDRESS: &str = "sentry.service.client.server.rpc-address";
pub const SERVER_RPC_PORT: &str = "sentry.service.client.server.rpc-port";
pub const SERVER_RPC_CONNECTION_TIMEOUT: &str =
    "sentry.service.client.server.rpc-connection-timeout";

const DEFAULT_RPC_ADDRESS: &str = "localhost";
const DEFAULT_RPC_PORT: u16 = 8038;
const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 200_000;

/// Where and how the shell reaches the authorization service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceClientConfig {
    pub address: String,
    pub port: u16,
    pub connection_timeout: Duration,
}

impl Default for ServiceClientConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_RPC_ADDRESS.to_string(),
            port: DEFAULT_RPC_PORT,
            connection_timeout: Duration::from_millis(DEFAULT_CONNECTION_TIMEOUT_MS),
        }
    }
}

impl ServiceClientConfig {
    /// Read client settings, applying defaults for absent keys.
    pub fn from_configuration(conf: &Configuration) -> Result<Self, AppError> {
        let defaults = Self::default();

        let address = conf.get_or(SERVER_RPC_ADDRESS, &defaults.address).trim().to_string();
        if address.is_empty() {
            return Err(AppError::config_error(format!(
                "{} must not be empty",
                SERVER_RPC_ADDRESS
            )));
        }

        let port = match conf.get(SERVER_RPC_PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config_error(format!(
                    "{} must be a port number, got '{}'",
                    SERVER_RPC_PORT, raw
                ))
            })?,
            None => defaults.port,
        };

        let connection_timeout = match conf.get(SERVER_RPC_CONNECTION_TIMEOUT) {
            Some(raw) => Duration::from_millis(raw.trim().parse::<u64>().map_err(|_| {
                AppError::config_error(format!(
                    "{} must be a duration in milliseconds, got '{}'",
                    SERVER_RPC_CONNECTION_TIMEOUT, raw
                ))
            })?),
            None => defaults.connection_timeout,
        };

        Ok(Self { address, port, connection_timeout })
    }

    /// `host:port` form used in diagnostics.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    /// Base URL the HTTP transport posts operations under.
    pub fn base_url(&self) -> Result<Url, AppError> {
        Url::parse(&format!("http://{}/", self.endpoint())).map_err(|e| {
            AppError::config_error(format!("Invalid service address '{}': {}", self.endpoint(), e))
        })
    }
}
