// ABOUTME: Connection configuration for the ACP client
// ABOUTME: Plain serde struct with defaults backed by the constants module

//! Client configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{network, timeouts};

/// Configuration of one ACP server connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Endpoint URL of the ACP gRPC server, e.g. `http://127.0.0.1:50555`.
    pub endpoint: String,
    /// Timeout for establishing the channel, in milliseconds.
    pub connect_timeout_ms: u64,
    /// User agent reported by the channel.
    pub user_agent: String,
    /// Whether files are transferred through the server's file transfer
    /// service. Enable this when the server does not share the local
    /// filesystem.
    pub auto_transfer: bool,
    /// Interval between health probes in `wait_for_server`, in
    /// milliseconds.
    pub health_probe_interval_ms: u64,
    /// Per-probe timeout in `wait_for_server`, in milliseconds.
    pub health_probe_timeout_ms: u64,
}

impl ClientConfig {
    /// Configuration for a server at the given endpoint, with local file
    /// transfer.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Enable remote file transfer.
    pub fn with_auto_transfer(mut self) -> Self {
        self.auto_transfer = true;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:50555".to_owned(),
            connect_timeout_ms: timeouts::DEFAULT_CONNECT_TIMEOUT.as_millis() as u64,
            user_agent: network::USER_AGENT.to_owned(),
            auto_transfer: false,
            health_probe_interval_ms: timeouts::DEFAULT_HEALTH_PROBE_INTERVAL.as_millis() as u64,
            health_probe_timeout_ms: timeouts::DEFAULT_HEALTH_PROBE_TIMEOUT.as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(!config.auto_transfer);
        assert!(config.connect_timeout_ms > 0);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = ClientConfig::new("http://acp.example.com:50555").with_auto_transfer();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.endpoint, "http://acp.example.com:50555");
        assert!(parsed.auto_transfer);
    }
}
