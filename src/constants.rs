// ABOUTME: Constants and default values for the ACP client
// ABOUTME: Centralizes timeouts, transfer chunk sizes, and wire-level defaults

//! Constants and default values for the ACP client.

/// Default timeout values
pub mod timeouts {
    use std::time::Duration;

    /// Default timeout for establishing the gRPC channel
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default interval between health probes in `wait_for_server`
    pub const DEFAULT_HEALTH_PROBE_INTERVAL: Duration = Duration::from_millis(250);

    /// Default per-probe timeout in `wait_for_server`
    pub const DEFAULT_HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(2);
}

/// File transfer tuning
pub mod transfer {
    /// Chunk size used when streaming file contents to or from the server
    pub const DEFAULT_CHUNK_SIZE: usize = 1 << 20;

    /// Directory (relative to the server working directory) used for
    /// server-side export targets of the remote transfer strategy
    pub const REMOTE_EXPORT_DIR: &str = "exports";
}

/// Wire-level defaults
pub mod network {
    /// User agent reported by the client channel
    pub const USER_AGENT: &str = concat!("acp-client/", env!("CARGO_PKG_VERSION"));
}
