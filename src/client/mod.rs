// ABOUTME: Top-level client connecting to an ACP server
// ABOUTME: Negotiates the server version and selects the file transfer strategy

//! The ACP client.
//!
//! [`Client::connect`] establishes the channel, queries the control
//! service for the server version, and selects the file transfer strategy.
//! Every object loaded or created through the client adopts this
//! connection.

pub mod config;

pub use config::ClientConfig;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use semver::Version;
use tonic::transport::{Channel, Endpoint};

use crate::api::base::Empty;
use crate::api::control::ServerInfoReply;
use crate::error::{AcpError, Result};
use crate::filetransfer::{FileTransferClient, FileTransferHandler};
use crate::objects::enums::{FeFormat, IgnorableEntity, UnitSystemType};
use crate::objects::Model;
use crate::rpc::ServiceClient;
use crate::tree::base::ServerWrapper;
use crate::tree::Collection;

/// Fully qualified name of the control service.
pub const CONTROL_SERVICE_NAME: &str = "acp.api.v0.control.ControlService";

/// Options for importing a finite element model.
#[derive(Debug, Clone)]
pub struct FeImportOptions {
    pub format: FeFormat,
    pub ignored_entities: Vec<IgnorableEntity>,
    pub convert_section_data: bool,
    pub unit_system: UnitSystemType,
}

impl Default for FeImportOptions {
    fn default() -> Self {
        Self {
            format: FeFormat::AnsysCdb,
            ignored_entities: Vec::new(),
            convert_section_data: false,
            unit_system: UnitSystemType::Undefined,
        }
    }
}

/// Connection to one ACP server.
#[derive(Clone, Debug)]
pub struct Client {
    config: ClientConfig,
    server: ServerWrapper,
}

impl Client {
    /// Connect to the server, negotiate its version and select the file
    /// transfer strategy.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let channel = Self::open_channel(&config).await?;
        let info = Self::query_server_info(&channel, config.health_probe_timeout_ms).await?;
        let version = Version::parse(&info.version).map_err(|err| {
            AcpError::runtime(format!(
                "Cannot parse server version '{}': {err}",
                info.version
            ))
        })?;
        tracing::info!(
            endpoint = %config.endpoint,
            version = %version,
            auto_transfer = config.auto_transfer,
            "connected to ACP server"
        );
        let transfer = if config.auto_transfer {
            FileTransferHandler::Remote(FileTransferClient::new(channel.clone()))
        } else {
            FileTransferHandler::Local
        };
        let server = ServerWrapper::new(channel, version, Arc::new(transfer));
        Ok(Self { config, server })
    }

    async fn open_channel(config: &ClientConfig) -> Result<Channel> {
        let endpoint = Endpoint::from_shared(config.endpoint.clone())
            .map_err(|err| {
                AcpError::invalid_argument(format!(
                    "Invalid endpoint '{}': {err}",
                    config.endpoint
                ))
            })?
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .user_agent(config.user_agent.clone())
            .map_err(|err| {
                AcpError::invalid_argument(format!("Invalid user agent: {err}"))
            })?;
        endpoint.connect().await.map_err(|err| {
            AcpError::unavailable(format!(
                "Cannot connect to '{}': {err}",
                config.endpoint
            ))
        })
    }

    async fn query_server_info(
        channel: &Channel,
        probe_timeout_ms: u64,
    ) -> Result<ServerInfoReply> {
        let client = ServiceClient::new(channel.clone(), CONTROL_SERVICE_NAME);
        let probe = client.unary::<Empty, ServerInfoReply>("GetServerInfo", Empty {});
        match tokio::time::timeout(Duration::from_millis(probe_timeout_ms), probe).await {
            Ok(reply) => reply.map_err(AcpError::from),
            Err(_) => Err(AcpError::timeout(
                "The server did not answer the server info probe.",
            )),
        }
    }

    /// Wait until the server answers health probes, or fail after
    /// `timeout`.
    pub async fn wait_for_server(&self, timeout: Duration) -> Result<()> {
        let deadline = tokio::time::Instant::now() + timeout;
        let interval = Duration::from_millis(self.config.health_probe_interval_ms);
        let mut last_error = None;
        while tokio::time::Instant::now() < deadline {
            match Self::query_server_info(
                &self.server.channel(),
                self.config.health_probe_timeout_ms,
            )
            .await
            {
                Ok(_) => return Ok(()),
                Err(err) => last_error = Some(err),
            }
            tokio::time::sleep(interval).await;
        }
        Err(AcpError::timeout(format!(
            "The server did not respond within {} seconds. Last error: {}",
            timeout.as_secs_f64(),
            last_error.map_or_else(|| "none".to_owned(), |err| err.to_string())
        )))
    }

    /// The server version negotiated at connect time.
    pub fn server_version(&self) -> &Version {
        self.server.version()
    }

    /// The models currently loaded on the server.
    pub fn models(&self) -> Collection<Model> {
        Collection::new(self.server.clone(), "models".to_owned())
    }

    /// Load a model from a native (`.acph5`) file. The path may be local;
    /// it is uploaded first when the server is remote.
    pub async fn import_model(&self, name: Option<&str>, path: impl AsRef<Path>) -> Result<Model> {
        let remote_path = self
            .server
            .transfer()
            .upload_file_if_autotransfer(path.as_ref())
            .await?;
        let model = Model::load_from_file(&self.server, &remote_path).await?;
        if let Some(name) = name {
            model.set_name(name).await?;
        }
        Ok(model)
    }

    /// Load a model from a finite element input file.
    pub async fn import_fe_model(
        &self,
        name: Option<&str>,
        path: impl AsRef<Path>,
        options: FeImportOptions,
    ) -> Result<Model> {
        let remote_path = self
            .server
            .transfer()
            .upload_file_if_autotransfer(path.as_ref())
            .await?;
        let model = Model::load_from_fe_file(
            &self.server,
            &remote_path,
            options.format,
            &options.ignored_entities,
            options.convert_section_data,
            options.unit_system,
        )
        .await?;
        if let Some(name) = name {
            model.set_name(name).await?;
        }
        Ok(model)
    }

    /// Close all models loaded on the server, without saving them.
    pub async fn clear(&self) -> Result<()> {
        self.models().clear().await
    }

    /// Upload a file into the server working directory. With local file
    /// transfer this is the identity.
    pub async fn upload_file(&self, path: impl AsRef<Path>) -> Result<String> {
        self.server
            .transfer()
            .upload_file_if_autotransfer(path.as_ref())
            .await
    }

    /// Download a server-visible file to a local path. With local file
    /// transfer this is a no-op.
    pub async fn download_file(
        &self,
        remote_path: &str,
        local_path: impl AsRef<Path>,
    ) -> Result<()> {
        self.server
            .transfer()
            .download_file_if_autotransfer(remote_path, local_path.as_ref())
            .await
    }
}
