// ABOUTME: Local and remote file transfer strategies for path-taking operations
// ABOUTME: Streams file contents through the server's file transfer service when remote

//! File transfer orchestration.
//!
//! Operations that consume or produce files accept paths as if they were
//! local. When the server runs remotely, inputs are staged through the
//! file transfer service before the operation and outputs are downloaded
//! afterwards; when the server shares the local filesystem, paths pass
//! through unchanged. The strategy is selected once per connection and
//! carried on the server wrapper of every stored object.

use std::future::Future;
use std::path::Path;

use tokio::io::AsyncWriteExt;
use tokio_stream::wrappers::ReceiverStream;
use tonic::transport::Channel;

use crate::api::file_transfer::{
    download_reply, upload_request, DownloadReply, DownloadRequest, UploadMeta, UploadReply,
    UploadRequest,
};
use crate::constants::transfer::{DEFAULT_CHUNK_SIZE, REMOTE_EXPORT_DIR};
use crate::error::{AcpError, Result};
use crate::rpc::ServiceClient;

/// Fully qualified name of the file transfer service.
pub const SERVICE_NAME: &str = "acp.api.v0.file_transfer.FileTransferService";

pub(crate) fn path_to_str(path: &Path) -> Result<String> {
    path.to_str()
        .map(str::to_owned)
        .ok_or_else(|| AcpError::invalid_argument(format!("Path is not valid UTF-8: {path:?}")))
}

/// Streaming client for the server's file transfer service.
#[derive(Clone, Debug)]
pub struct FileTransferClient {
    client: ServiceClient,
}

impl FileTransferClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: ServiceClient::new(channel, SERVICE_NAME),
        }
    }

    /// Upload a local file into the server working directory. Returns the
    /// server-visible path of the uploaded file.
    pub async fn upload_file(&self, local_path: &Path, remote_filename: &str) -> Result<String> {
        let content = tokio::fs::read(local_path).await.map_err(|err| {
            AcpError::runtime(format!("Failed to read '{}': {err}", local_path.display()))
        })?;
        tracing::debug!(
            path = %local_path.display(),
            size = content.len(),
            "uploading file to server"
        );

        let meta = UploadMeta {
            filename: remote_filename.to_owned(),
            size: content.len() as i64,
        };
        let (sender, receiver) = tokio::sync::mpsc::channel(4);
        tokio::spawn(async move {
            if sender
                .send(UploadRequest {
                    step: Some(upload_request::Step::Meta(meta)),
                })
                .await
                .is_err()
            {
                return;
            }
            for chunk in content.chunks(DEFAULT_CHUNK_SIZE) {
                let request = UploadRequest {
                    step: Some(upload_request::Step::Chunk(chunk.to_vec())),
                };
                if sender.send(request).await.is_err() {
                    return;
                }
            }
        });

        let reply: UploadReply = self
            .client
            .client_streaming("Upload", ReceiverStream::new(receiver))
            .await
            .map_err(AcpError::from)?;
        Ok(reply.remote_path)
    }

    /// Download a server-visible file to a local path.
    pub async fn download_file(&self, remote_path: &str, local_path: &Path) -> Result<()> {
        tracing::debug!(
            remote = remote_path,
            local = %local_path.display(),
            "downloading file from server"
        );
        let mut stream = self
            .client
            .server_streaming::<_, DownloadReply>(
                "Download",
                DownloadRequest {
                    remote_path: remote_path.to_owned(),
                },
            )
            .await
            .map_err(AcpError::from)?;

        let mut file = tokio::fs::File::create(local_path).await.map_err(|err| {
            AcpError::runtime(format!("Failed to create '{}': {err}", local_path.display()))
        })?;
        while let Some(reply) = stream.message().await.map_err(AcpError::from)? {
            match reply.step {
                Some(download_reply::Step::Chunk(chunk)) => {
                    file.write_all(&chunk).await.map_err(|err| {
                        AcpError::runtime(format!(
                            "Failed to write '{}': {err}",
                            local_path.display()
                        ))
                    })?;
                }
                Some(download_reply::Step::Meta(_)) | None => {}
            }
        }
        file.flush().await.map_err(|err| {
            AcpError::runtime(format!("Failed to write '{}': {err}", local_path.display()))
        })?;
        Ok(())
    }
}

/// File transfer strategy of one server connection.
#[derive(Clone, Debug)]
pub enum FileTransferHandler {
    /// The server shares the local filesystem; paths pass through unchanged.
    Local,
    /// Files are staged through the server's file transfer service.
    Remote(FileTransferClient),
}

impl FileTransferHandler {
    /// Make a user-supplied input path visible to the server, uploading it
    /// first when the server is remote.
    pub async fn upload_file_if_autotransfer(&self, local_path: &Path) -> Result<String> {
        match self {
            Self::Local => path_to_str(local_path),
            Self::Remote(client) => {
                let filename = local_path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .ok_or_else(|| {
                        AcpError::invalid_argument(format!(
                            "Path has no valid file name: {local_path:?}"
                        ))
                    })?;
                client.upload_file(local_path, filename).await
            }
        }
    }

    /// The server-visible path an export operation should write to so that
    /// its output ends up at `local_path`.
    pub fn to_export_path(&self, local_path: &Path) -> Result<String> {
        match self {
            Self::Local => path_to_str(local_path),
            Self::Remote(_) => {
                let filename = local_path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("export");
                Ok(format!(
                    "{REMOTE_EXPORT_DIR}/{}-{filename}",
                    uuid::Uuid::new_v4()
                ))
            }
        }
    }

    /// Bring an exported file back to the user-supplied path, downloading it
    /// when the server is remote.
    pub async fn download_file_if_autotransfer(
        &self,
        export_path: &str,
        local_path: &Path,
    ) -> Result<()> {
        match self {
            Self::Local => Ok(()),
            Self::Remote(client) => client.download_file(export_path, local_path).await,
        }
    }
}

/// Run `body` with a server-visible export path, then bring the result back
/// to `local_path`.
///
/// The download is attempted on every exit path. If the body failed, its
/// error wins and a download failure is only logged.
pub(crate) async fn with_export_path<F, Fut, T>(
    handler: &FileTransferHandler,
    local_path: &Path,
    body: F,
) -> Result<T>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let export_path = handler.to_export_path(local_path)?;
    let result = body(export_path.clone()).await;
    let downloaded = handler
        .download_file_if_autotransfer(&export_path, local_path)
        .await;
    match (result, downloaded) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(download_err)) => Err(download_err),
        (Err(body_err), Ok(())) => Err(body_err),
        (Err(body_err), Err(download_err)) => {
            tracing::warn!(error = %download_err, "download after failed export also failed");
            Err(body_err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_export_path_is_identity() {
        let handler = FileTransferHandler::Local;
        let path = Path::new("/tmp/out.h5");
        assert_eq!(handler.to_export_path(path).unwrap(), "/tmp/out.h5");
    }

    #[tokio::test]
    async fn test_local_upload_is_identity() {
        let handler = FileTransferHandler::Local;
        let path = Path::new("/tmp/in.step");
        assert_eq!(
            handler.upload_file_if_autotransfer(path).await.unwrap(),
            "/tmp/in.step"
        );
    }

    #[tokio::test]
    async fn test_with_export_path_local_passes_value_through() {
        let handler = FileTransferHandler::Local;
        let value = with_export_path(&handler, Path::new("/tmp/out.h5"), |export| async move {
            assert_eq!(export, "/tmp/out.h5");
            Ok(42)
        })
        .await
        .unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_with_export_path_propagates_body_error() {
        let handler = FileTransferHandler::Local;
        let result: Result<()> =
            with_export_path(&handler, Path::new("/tmp/out.h5"), |_| async move {
                Err(AcpError::runtime("export failed"))
            })
            .await;
        assert!(result.is_err());
    }
}
