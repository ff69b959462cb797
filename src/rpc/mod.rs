// ABOUTME: Generic gRPC stubs for resource services
// ABOUTME: Issues unary and streaming calls through tonic the way generated clients do

//! gRPC stubs.
//!
//! Every ACP resource service exposes the same method surface
//! (`Get`/`Put`/`Delete`/`List`, optionally `Create`, plus service-specific
//! endpoints), so the client side is implemented once: [`ServiceClient`]
//! performs raw unary and streaming calls against a named service, and
//! [`ResourceStub`] layers the typed resource envelopes on top. The call
//! discipline (ready, codec, path, call) matches tonic-generated client
//! code.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use http::uri::PathAndQuery;
use prost::Message;
use tonic::codec::Streaming;
use tonic::transport::Channel;
use tonic::{Request, Response, Status};
use tonic_prost::ProstCodec;

use crate::api::base::{DeleteRequest, Empty, GetRequest, ListRequest};
use crate::api::generic::{CreateRequest, ListReply, ObjectInfo};

/// Untyped client for one named gRPC service.
#[derive(Clone)]
pub struct ServiceClient {
    inner: tonic::client::Grpc<Channel>,
    service: &'static str,
}

impl fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service", &self.service)
            .finish()
    }
}

impl ServiceClient {
    pub fn new(channel: Channel, service: &'static str) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
            service,
        }
    }

    /// The fully qualified service name this client talks to.
    pub fn service(&self) -> &'static str {
        self.service
    }

    fn path(&self, method: &str) -> Result<PathAndQuery, Status> {
        PathAndQuery::from_str(&format!("/{}/{}", self.service, method))
            .map_err(|err| Status::internal(format!("invalid method path: {err}")))
    }

    async fn ready(&self) -> Result<tonic::client::Grpc<Channel>, Status> {
        let mut grpc = self.inner.clone();
        grpc.ready()
            .await
            .map_err(|err| Status::unknown(format!("Service was not ready: {err}")))?;
        Ok(grpc)
    }

    /// Issue a unary call.
    pub async fn unary<Req, Res>(&self, method: &str, request: Req) -> Result<Res, Status>
    where
        Req: Message + Send + Sync + 'static,
        Res: Message + Default + Send + Sync + 'static,
    {
        let mut grpc = self.ready().await?;
        let path = self.path(method)?;
        tracing::trace!(service = self.service, method, "issuing unary call");
        let codec: ProstCodec<Req, Res> = ProstCodec::default();
        grpc.unary(Request::new(request), path, codec)
            .await
            .map(Response::into_inner)
    }

    /// Issue a server-streaming call.
    pub async fn server_streaming<Req, Res>(
        &self,
        method: &str,
        request: Req,
    ) -> Result<Streaming<Res>, Status>
    where
        Req: Message + Send + Sync + 'static,
        Res: Message + Default + Send + Sync + 'static,
    {
        let mut grpc = self.ready().await?;
        let path = self.path(method)?;
        tracing::trace!(service = self.service, method, "issuing server-streaming call");
        let codec: ProstCodec<Req, Res> = ProstCodec::default();
        grpc.server_streaming(Request::new(request), path, codec)
            .await
            .map(Response::into_inner)
    }

    /// Issue a client-streaming call.
    pub async fn client_streaming<S, Req, Res>(
        &self,
        method: &str,
        request: S,
    ) -> Result<Res, Status>
    where
        S: futures_util::Stream<Item = Req> + Send + 'static,
        Req: Message + Send + Sync + 'static,
        Res: Message + Default + Send + Sync + 'static,
    {
        let mut grpc = self.ready().await?;
        let path = self.path(method)?;
        tracing::trace!(service = self.service, method, "issuing client-streaming call");
        let codec: ProstCodec<Req, Res> = ProstCodec::default();
        grpc.client_streaming(Request::new(request), path, codec)
            .await
            .map(Response::into_inner)
    }
}

/// Typed stub for one resource service.
///
/// `P` is the properties payload of the resource. The stub is cheap to
/// clone; clones share the underlying channel.
#[derive(Clone)]
pub struct ResourceStub<P> {
    client: ServiceClient,
    _properties: PhantomData<fn() -> P>,
}

impl<P> fmt::Debug for ResourceStub<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceStub")
            .field("service", &self.client.service())
            .finish()
    }
}

impl<P> ResourceStub<P>
where
    P: Message + Default + Clone + Send + Sync + 'static,
{
    pub fn new(channel: Channel, service: &'static str) -> Self {
        Self {
            client: ServiceClient::new(channel, service),
            _properties: PhantomData,
        }
    }

    /// The untyped client, for service-specific endpoints.
    pub fn client(&self) -> &ServiceClient {
        &self.client
    }

    pub async fn get(&self, request: GetRequest) -> Result<ObjectInfo<P>, Status> {
        self.client.unary("Get", request).await
    }

    pub async fn put(&self, request: ObjectInfo<P>) -> Result<ObjectInfo<P>, Status> {
        self.client.unary("Put", request).await
    }

    pub async fn delete(&self, request: DeleteRequest) -> Result<Empty, Status> {
        self.client.unary("Delete", request).await
    }

    pub async fn list(&self, request: ListRequest) -> Result<ListReply<P>, Status> {
        self.client.unary("List", request).await
    }

    pub async fn create(&self, request: CreateRequest<P>) -> Result<ObjectInfo<P>, Status> {
        self.client.unary("Create", request).await
    }
}
