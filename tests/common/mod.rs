// ABOUTME: Common test utilities: an in-process mock ACP server
// ABOUTME: Real tonic services over a local listener, backed by an in-memory store

//! Mock ACP server for integration tests.
//!
//! The mock serves the same gRPC surface the client talks to: per-resource
//! CRUD services, the model load/save endpoints, the control, mesh query
//! and file transfer services. State lives in an in-memory store with the
//! server-side versioning rules (stale writes are rejected with
//! FAILED_PRECONDITION). File endpoints resolve relative paths against a
//! per-server temporary working directory.

#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use prost::Message;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codec::{Codec, DecodeBuf, Decoder, EncodeBuf, Encoder};
use tonic::server::{ClientStreamingService, NamedService, ServerStreamingService, UnaryService};
use tonic::transport::Server;
use tonic::{Code, Request, Response, Status, Streaming};

use acp_client::api::base::{DeleteRequest, Empty, GetRequest, ListRequest};
use acp_client::api::generic::{CreateRequest, ListReply, ObjectInfo};
use acp_client::api::{
    base::BasicInfo, cad_geometry, control, file_transfer, mesh_query, model,
};
use acp_client::tree::TreeObject;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;
type UnaryFn = Arc<dyn Fn(Vec<u8>) -> BoxFuture<Result<Vec<u8>, Status>> + Send + Sync>;
type ClientStreamingFn =
    Arc<dyn Fn(Streaming<Vec<u8>>) -> BoxFuture<Result<Vec<u8>, Status>> + Send + Sync>;
type ServerStreamingFn =
    Arc<dyn Fn(Vec<u8>) -> BoxFuture<Result<Vec<Vec<u8>>, Status>> + Send + Sync>;

#[derive(Clone)]
enum Handler {
    Unary(UnaryFn),
    ClientStreaming(ClientStreamingFn),
    ServerStreaming(ServerStreamingFn),
}

// ---------------------------------------------------------------------------
// In-memory store

#[derive(Clone, Debug)]
struct StoredObject {
    path: String,
    id: String,
    name: String,
    version: i64,
    properties: Vec<u8>,
}

#[derive(Default)]
struct StoreState {
    objects: Vec<StoredObject>,
}

#[derive(Clone)]
pub struct Store {
    state: Arc<Mutex<StoreState>>,
    workdir: Arc<tempfile::TempDir>,
}

fn slugify(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if slug.is_empty() {
        "object".to_owned()
    } else {
        slug
    }
}

impl Store {
    fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState::default())),
            workdir: Arc::new(tempfile::tempdir().expect("failed to create mock workdir")),
        }
    }

    pub fn workdir(&self) -> &Path {
        self.workdir.path()
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.workdir.path().join(candidate)
        }
    }

    fn get(&self, path: &str) -> Result<StoredObject, Status> {
        let state = self.state.lock().unwrap();
        state
            .objects
            .iter()
            .find(|object| object.path == path)
            .cloned()
            .ok_or_else(|| Status::not_found(format!("No object with path '{path}'.")))
    }

    fn list(&self, collection_path: &str) -> Vec<StoredObject> {
        let prefix = format!("{collection_path}/");
        let state = self.state.lock().unwrap();
        state
            .objects
            .iter()
            .filter(|object| {
                object.path.starts_with(&prefix) && !object.path[prefix.len()..].contains('/')
            })
            .cloned()
            .collect()
    }

    fn create(
        &self,
        collection_path: &str,
        name: &str,
        properties: Vec<u8>,
    ) -> Result<StoredObject, Status> {
        if collection_path.is_empty() {
            return Err(Status::invalid_argument("Empty collection path."));
        }
        let mut state = self.state.lock().unwrap();
        let base = slugify(name);
        let mut id = base.clone();
        let mut suffix = 2;
        let prefix = format!("{collection_path}/");
        while state
            .objects
            .iter()
            .any(|object| object.path == format!("{prefix}{id}"))
        {
            id = format!("{base}_{suffix}");
            suffix += 1;
        }
        let object = StoredObject {
            path: format!("{prefix}{id}"),
            id,
            name: name.to_owned(),
            version: 1,
            properties,
        };
        state.objects.push(object.clone());
        Ok(object)
    }

    fn put(
        &self,
        path: &str,
        version: i64,
        name: String,
        properties: Vec<u8>,
    ) -> Result<StoredObject, Status> {
        let mut state = self.state.lock().unwrap();
        let object = state
            .objects
            .iter_mut()
            .find(|object| object.path == path)
            .ok_or_else(|| Status::not_found(format!("No object with path '{path}'.")))?;
        if object.version != version {
            return Err(Status::failed_precondition(format!(
                "Version mismatch for '{path}': expected {}, got {version}.",
                object.version
            )));
        }
        object.version += 1;
        object.name = name;
        object.properties = properties;
        Ok(object.clone())
    }

    fn delete(&self, path: &str, version: i64) -> Result<(), Status> {
        let mut state = self.state.lock().unwrap();
        let index = state
            .objects
            .iter()
            .position(|object| object.path == path)
            .ok_or_else(|| Status::not_found(format!("No object with path '{path}'.")))?;
        if state.objects[index].version != version {
            return Err(Status::failed_precondition(format!(
                "Version mismatch for '{path}': expected {}, got {version}.",
                state.objects[index].version
            )));
        }
        // Delete the subtree along with the object itself.
        let subtree_prefix = format!("{path}/");
        state
            .objects
            .retain(|object| object.path != path && !object.path.starts_with(&subtree_prefix));
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        let state = self.state.lock().unwrap();
        state.objects.iter().any(|object| object.path == path)
    }
}

fn basic_info(object: &StoredObject) -> BasicInfo {
    BasicInfo {
        resource_path: object.path.clone(),
        id: object.id.clone(),
        name: object.name.clone(),
        version: object.version,
    }
}

fn object_info<P: Message + Default>(object: &StoredObject) -> Result<ObjectInfo<P>, Status> {
    let properties = P::decode(object.properties.as_slice())
        .map_err(|err| Status::internal(format!("Corrupt stored properties: {err}")))?;
    Ok(ObjectInfo {
        info: Some(basic_info(object)),
        properties: Some(properties),
    })
}

// ---------------------------------------------------------------------------
// Router

#[derive(Clone, Default)]
pub struct MockRouter {
    handlers: HashMap<String, Handler>,
}

fn unary_handler<Req, Res, F, Fut>(f: F) -> Handler
where
    Req: Message + Default + 'static,
    Res: Message + 'static,
    F: Fn(Req) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Res, Status>> + Send + 'static,
{
    Handler::Unary(Arc::new(move |bytes| {
        let decoded = Req::decode(bytes.as_slice());
        let fut: BoxFuture<Result<Vec<u8>, Status>> = match decoded {
            Ok(request) => {
                let fut = f(request);
                Box::pin(async move { fut.await.map(|reply| reply.encode_to_vec()) })
            }
            Err(err) => Box::pin(std::future::ready(Err(Status::internal(format!(
                "Cannot decode request: {err}"
            ))))),
        };
        fut
    }))
}

impl MockRouter {
    fn add_unary<Req, Res, F, Fut>(&mut self, service: &str, method: &str, f: F)
    where
        Req: Message + Default + 'static,
        Res: Message + 'static,
        F: Fn(Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Res, Status>> + Send + 'static,
    {
        self.handlers
            .insert(format!("/{service}/{method}"), unary_handler(f));
    }

    fn register_resource<R: TreeObject>(&mut self, store: &Store) {
        let service = R::SERVICE_NAME;

        let get_store = store.clone();
        self.add_unary(service, "Get", move |request: GetRequest| {
            let store = get_store.clone();
            async move {
                let object = store.get(&request.resource_path)?;
                object_info::<R::Properties>(&object)
            }
        });

        let put_store = store.clone();
        self.add_unary(service, "Put", move |request: ObjectInfo<R::Properties>| {
            let store = put_store.clone();
            async move {
                let info = request
                    .info
                    .ok_or_else(|| Status::invalid_argument("Missing object info."))?;
                let properties = request.properties.unwrap_or_default().encode_to_vec();
                let object =
                    store.put(&info.resource_path, info.version, info.name, properties)?;
                object_info::<R::Properties>(&object)
            }
        });

        let delete_store = store.clone();
        self.add_unary(service, "Delete", move |request: DeleteRequest| {
            let store = delete_store.clone();
            async move {
                store.delete(&request.resource_path, request.version)?;
                Ok(Empty {})
            }
        });

        let list_store = store.clone();
        self.add_unary(service, "List", move |request: ListRequest| {
            let store = list_store.clone();
            async move {
                let objects = store
                    .list(&request.collection_path)
                    .iter()
                    .map(object_info::<R::Properties>)
                    .collect::<Result<Vec<_>, Status>>()?;
                Ok(ListReply { objects })
            }
        });

        let create_store = store.clone();
        self.add_unary(
            service,
            "Create",
            move |request: CreateRequest<R::Properties>| {
                let store = create_store.clone();
                async move {
                    let properties = request.properties.unwrap_or_default().encode_to_vec();
                    let object =
                        store.create(&request.collection_path, &request.name, properties)?;
                    object_info::<R::Properties>(&object)
                }
            },
        );
    }

    async fn route(
        self,
        request: http::Request<tonic::body::Body>,
    ) -> http::Response<tonic::body::Body> {
        let path = request.uri().path().to_owned();
        match self.handlers.get(&path) {
            Some(Handler::Unary(handler)) => {
                let mut grpc = tonic::server::Grpc::new(RawCodec);
                grpc.unary(UnarySvc(handler.clone()), request).await
            }
            Some(Handler::ClientStreaming(handler)) => {
                let mut grpc = tonic::server::Grpc::new(RawCodec);
                grpc.client_streaming(ClientStreamingSvc(handler.clone()), request)
                    .await
            }
            Some(Handler::ServerStreaming(handler)) => {
                let mut grpc = tonic::server::Grpc::new(RawCodec);
                grpc.server_streaming(ServerStreamingSvc(handler.clone()), request)
                    .await
            }
            None => http::Response::builder()
                .status(200)
                .header("grpc-status", (Code::Unimplemented as i32).to_string())
                .header("content-type", "application/grpc")
                .body(tonic::body::Body::default())
                .expect("failed to build unimplemented response"),
        }
    }
}

struct UnarySvc(UnaryFn);

impl UnaryService<Vec<u8>> for UnarySvc {
    type Response = Vec<u8>;
    type Future = BoxFuture<Result<Response<Vec<u8>>, Status>>;

    fn call(&mut self, request: Request<Vec<u8>>) -> Self::Future {
        let handler = self.0.clone();
        Box::pin(async move { handler(request.into_inner()).await.map(Response::new) })
    }
}

struct ClientStreamingSvc(ClientStreamingFn);

impl ClientStreamingService<Vec<u8>> for ClientStreamingSvc {
    type Response = Vec<u8>;
    type Future = BoxFuture<Result<Response<Vec<u8>>, Status>>;

    fn call(&mut self, request: Request<Streaming<Vec<u8>>>) -> Self::Future {
        let handler = self.0.clone();
        Box::pin(async move { handler(request.into_inner()).await.map(Response::new) })
    }
}

struct ServerStreamingSvc(ServerStreamingFn);

impl ServerStreamingService<Vec<u8>> for ServerStreamingSvc {
    type Response = Vec<u8>;
    type ResponseStream =
        Pin<Box<dyn futures_util::Stream<Item = Result<Vec<u8>, Status>> + Send>>;
    type Future = BoxFuture<Result<Response<Self::ResponseStream>, Status>>;

    fn call(&mut self, request: Request<Vec<u8>>) -> Self::Future {
        let handler = self.0.clone();
        Box::pin(async move {
            let chunks = handler(request.into_inner()).await?;
            let stream = tokio_stream::iter(chunks.into_iter().map(Ok));
            Ok(Response::new(
                Box::pin(stream) as Self::ResponseStream
            ))
        })
    }
}

// ---------------------------------------------------------------------------
// Raw pass-through codec

#[derive(Debug, Clone, Default)]
struct RawCodec;

struct RawEncoder;
struct RawDecoder;

impl Codec for RawCodec {
    type Encode = Vec<u8>;
    type Decode = Vec<u8>;
    type Encoder = RawEncoder;
    type Decoder = RawDecoder;

    fn encoder(&mut self) -> Self::Encoder {
        RawEncoder
    }

    fn decoder(&mut self) -> Self::Decoder {
        RawDecoder
    }
}

impl Encoder for RawEncoder {
    type Item = Vec<u8>;
    type Error = Status;

    fn encode(&mut self, item: Vec<u8>, dst: &mut EncodeBuf<'_>) -> Result<(), Status> {
        use prost::bytes::BufMut;
        dst.put_slice(&item);
        Ok(())
    }
}

impl Decoder for RawDecoder {
    type Item = Vec<u8>;
    type Error = Status;

    fn decode(&mut self, src: &mut DecodeBuf<'_>) -> Result<Option<Vec<u8>>, Status> {
        use prost::bytes::Buf;
        let mut out = vec![0u8; src.remaining()];
        src.copy_to_slice(&mut out);
        Ok(Some(out))
    }
}

// ---------------------------------------------------------------------------
// Named service wrappers

#[derive(Clone)]
pub struct ResourceSvc<R> {
    router: MockRouter,
    _resource: std::marker::PhantomData<fn() -> R>,
}

impl<R> ResourceSvc<R> {
    fn new(router: MockRouter) -> Self {
        Self {
            router,
            _resource: std::marker::PhantomData,
        }
    }
}

impl<R: TreeObject> NamedService for ResourceSvc<R> {
    const NAME: &'static str = R::SERVICE_NAME;
}

impl<R: TreeObject> tonic::codegen::Service<http::Request<tonic::body::Body>>
    for ResourceSvc<R>
{
    type Response = http::Response<tonic::body::Body>;
    type Error = std::convert::Infallible;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: http::Request<tonic::body::Body>) -> Self::Future {
        let router = self.router.clone();
        Box::pin(async move { Ok(router.route(request).await) })
    }
}

macro_rules! named_mock_service {
    ($name:ident, $service:literal) => {
        #[derive(Clone)]
        pub struct $name {
            router: MockRouter,
        }

        impl $name {
            fn new(router: MockRouter) -> Self {
                Self { router }
            }
        }

        impl NamedService for $name {
            const NAME: &'static str = $service;
        }

        impl tonic::codegen::Service<http::Request<tonic::body::Body>> for $name {
            type Response = http::Response<tonic::body::Body>;
            type Error = std::convert::Infallible;
            type Future = BoxFuture<Result<Self::Response, Self::Error>>;

            fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
                Poll::Ready(Ok(()))
            }

            fn call(&mut self, request: http::Request<tonic::body::Body>) -> Self::Future {
                let router = self.router.clone();
                Box::pin(async move { Ok(router.route(request).await) })
            }
        }
    };
}

named_mock_service!(ControlSvc, "acp.api.v0.control.ControlService");
named_mock_service!(MeshQuerySvc, "acp.api.v0.mesh_query.MeshQueryService");
named_mock_service!(FileTransferSvc, "acp.api.v0.file_transfer.FileTransferService");

// ---------------------------------------------------------------------------
// Extra endpoint registration

const VECTOR_FIELDS: &[&str] = &[
    "normal",
    "orientation",
    "reference_direction",
    "fiber_direction",
    "draped_fiber_direction",
    "cog",
    "ply_offset",
];

fn register_control(router: &mut MockRouter, version: &str) {
    let version = version.to_owned();
    router.add_unary(
        "acp.api.v0.control.ControlService",
        "GetServerInfo",
        move |_request: Empty| {
            let version = version.clone();
            async move {
                Ok(control::ServerInfoReply {
                    version,
                    build_info: "mock ACP server".to_owned(),
                })
            }
        },
    );
}

fn register_model_endpoints(router: &mut MockRouter, store: &Store) {
    let service = "acp.api.v0.model.ObjectService";

    let load_store = store.clone();
    router.add_unary(
        service,
        "LoadFromFile",
        move |request: model::LoadFromFileRequest| {
            let store = load_store.clone();
            async move {
                let resolved = store.resolve_path(&request.path);
                if !resolved.exists() {
                    return Err(Status::not_found(format!(
                        "No such file: '{}'.",
                        request.path
                    )));
                }
                let name = resolved
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or("Model")
                    .to_owned();
                let properties = default_model_properties().encode_to_vec();
                let object = store.create("models", &name, properties)?;
                object_info::<model::Properties>(&object)
            }
        },
    );

    let load_fe_store = store.clone();
    router.add_unary(
        service,
        "LoadFromFEFile",
        move |request: model::LoadFromFeFileRequest| {
            let store = load_fe_store.clone();
            async move {
                let resolved = store.resolve_path(&request.path);
                if !resolved.exists() {
                    return Err(Status::not_found(format!(
                        "No such file: '{}'.",
                        request.path
                    )));
                }
                let name = resolved
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or("Model")
                    .to_owned();
                let mut properties = default_model_properties();
                properties.unit_system = request.unit_system;
                let object = store.create("models", &name, properties.encode_to_vec())?;
                object_info::<model::Properties>(&object)
            }
        },
    );

    let update_store = store.clone();
    router.add_unary(service, "Update", move |request: model::UpdateRequest| {
        let store = update_store.clone();
        async move {
            if !store.exists(&request.resource_path) {
                return Err(Status::not_found(format!(
                    "No object with path '{}'.",
                    request.resource_path
                )));
            }
            Ok(Empty {})
        }
    });

    let save_store = store.clone();
    router.add_unary(service, "SaveToFile", move |request: model::SaveToFileRequest| {
        let store = save_store.clone();
        async move {
            store.get(&request.resource_path)?;
            write_export(&store, &request.path, "ACP model export")?;
            Ok(Empty {})
        }
    });

    let save_analysis_store = store.clone();
    router.add_unary(
        service,
        "SaveAnalysisModel",
        move |request: model::SaveAnalysisModelRequest| {
            let store = save_analysis_store.clone();
            async move {
                store.get(&request.resource_path)?;
                write_export(&store, &request.path, "ACP analysis model export")?;
                Ok(Empty {})
            }
        },
    );

    let save_defs_store = store.clone();
    router.add_unary(
        service,
        "SaveShellCompositeDefinitions",
        move |request: model::SaveShellCompositeDefinitionsRequest| {
            let store = save_defs_store.clone();
            async move {
                store.get(&request.resource_path)?;
                write_export(&store, &request.path, "ACP composite definitions export")?;
                Ok(Empty {})
            }
        },
    );
}

fn register_material_endpoints(router: &mut MockRouter, store: &Store) {
    let save_store = store.clone();
    router.add_unary(
        "acp.api.v0.material.ObjectService",
        "SaveToFile",
        move |request: acp_client::api::material::SaveToFileRequest| {
            let store = save_store.clone();
            async move {
                write_export(&store, &request.path, "ACP MatML export")?;
                Ok(Empty {})
            }
        },
    );
}

fn register_cad_geometry_endpoints(router: &mut MockRouter, store: &Store) {
    let service = "acp.api.v0.cad_geometry.ObjectService";

    let refresh_store = store.clone();
    router.add_unary(
        service,
        "Refresh",
        move |request: cad_geometry::RefreshRequest| {
            let store = refresh_store.clone();
            async move {
                let object = store.get(&request.resource_path)?;
                let resolved = store.resolve_path(&request.path);
                if !resolved.exists() {
                    return Err(Status::not_found(format!(
                        "No such file: '{}'.",
                        request.path
                    )));
                }
                let mut properties =
                    cad_geometry::Properties::decode(object.properties.as_slice())
                        .map_err(|err| Status::internal(err.to_string()))?;
                properties.external_path = request.path.clone();
                store.put(
                    &object.path,
                    object.version,
                    object.name.clone(),
                    properties.encode_to_vec(),
                )?;
                Ok(Empty {})
            }
        },
    );

    let mesh_store = store.clone();
    router.add_unary(service, "GetVisualizationMesh", move |request: GetRequest| {
        let store = mesh_store.clone();
        async move {
            store.get(&request.resource_path)?;
            Ok(cad_geometry::VisualizationMeshReply {
                vertices: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
                triangles: vec![0, 1, 2],
            })
        }
    });
}

fn register_solid_model_endpoints(router: &mut MockRouter, store: &Store) {
    let export_store = store.clone();
    router.add_unary(
        "acp.api.v0.solid_model.ObjectService",
        "Export",
        move |request: acp_client::api::solid_model::ExportRequest| {
            let store = export_store.clone();
            async move {
                store.get(&request.resource_path)?;
                write_export(&store, &request.path, "ACP solid model export")?;
                Ok(Empty {})
            }
        },
    );
}

fn register_mesh_query(router: &mut MockRouter, store: &Store) {
    let service = "acp.api.v0.mesh_query.MeshQueryService";

    let mesh_store = store.clone();
    router.add_unary(service, "GetMeshData", move |request: GetRequest| {
        let store = mesh_store.clone();
        async move {
            store.get(&request.resource_path)?;
            Ok(mesh_query::MeshDataReply {
                node_labels: vec![1, 2, 3, 4],
                node_coordinates: vec![
                    0.0, 0.0, 0.0, //
                    1.0, 0.0, 0.0, //
                    1.0, 1.0, 0.0, //
                    0.0, 1.0, 0.0,
                ],
                element_labels: vec![1, 2],
                element_types: vec![3, 3],
                element_nodes: vec![0, 1, 2, 0, 2, 3],
                element_nodes_offsets: vec![0, 3],
            })
        }
    });

    for method in ["GetElementalData", "GetNodalData"] {
        let data_store = store.clone();
        router.add_unary(service, method, move |request: mesh_query::DataRequest| {
            let store = data_store.clone();
            async move {
                store.get(&request.resource_path)?;
                let labels = vec![1, 2];
                let fields = request
                    .data_types
                    .iter()
                    .map(|name| {
                        if VECTOR_FIELDS.contains(&name.as_str()) {
                            mesh_query::DataField {
                                name: name.clone(),
                                values: vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
                                num_components: 3,
                            }
                        } else {
                            mesh_query::DataField {
                                name: name.clone(),
                                values: vec![1.0, 2.0],
                                num_components: 1,
                            }
                        }
                    })
                    .collect();
                Ok(mesh_query::DataReply { labels, fields })
            }
        });
    }
}

fn register_file_transfer(router: &mut MockRouter, store: &Store) {
    let service = "acp.api.v0.file_transfer.FileTransferService";

    let upload_store = store.clone();
    router.handlers.insert(
        format!("/{service}/Upload"),
        Handler::ClientStreaming(Arc::new(move |mut stream| {
            let store = upload_store.clone();
            Box::pin(async move {
                let mut filename = None;
                let mut content = Vec::new();
                while let Some(bytes) = stream.message().await? {
                    let request = file_transfer::UploadRequest::decode(bytes.as_slice())
                        .map_err(|err| Status::internal(err.to_string()))?;
                    match request.step {
                        Some(file_transfer::upload_request::Step::Meta(meta)) => {
                            filename = Some(meta.filename);
                        }
                        Some(file_transfer::upload_request::Step::Chunk(chunk)) => {
                            content.extend_from_slice(&chunk);
                        }
                        None => {}
                    }
                }
                let filename = filename
                    .ok_or_else(|| Status::invalid_argument("Missing upload metadata."))?;
                let remote_path = format!("uploads/{filename}");
                let resolved = store.resolve_path(&remote_path);
                if let Some(parent) = resolved.parent() {
                    std::fs::create_dir_all(parent)
                        .map_err(|err| Status::internal(err.to_string()))?;
                }
                std::fs::write(&resolved, &content)
                    .map_err(|err| Status::internal(err.to_string()))?;
                Ok(file_transfer::UploadReply { remote_path }.encode_to_vec())
            })
        })),
    );

    let download_store = store.clone();
    router.handlers.insert(
        format!("/{service}/Download"),
        Handler::ServerStreaming(Arc::new(move |bytes| {
            let store = download_store.clone();
            Box::pin(async move {
                let request = file_transfer::DownloadRequest::decode(bytes.as_slice())
                    .map_err(|err| Status::internal(err.to_string()))?;
                let resolved = store.resolve_path(&request.remote_path);
                let content = std::fs::read(&resolved).map_err(|_| {
                    Status::not_found(format!("No such file: '{}'.", request.remote_path))
                })?;
                let mut replies = vec![file_transfer::DownloadReply {
                    step: Some(file_transfer::download_reply::Step::Meta(
                        file_transfer::DownloadMeta {
                            size: content.len() as i64,
                        },
                    )),
                }
                .encode_to_vec()];
                for chunk in content.chunks(64 * 1024) {
                    replies.push(
                        file_transfer::DownloadReply {
                            step: Some(file_transfer::download_reply::Step::Chunk(
                                chunk.to_vec(),
                            )),
                        }
                        .encode_to_vec(),
                    );
                }
                Ok(replies)
            })
        })),
    );
}

fn default_model_properties() -> model::Properties {
    model::Properties {
        status: 0,
        use_nodal_thicknesses: false,
        draping_offset_correction: false,
        angle_tolerance: 1.0,
        relative_thickness_tolerance: 0.01,
        minimum_analysis_ply_thickness: 1e-6,
        unit_system: 1,
    }
}

fn write_export(store: &Store, path: &str, marker: &str) -> Result<(), Status> {
    let resolved = store.resolve_path(path);
    if let Some(parent) = resolved.parent() {
        std::fs::create_dir_all(parent).map_err(|err| Status::internal(err.to_string()))?;
    }
    std::fs::write(&resolved, format!("{marker}\n"))
        .map_err(|err| Status::internal(err.to_string()))
}

// ---------------------------------------------------------------------------
// Server assembly

pub struct MockAcpServer {
    pub endpoint: String,
    store: Store,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl MockAcpServer {
    /// Spawn the mock server on a free local port.
    pub async fn spawn() -> Self {
        Self::spawn_with_version("1.3.0").await
    }

    /// Spawn the mock server reporting the given server version.
    pub async fn spawn_with_version(version: &str) -> Self {
        use acp_client::prelude::*;

        let store = Store::new();
        let mut router = MockRouter::default();

        router.register_resource::<Model>(&store);
        router.register_resource::<Material>(&store);
        router.register_resource::<Fabric>(&store);
        router.register_resource::<Stackup>(&store);
        router.register_resource::<ElementSet>(&store);
        router.register_resource::<EdgeSet>(&store);
        router.register_resource::<Rosette>(&store);
        router.register_resource::<LookUpTable1D>(&store);
        router.register_resource::<LookUpTable1DColumn>(&store);
        router.register_resource::<ParallelSelectionRule>(&store);
        router.register_resource::<CylindricalSelectionRule>(&store);
        router.register_resource::<SphericalSelectionRule>(&store);
        router.register_resource::<TubeSelectionRule>(&store);
        router.register_resource::<BooleanSelectionRule>(&store);
        router.register_resource::<CutoffSelectionRule>(&store);
        router.register_resource::<OrientedSelectionSet>(&store);
        router.register_resource::<ModelingGroup>(&store);
        router.register_resource::<ModelingPly>(&store);
        router.register_resource::<ProductionPly>(&store);
        router.register_resource::<AnalysisPly>(&store);
        router.register_resource::<CadGeometry>(&store);
        router.register_resource::<SolidModel>(&store);
        router.register_resource::<Sensor>(&store);

        register_control(&mut router, version);
        register_model_endpoints(&mut router, &store);
        register_material_endpoints(&mut router, &store);
        register_cad_geometry_endpoints(&mut router, &store);
        register_solid_model_endpoints(&mut router, &store);
        register_mesh_query(&mut router, &store);
        register_file_transfer(&mut router, &store);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let address = listener.local_addr().expect("failed to read local address");
        let incoming = TcpListenerStream::new(listener);
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let server = Server::builder()
            .add_service(ResourceSvc::<Model>::new(router.clone()))
            .add_service(ResourceSvc::<Material>::new(router.clone()))
            .add_service(ResourceSvc::<Fabric>::new(router.clone()))
            .add_service(ResourceSvc::<Stackup>::new(router.clone()))
            .add_service(ResourceSvc::<ElementSet>::new(router.clone()))
            .add_service(ResourceSvc::<EdgeSet>::new(router.clone()))
            .add_service(ResourceSvc::<Rosette>::new(router.clone()))
            .add_service(ResourceSvc::<LookUpTable1D>::new(router.clone()))
            .add_service(ResourceSvc::<LookUpTable1DColumn>::new(router.clone()))
            .add_service(ResourceSvc::<ParallelSelectionRule>::new(router.clone()))
            .add_service(ResourceSvc::<CylindricalSelectionRule>::new(router.clone()))
            .add_service(ResourceSvc::<SphericalSelectionRule>::new(router.clone()))
            .add_service(ResourceSvc::<TubeSelectionRule>::new(router.clone()))
            .add_service(ResourceSvc::<BooleanSelectionRule>::new(router.clone()))
            .add_service(ResourceSvc::<CutoffSelectionRule>::new(router.clone()))
            .add_service(ResourceSvc::<OrientedSelectionSet>::new(router.clone()))
            .add_service(ResourceSvc::<ModelingGroup>::new(router.clone()))
            .add_service(ResourceSvc::<ModelingPly>::new(router.clone()))
            .add_service(ResourceSvc::<ProductionPly>::new(router.clone()))
            .add_service(ResourceSvc::<AnalysisPly>::new(router.clone()))
            .add_service(ResourceSvc::<CadGeometry>::new(router.clone()))
            .add_service(ResourceSvc::<SolidModel>::new(router.clone()))
            .add_service(ResourceSvc::<Sensor>::new(router.clone()))
            .add_service(ControlSvc::new(router.clone()))
            .add_service(MeshQuerySvc::new(router.clone()))
            .add_service(FileTransferSvc::new(router.clone()))
            .serve_with_incoming_shutdown(incoming, async {
                let _ = shutdown_rx.await;
            });

        let handle = tokio::spawn(async move {
            if let Err(err) = server.await {
                eprintln!("mock server error: {err}");
            }
        });

        Self {
            endpoint: format!("http://{address}"),
            store,
            shutdown: Some(shutdown_tx),
            handle,
        }
    }

    /// The working directory the mock resolves relative paths against.
    pub fn workdir(&self) -> &Path {
        self.store.workdir()
    }

    /// Create a file in the mock working directory, returning its
    /// server-visible relative path.
    pub fn seed_file(&self, relative: &str, content: &[u8]) -> String {
        let resolved = self.store.resolve_path(relative);
        if let Some(parent) = resolved.parent() {
            std::fs::create_dir_all(parent).expect("failed to create seed directory");
        }
        std::fs::write(&resolved, content).expect("failed to write seed file");
        relative.to_owned()
    }
}

impl Drop for MockAcpServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        self.handle.abort();
    }
}

/// A unique model file name. The handle caches are keyed by resource path
/// per process, so every test must load models with distinct ids even
/// though each test talks to its own mock server.
pub fn unique_model_file(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    format!("{prefix}_{}.acph5", COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Connect a client to a freshly spawned mock server.
pub async fn connect() -> (MockAcpServer, acp_client::Client) {
    let server = MockAcpServer::spawn().await;
    let client = acp_client::Client::connect(acp_client::ClientConfig::new(&server.endpoint))
        .await
        .expect("failed to connect to mock server");
    (server, client)
}

/// Connect a client using the remote file transfer strategy.
pub async fn connect_remote() -> (MockAcpServer, acp_client::Client) {
    let server = MockAcpServer::spawn().await;
    let config =
        acp_client::ClientConfig::new(&server.endpoint).with_auto_transfer();
    let client = acp_client::Client::connect(config)
        .await
        .expect("failed to connect to mock server");
    (server, client)
}
