// ABOUTME: Shared handle state and lifecycle engine for tree objects
// ABOUTME: Implements Get/Put/Delete/Create with caching and cross-model validation

//! Tree object base machinery.
//!
//! A tree object handle is an `Arc`-shared [`ObjectInner`] holding the last
//! known server state (info + properties), the adopted server wrapper, and
//! a lazily created resource stub. Entity types implement [`TreeObject`] to
//! declare their collection label, service, minimum server version and
//! properties payload; everything else is driven by the generic engine
//! functions in this module.
//!
//! Lifecycle: handles start *unstored* (no server wrapper, empty resource
//! path), become *stored* through [`store_with`] or by construction from
//! server replies, and turn unusable after a delete (the server answers
//! further calls with not-found).

use std::sync::{Arc, Mutex, MutexGuard};

use prost::Message;
use semver::Version;
use tonic::transport::Channel;

use crate::api::base::{BasicInfo, DeleteRequest, GetRequest};
use crate::api::generic::{CreateRequest, ObjectInfo};
use crate::error::{AcpError, Result};
use crate::filetransfer::FileTransferHandler;
use crate::paths;
use crate::rpc::{ResourceStub, ServiceClient};
use crate::tree::cache::ObjectCache;
use crate::version::{check_supported_since, GateSubject};

/// Per-connection bundle adopted by every stored handle: channel, negotiated
/// server version, and file transfer strategy.
#[derive(Clone, Debug)]
pub struct ServerWrapper {
    channel: Channel,
    version: Version,
    transfer: Arc<FileTransferHandler>,
}

impl ServerWrapper {
    pub(crate) fn new(
        channel: Channel,
        version: Version,
        transfer: Arc<FileTransferHandler>,
    ) -> Self {
        Self {
            channel,
            version,
            transfer,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel.clone()
    }

    /// The server version negotiated at connect time.
    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn transfer(&self) -> &FileTransferHandler {
        &self.transfer
    }
}

/// Typed visitor over the resource path fields of a properties payload.
///
/// Implemented per message; replaces runtime reflection over the payload.
pub trait LinkedPaths {
    /// All link field values, including empty (unset) ones.
    fn linked_paths(&self) -> Vec<String>;

    /// Rewrite every link through `f`; `None` leaves a link unchanged.
    fn map_links(&mut self, f: &mut dyn FnMut(&str) -> Option<String>);

    /// Clear every link field.
    fn clear_links(&mut self) {
        self.map_links(&mut |_| Some(String::new()));
    }
}

/// Bound collecting everything the engine needs from a properties payload.
pub trait ObjectProperties:
    Message + Default + Clone + PartialEq + LinkedPaths + Send + Sync + 'static
{
}

impl<T> ObjectProperties for T where
    T: Message + Default + Clone + PartialEq + LinkedPaths + Send + Sync + 'static
{
}

/// Mutable state of one handle.
pub struct ObjectState<P> {
    pub info: BasicInfo,
    pub properties: P,
    pub(crate) server: Option<ServerWrapper>,
    pub(crate) stub: Option<ResourceStub<P>>,
}

/// Shared inner allocation of a handle. Handle identity is the identity of
/// this allocation.
pub struct ObjectInner<P> {
    state: Mutex<ObjectState<P>>,
}

impl<P: ObjectProperties> ObjectInner<P> {
    pub(crate) fn new(
        info: BasicInfo,
        properties: P,
        server: Option<ServerWrapper>,
    ) -> Self {
        Self {
            state: Mutex::new(ObjectState {
                info,
                properties,
                server,
                stub: None,
            }),
        }
    }
}

/// Contract implemented by every entity handle type.
pub trait TreeObject: Clone + Send + Sync + 'static {
    type Properties: ObjectProperties;

    /// Collection label under which objects of this type are stored.
    const COLLECTION_LABEL: &'static str;
    /// Fully qualified gRPC service name of the resource.
    const SERVICE_NAME: &'static str;
    /// Minimum server version supporting this object type.
    const SUPPORTED_SINCE: &'static str;
    /// Type name used in messages, e.g. `"Fabric"`.
    const TYPE_NAME: &'static str;
    /// Names of all exposed properties, including inherited ones.
    const PROPERTY_NAMES: &'static [&'static str];

    fn inner(&self) -> &Arc<ObjectInner<Self::Properties>>;
    fn from_inner(inner: Arc<ObjectInner<Self::Properties>>) -> Self;
    fn object_cache() -> &'static ObjectCache<ObjectInner<Self::Properties>>;
}

pub(crate) fn lock_state<T: TreeObject>(obj: &T) -> MutexGuard<'_, ObjectState<T::Properties>> {
    obj.inner().state.lock().expect("tree object state lock poisoned")
}

pub(crate) fn is_stored<T: TreeObject>(obj: &T) -> bool {
    lock_state(obj).server.is_some()
}

pub(crate) fn resource_path_value<T: TreeObject>(obj: &T) -> String {
    lock_state(obj).info.resource_path.clone()
}

pub(crate) fn local_name<T: TreeObject>(obj: &T) -> String {
    lock_state(obj).info.name.clone()
}

pub(crate) fn local_version<T: TreeObject>(obj: &T) -> i64 {
    lock_state(obj).info.version
}

/// The server wrapper of a stored handle.
pub(crate) fn server_wrapper<T: TreeObject>(obj: &T) -> Result<ServerWrapper> {
    lock_state(obj)
        .server
        .clone()
        .ok_or_else(|| AcpError::runtime("The server connection is uninitialized."))
}

pub(crate) fn server_version<T: TreeObject>(obj: &T) -> Option<Version> {
    lock_state(obj).server.as_ref().map(|s| s.version().clone())
}

/// The lazily created stub of a stored handle. Clones share the channel.
pub(crate) fn stub<T: TreeObject>(obj: &T) -> Result<ResourceStub<T::Properties>> {
    let mut state = lock_state(obj);
    let Some(server) = state.server.clone() else {
        return Err(AcpError::runtime("The server connection is uninitialized."));
    };
    if let Some(stub) = &state.stub {
        return Ok(stub.clone());
    }
    let stub = ResourceStub::new(server.channel(), T::SERVICE_NAME);
    state.stub = Some(stub.clone());
    Ok(stub)
}

/// Untyped client for service-specific endpoints of a stored handle.
pub(crate) fn service_client<T: TreeObject>(obj: &T) -> Result<ServiceClient> {
    Ok(stub(obj)?.client().clone())
}

fn apply_object_info<T: TreeObject>(obj: &T, reply: ObjectInfo<T::Properties>) {
    let mut state = lock_state(obj);
    if let Some(info) = reply.info {
        state.info = info;
    }
    if let Some(properties) = reply.properties {
        state.properties = properties;
    }
}

/// Refresh info and properties from the server.
pub(crate) async fn get<T: TreeObject>(obj: &T) -> Result<()> {
    let stub = stub(obj)?;
    let request = GetRequest {
        resource_path: resource_path_value(obj),
    };
    let reply = stub.get(request).await.map_err(AcpError::from)?;
    apply_object_info(obj, reply);
    Ok(())
}

pub(crate) async fn get_if_stored<T: TreeObject>(obj: &T) -> Result<()> {
    if is_stored(obj) {
        get(obj).await?;
    }
    Ok(())
}

/// Publish the local state to the server.
pub(crate) async fn put<T: TreeObject>(obj: &T) -> Result<()> {
    let stub = stub(obj)?;
    let request = {
        let state = lock_state(obj);
        ObjectInfo {
            info: Some(state.info.clone()),
            properties: Some(state.properties.clone()),
        }
    };
    let reply = stub.put(request).await.map_err(AcpError::from)?;
    apply_object_info(obj, reply);
    Ok(())
}

pub(crate) async fn put_if_stored<T: TreeObject>(obj: &T) -> Result<()> {
    if is_stored(obj) {
        put(obj).await?;
    }
    Ok(())
}

/// Delete the object on the server. The handle stays in the cache; further
/// calls surface the server's not-found reply.
pub(crate) async fn delete<T: TreeObject>(obj: &T) -> Result<()> {
    let stub = stub(obj)?;
    let request = {
        let state = lock_state(obj);
        DeleteRequest {
            resource_path: state.info.resource_path.clone(),
            version: state.info.version,
        }
    };
    stub.delete(request).await.map_err(AcpError::from)?;
    Ok(())
}

/// Construct a new unstored handle with default properties.
pub(crate) fn new_unstored<T: TreeObject>(name: &str) -> T {
    new_unstored_with(name, T::Properties::default())
}

/// Construct a new unstored handle with prepared properties.
pub(crate) fn new_unstored_with<T: TreeObject>(name: &str, properties: T::Properties) -> T {
    let info = BasicInfo {
        name: name.to_owned(),
        ..Default::default()
    };
    T::from_inner(Arc::new(ObjectInner::new(info, properties, None)))
}

/// Construct a handle from a server reply, going through the identity cache.
///
/// Replies without a resource path produce an uncached handle.
pub(crate) fn from_object_info<T: TreeObject>(
    reply: ObjectInfo<T::Properties>,
    server: Option<ServerWrapper>,
) -> T {
    let info = reply.info.unwrap_or_default();
    let properties = reply.properties.unwrap_or_default();
    let key = info.resource_path.clone();
    if key.is_empty() {
        return T::from_inner(Arc::new(ObjectInner::new(info, properties, server)));
    }
    let inner = T::object_cache().get_or_insert(&key, || {
        Arc::new(ObjectInner::new(info, properties, server))
    });
    T::from_inner(inner)
}

/// Construct a handle from a resource path, going through the identity
/// cache. The path must not be empty.
pub(crate) fn from_resource_path<T: TreeObject>(
    resource_path: &str,
    server: ServerWrapper,
) -> Result<T> {
    if resource_path.is_empty() {
        return Err(AcpError::invalid_argument(format!(
            "Cache key '{resource_path}' is invalid."
        )));
    }
    let inner = T::object_cache().get_or_insert(resource_path, || {
        let info = BasicInfo {
            resource_path: resource_path.to_owned(),
            ..Default::default()
        };
        Arc::new(ObjectInner::new(
            info,
            T::Properties::default(),
            Some(server),
        ))
    });
    Ok(T::from_inner(inner))
}

/// Deep-copy an object into a new unstored handle carrying the same name
/// and properties. With `unlink`, every resource path in the payload is
/// cleared so the copy can be stored on another model.
pub(crate) fn duplicate<T: TreeObject>(obj: &T, unlink: bool) -> T {
    let (name, mut properties) = {
        let state = lock_state(obj);
        (state.info.name.clone(), state.properties.clone())
    };
    if unlink {
        properties.clear_links();
    }
    let info = BasicInfo {
        name,
        ..Default::default()
    };
    T::from_inner(Arc::new(ObjectInner::new(info, properties, None)))
}

/// Store an unstored object under a parent, adopting the parent's server
/// wrapper.
///
/// Fails without touching the handle if the server is too old for this
/// object type, or if the payload links to objects of another model.
pub(crate) async fn store_with<T: TreeObject>(
    obj: &T,
    parent_path: &str,
    server: ServerWrapper,
) -> Result<()> {
    check_supported_since(
        Some(T::SUPPORTED_SINCE),
        Some(server.version()),
        GateSubject::ObjectType(T::TYPE_NAME),
    )?;

    let parent_parts = paths::to_parts(parent_path);
    if parent_parts.len() < 2 {
        return Err(AcpError::invalid_argument(
            "The parent object must be stored under a model.",
        ));
    }
    let model_uid = parent_parts[1];

    let collection_path = paths::join([parent_path, T::COLLECTION_LABEL]);
    let (name, properties) = {
        let state = lock_state(obj);
        (state.info.name.clone(), state.properties.clone())
    };

    // All non-empty links must stay within the parent's model.
    let linked = properties.linked_paths();
    let offending: Vec<&str> = linked
        .iter()
        .map(String::as_str)
        .filter(|path| !path.is_empty())
        .filter(|path| paths::to_parts(path).get(1) != Some(&model_uid))
        .collect();
    if !offending.is_empty() {
        let listing = offending
            .iter()
            .map(|path| format!("    '{path}'"))
            .collect::<Vec<_>>()
            .join(",\n");
        return Err(AcpError::invalid_argument(format!(
            "The object to store contains links to the following objects, \
             which are located on another model: [\n{listing}\n]"
        )));
    }

    let stub = ResourceStub::<T::Properties>::new(server.channel(), T::SERVICE_NAME);
    let request = CreateRequest {
        collection_path,
        name,
        properties: Some(properties),
    };
    let reply = stub.create(request).await.map_err(AcpError::from)?;

    let info = reply
        .info
        .ok_or_else(|| AcpError::runtime("The server reply carries no object info."))?;
    if info.resource_path.is_empty() {
        return Err(AcpError::runtime("The resource path must not be empty."));
    }
    let key = info.resource_path.clone();
    {
        let mut state = lock_state(obj);
        state.info = info;
        if let Some(properties) = reply.properties {
            state.properties = properties;
        }
        state.server = Some(server);
        state.stub = Some(stub);
    }
    T::object_cache().insert(&key, obj.inner());
    tracing::debug!(resource_path = %key, "stored object");
    Ok(())
}

/// Handle equality: path equality for stored handles, identity otherwise.
pub(crate) fn handles_equal<T: TreeObject>(a: &T, b: &T) -> bool {
    if Arc::ptr_eq(a.inner(), b.inner()) {
        return true;
    }
    let path_a = resource_path_value(a);
    !path_a.is_empty() && path_a == resource_path_value(b)
}

/// Handles hash by identity; consistent with equality because the cache
/// keeps at most one live handle per path.
pub(crate) fn handle_hash<T: TreeObject, H: std::hash::Hasher>(obj: &T, state: &mut H) {
    std::hash::Hash::hash(&Arc::as_ptr(obj.inner()), state);
}
