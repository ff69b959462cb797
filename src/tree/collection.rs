// ABOUTME: Typed keyed-map view over a server collection
// ABOUTME: Every read issues a List call; values come from the handle cache

//! Collection mappings.
//!
//! A [`Collection`] exposes a server collection as a map from resource id
//! to child handle. There is no local copy: every read lists the collection
//! on the server, and iteration order follows server order. A listing with
//! duplicate ids indicates a server bug and fails.

use std::collections::HashSet;
use std::marker::PhantomData;

use crate::api::base::{DeleteRequest, ListRequest};
use crate::api::generic::ObjectInfo;
use crate::error::{AcpError, Result};
use crate::rpc::ResourceStub;
use crate::tree::base::{self, ServerWrapper, TreeObject};

/// Map-like view over one server collection.
pub struct Collection<T: TreeObject> {
    server: ServerWrapper,
    collection_path: String,
    _child: PhantomData<fn() -> T>,
}

impl<T: TreeObject> Collection<T> {
    pub(crate) fn new(server: ServerWrapper, collection_path: String) -> Self {
        Self {
            server,
            collection_path,
            _child: PhantomData,
        }
    }

    /// The collection path this view is scoped to.
    pub fn collection_path(&self) -> &str {
        &self.collection_path
    }

    async fn object_infos(&self) -> Result<Vec<ObjectInfo<T::Properties>>> {
        let stub = ResourceStub::<T::Properties>::new(self.server.channel(), T::SERVICE_NAME);
        let reply = stub
            .list(ListRequest {
                collection_path: self.collection_path.clone(),
            })
            .await
            .map_err(AcpError::from)?;
        let mut seen = HashSet::new();
        for object in &reply.objects {
            let id = object.info.as_ref().map(|info| info.id.as_str()).unwrap_or("");
            if !seen.insert(id.to_owned()) {
                return Err(AcpError::runtime(format!(
                    "Duplicate ID '{id}' in collection '{}'.",
                    self.collection_path
                )));
            }
        }
        Ok(reply.objects)
    }

    async fn object_info_by_id(&self, id: &str) -> Result<Option<ObjectInfo<T::Properties>>> {
        Ok(self
            .object_infos()
            .await?
            .into_iter()
            .find(|object| object.info.as_ref().is_some_and(|info| info.id == id)))
    }

    fn build(&self, info: ObjectInfo<T::Properties>) -> T {
        base::from_object_info(info, Some(self.server.clone()))
    }

    /// The resource ids of the collection, in server order.
    pub async fn ids(&self) -> Result<Vec<String>> {
        Ok(self
            .object_infos()
            .await?
            .into_iter()
            .filter_map(|object| object.info.map(|info| info.id))
            .collect())
    }

    /// The child with the given id, if present.
    pub async fn get(&self, id: &str) -> Result<Option<T>> {
        Ok(self.object_info_by_id(id).await?.map(|info| self.build(info)))
    }

    /// All children, in server order.
    pub async fn values(&self) -> Result<Vec<T>> {
        Ok(self
            .object_infos()
            .await?
            .into_iter()
            .map(|info| self.build(info))
            .collect())
    }

    /// All `(id, child)` pairs, in server order.
    pub async fn items(&self) -> Result<Vec<(String, T)>> {
        Ok(self
            .object_infos()
            .await?
            .into_iter()
            .map(|object| {
                let id = object
                    .info
                    .as_ref()
                    .map(|info| info.id.clone())
                    .unwrap_or_default();
                (id, self.build(object))
            })
            .collect())
    }

    pub async fn len(&self) -> Result<usize> {
        Ok(self.object_infos().await?.len())
    }

    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.object_infos().await?.is_empty())
    }

    pub async fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.object_info_by_id(id).await?.is_some())
    }

    async fn delete_object(&self, object: &ObjectInfo<T::Properties>) -> Result<()> {
        let info = object
            .info
            .as_ref()
            .ok_or_else(|| AcpError::runtime("The listed object carries no info."))?;
        let stub = ResourceStub::<T::Properties>::new(self.server.channel(), T::SERVICE_NAME);
        stub.delete(DeleteRequest {
            resource_path: info.resource_path.clone(),
            version: info.version,
        })
        .await
        .map_err(AcpError::from)?;
        Ok(())
    }

    /// Delete the child with the given id.
    pub async fn remove(&self, id: &str) -> Result<()> {
        let object = self.object_info_by_id(id).await?.ok_or_else(|| {
            AcpError::not_found(format!(
                "No object with ID '{id}' found in '{}'.",
                self.collection_path
            ))
        })?;
        self.delete_object(&object).await
    }

    /// Delete all children.
    pub async fn clear(&self) -> Result<()> {
        for object in self.object_infos().await? {
            self.delete_object(&object).await?;
        }
        Ok(())
    }

    /// Remove the child with the given id, returning an unstored copy of it.
    pub async fn pop(&self, id: &str) -> Result<T> {
        let object = self.object_info_by_id(id).await?.ok_or_else(|| {
            AcpError::not_found(format!(
                "No object with ID '{id}' found in '{}'.",
                self.collection_path
            ))
        })?;
        let handle = self.build(object.clone());
        let copy = base::duplicate(&handle, false);
        self.delete_object(&object).await?;
        Ok(copy)
    }

    /// Remove the first child of the collection, returning an unstored copy.
    pub async fn pop_first(&self) -> Result<T> {
        let objects = self.object_infos().await?;
        let object = objects.first().ok_or_else(|| {
            AcpError::not_found(format!(
                "Cannot pop from empty collection '{}'.",
                self.collection_path
            ))
        })?;
        let handle = self.build(object.clone());
        let copy = base::duplicate(&handle, false);
        self.delete_object(object).await?;
        Ok(copy)
    }
}
