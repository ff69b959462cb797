// ABOUTME: Trait for types that can be the target of a link property
// ABOUTME: Covers concrete handles and polymorphic unions of handle types

//! Link targets.
//!
//! A link property stores the resource path of its target. [`Linked`] is
//! implemented by every concrete handle type (checking the collection label
//! on resolution) and by the polymorphic unions, which dispatch on the
//! collection label embedded in the path.

use async_trait::async_trait;

use crate::error::{AcpError, Result};
use crate::paths;
use crate::tree::base::{self, ServerWrapper, TreeObject};

/// A type a link property can point at.
#[async_trait]
pub trait Linked: Clone + Send + Sync + Sized + 'static {
    /// The resource path of the target; empty if unstored.
    fn path_value(&self) -> String;

    /// Reconstruct the target from its resource path. The path must be
    /// non-empty and point at a collection this type covers.
    fn from_path(path: &str, server: &ServerWrapper) -> Result<Self>;

    /// The name of the target object, refreshed from the server.
    async fn object_name(&self) -> Result<String>;
}

#[async_trait]
impl<T: TreeObject> Linked for T {
    fn path_value(&self) -> String {
        base::resource_path_value(self)
    }

    fn from_path(path: &str, server: &ServerWrapper) -> Result<Self> {
        let label = paths::collection_label(path).unwrap_or_default();
        if label != T::COLLECTION_LABEL {
            return Err(AcpError::invalid_argument(format!(
                "Expected a resource path pointing to a '{}' object, got '{path}'.",
                T::TYPE_NAME
            )));
        }
        base::from_resource_path(path, server.clone())
    }

    async fn object_name(&self) -> Result<String> {
        base::get_if_stored(self).await?;
        Ok(base::local_name(self))
    }
}
