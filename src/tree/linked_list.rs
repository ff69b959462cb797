// ABOUTME: Ordered, mutable list of links to other tree objects
// ABOUTME: Every mutation republishes the whole list through the parent

//! Linked object lists.
//!
//! A [`LinkedObjectList`] is a live view over a repeated resource path
//! field of its parent. Reads go through the server each time; every
//! mutation rewrites the whole list and republishes the parent. The target
//! type may be a concrete handle or a polymorphic union.

use std::marker::PhantomData;

use crate::error::{AcpError, Result};
use crate::tree::base::{self, ObjectState, TreeObject};
use crate::tree::linked::Linked;
use crate::tree::property;

/// Live view over a repeated link field of `P`.
pub struct LinkedObjectList<P: TreeObject, L: Linked> {
    parent: P,
    name: &'static str,
    read: fn(&ObjectState<P::Properties>) -> Vec<String>,
    write: fn(&mut ObjectState<P::Properties>, Vec<String>),
    _target: PhantomData<fn() -> L>,
}

impl<P: TreeObject, L: Linked> LinkedObjectList<P, L> {
    pub(crate) fn new(
        parent: P,
        name: &'static str,
        read: fn(&ObjectState<P::Properties>) -> Vec<String>,
        write: fn(&mut ObjectState<P::Properties>, Vec<String>),
    ) -> Self {
        Self {
            parent,
            name,
            read,
            write,
            _target: PhantomData,
        }
    }

    async fn paths(&self) -> Result<Vec<String>> {
        base::get_if_stored(&self.parent).await?;
        let state = base::lock_state(&self.parent);
        Ok((self.read)(&state))
    }

    async fn set_paths(&self, paths: Vec<String>) -> Result<()> {
        if paths.iter().any(String::is_empty) {
            return Err(AcpError::invalid_argument(
                "Cannot link to unstored objects.",
            ));
        }
        property::set_property(&self.parent, self.name, None, paths, self.read, self.write).await
    }

    fn resolve(&self, path: &str) -> Result<L> {
        let server = base::server_wrapper(&self.parent)?;
        L::from_path(path, &server)
    }

    fn target_path(&self, value: &L) -> Result<String> {
        let path = value.path_value();
        if path.is_empty() {
            return Err(AcpError::invalid_argument(
                "Cannot link to unstored objects.",
            ));
        }
        Ok(path)
    }

    pub async fn len(&self) -> Result<usize> {
        Ok(self.paths().await?.len())
    }

    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.paths().await?.is_empty())
    }

    /// The element at `index`.
    pub async fn get(&self, index: usize) -> Result<L> {
        let paths = self.paths().await?;
        let path = paths.get(index).ok_or_else(|| {
            AcpError::invalid_argument(format!(
                "Index {index} out of range for '{}' with {} entries.",
                self.name,
                paths.len()
            ))
        })?;
        self.resolve(path)
    }

    /// All elements, in server order.
    pub async fn values(&self) -> Result<Vec<L>> {
        let paths = self.paths().await?;
        paths.iter().map(|path| self.resolve(path)).collect()
    }

    /// Replace the element at `index`.
    pub async fn set(&self, index: usize, value: &L) -> Result<()> {
        let mut paths = self.paths().await?;
        if index >= paths.len() {
            return Err(AcpError::invalid_argument(format!(
                "Index {index} out of range for '{}' with {} entries.",
                self.name,
                paths.len()
            )));
        }
        paths[index] = self.target_path(value)?;
        self.set_paths(paths).await
    }

    /// Replace the whole list.
    pub async fn replace_all(&self, values: &[L]) -> Result<()> {
        let paths = values
            .iter()
            .map(|value| self.target_path(value))
            .collect::<Result<Vec<_>>>()?;
        self.set_paths(paths).await
    }

    pub async fn append(&self, value: &L) -> Result<()> {
        let path = self.target_path(value)?;
        let mut paths = self.paths().await?;
        paths.push(path);
        self.set_paths(paths).await
    }

    pub async fn extend(&self, values: &[L]) -> Result<()> {
        let mut paths = self.paths().await?;
        for value in values {
            paths.push(self.target_path(value)?);
        }
        self.set_paths(paths).await
    }

    pub async fn insert(&self, index: usize, value: &L) -> Result<()> {
        let path = self.target_path(value)?;
        let mut paths = self.paths().await?;
        if index > paths.len() {
            return Err(AcpError::invalid_argument(format!(
                "Index {index} out of range for '{}' with {} entries.",
                self.name,
                paths.len()
            )));
        }
        paths.insert(index, path);
        self.set_paths(paths).await
    }

    /// Remove the first occurrence of `value`.
    pub async fn remove(&self, value: &L) -> Result<()> {
        let target = value.path_value();
        let mut paths = self.paths().await?;
        let position = paths.iter().position(|path| *path == target).ok_or_else(|| {
            AcpError::invalid_argument(format!("Object not found in '{}'.", self.name))
        })?;
        paths.remove(position);
        self.set_paths(paths).await
    }

    /// Remove and return the element at `index`.
    pub async fn remove_at(&self, index: usize) -> Result<L> {
        let mut paths = self.paths().await?;
        if index >= paths.len() {
            return Err(AcpError::invalid_argument(format!(
                "Index {index} out of range for '{}' with {} entries.",
                self.name,
                paths.len()
            )));
        }
        let path = paths.remove(index);
        self.set_paths(paths).await?;
        self.resolve(&path)
    }

    /// Remove and return the last element.
    pub async fn pop(&self) -> Result<L> {
        let len = self.len().await?;
        if len == 0 {
            return Err(AcpError::invalid_argument(format!(
                "Cannot pop from empty '{}'.",
                self.name
            )));
        }
        self.remove_at(len - 1).await
    }

    pub async fn reverse(&self) -> Result<()> {
        let mut paths = self.paths().await?;
        paths.reverse();
        self.set_paths(paths).await
    }

    /// Sort the list by object name.
    pub async fn sort(&self, descending: bool) -> Result<()> {
        let paths = self.paths().await?;
        let mut keyed = Vec::with_capacity(paths.len());
        for path in paths {
            let name = self.resolve(&path)?.object_name().await?;
            keyed.push((name, path));
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        if descending {
            keyed.reverse();
        }
        self.set_paths(keyed.into_iter().map(|(_, path)| path).collect())
            .await
    }

    pub async fn contains(&self, value: &L) -> Result<bool> {
        let target = value.path_value();
        Ok(self.paths().await?.iter().any(|path| *path == target))
    }

    pub async fn count(&self, value: &L) -> Result<usize> {
        let target = value.path_value();
        Ok(self
            .paths()
            .await?
            .iter()
            .filter(|path| **path == target)
            .count())
    }

    /// Index of the first occurrence of `value`, if any.
    pub async fn index_of(&self, value: &L) -> Result<Option<usize>> {
        let target = value.path_value();
        Ok(self.paths().await?.iter().position(|path| *path == target))
    }
}
