// ABOUTME: Ordered list of edge records attached to a parent object
// ABOUTME: Edges are value types carrying primitive fields plus links

//! Edge property lists.
//!
//! An edge record couples one or more links with primitive fields (e.g. a
//! stackup layer references a fabric and carries an angle). Edges are plain
//! value types compared by field; the list is a live view that rewrites the
//! whole repeated field and republishes the parent on every mutation.
//! In-place editing goes through [`EdgePropertyList::update`], which
//! applies a closure to one edge and republishes.

use std::marker::PhantomData;

use crate::error::{AcpError, Result};
use crate::tree::base::{self, ObjectState, ServerWrapper, TreeObject};
use crate::tree::property;

/// Contract of an edge record type.
pub trait EdgeProperty: Clone + PartialEq + Send + Sync + Sized + 'static {
    /// Wire message of one edge.
    type Message: prost::Message + Default + Clone + PartialEq + Send + Sync + 'static;

    /// Encode the edge. Fails when the edge is incomplete, e.g. when a link
    /// target is unstored.
    fn to_message(&self) -> Result<Self::Message>;

    /// Decode an edge, resolving its link targets.
    fn from_message(message: &Self::Message, server: &ServerWrapper) -> Result<Self>;
}

/// Live view over a repeated edge field of `P`.
pub struct EdgePropertyList<P: TreeObject, E: EdgeProperty> {
    parent: P,
    name: &'static str,
    read: fn(&ObjectState<P::Properties>) -> Vec<E::Message>,
    write: fn(&mut ObjectState<P::Properties>, Vec<E::Message>),
    _edge: PhantomData<fn() -> E>,
}

impl<P: TreeObject, E: EdgeProperty> EdgePropertyList<P, E> {
    pub(crate) fn new(
        parent: P,
        name: &'static str,
        read: fn(&ObjectState<P::Properties>) -> Vec<E::Message>,
        write: fn(&mut ObjectState<P::Properties>, Vec<E::Message>),
    ) -> Self {
        Self {
            parent,
            name,
            read,
            write,
            _edge: PhantomData,
        }
    }

    async fn messages(&self) -> Result<Vec<E::Message>> {
        base::get_if_stored(&self.parent).await?;
        let state = base::lock_state(&self.parent);
        Ok((self.read)(&state))
    }

    async fn set_messages(&self, messages: Vec<E::Message>) -> Result<()> {
        property::set_property(&self.parent, self.name, None, messages, self.read, self.write)
            .await
    }

    fn decode(&self, message: &E::Message) -> Result<E> {
        let server = base::server_wrapper(&self.parent)?;
        E::from_message(message, &server)
    }

    pub async fn len(&self) -> Result<usize> {
        Ok(self.messages().await?.len())
    }

    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.messages().await?.is_empty())
    }

    /// The edge at `index`.
    pub async fn get(&self, index: usize) -> Result<E> {
        let messages = self.messages().await?;
        let message = messages.get(index).ok_or_else(|| {
            AcpError::invalid_argument(format!(
                "Index {index} out of range for '{}' with {} entries.",
                self.name,
                messages.len()
            ))
        })?;
        self.decode(message)
    }

    /// All edges, in order.
    pub async fn values(&self) -> Result<Vec<E>> {
        let messages = self.messages().await?;
        messages.iter().map(|message| self.decode(message)).collect()
    }

    /// Replace the edge at `index`.
    pub async fn set(&self, index: usize, value: &E) -> Result<()> {
        let encoded = value.to_message()?;
        let mut messages = self.messages().await?;
        if index >= messages.len() {
            return Err(AcpError::invalid_argument(format!(
                "Index {index} out of range for '{}' with {} entries.",
                self.name,
                messages.len()
            )));
        }
        messages[index] = encoded;
        self.set_messages(messages).await
    }

    /// Replace the whole list.
    pub async fn replace_all(&self, values: &[E]) -> Result<()> {
        let messages = values
            .iter()
            .map(E::to_message)
            .collect::<Result<Vec<_>>>()?;
        self.set_messages(messages).await
    }

    pub async fn append(&self, value: &E) -> Result<()> {
        let encoded = value.to_message()?;
        let mut messages = self.messages().await?;
        messages.push(encoded);
        self.set_messages(messages).await
    }

    pub async fn extend(&self, values: &[E]) -> Result<()> {
        let mut messages = self.messages().await?;
        for value in values {
            messages.push(value.to_message()?);
        }
        self.set_messages(messages).await
    }

    pub async fn insert(&self, index: usize, value: &E) -> Result<()> {
        let encoded = value.to_message()?;
        let mut messages = self.messages().await?;
        if index > messages.len() {
            return Err(AcpError::invalid_argument(format!(
                "Index {index} out of range for '{}' with {} entries.",
                self.name,
                messages.len()
            )));
        }
        messages.insert(index, encoded);
        self.set_messages(messages).await
    }

    /// Remove the first edge equal to `value`.
    pub async fn remove(&self, value: &E) -> Result<()> {
        let target = value.to_message()?;
        let mut messages = self.messages().await?;
        let position = messages
            .iter()
            .position(|message| *message == target)
            .ok_or_else(|| {
                AcpError::invalid_argument(format!("Edge not found in '{}'.", self.name))
            })?;
        messages.remove(position);
        self.set_messages(messages).await
    }

    /// Remove and return the edge at `index`.
    pub async fn remove_at(&self, index: usize) -> Result<E> {
        let mut messages = self.messages().await?;
        if index >= messages.len() {
            return Err(AcpError::invalid_argument(format!(
                "Index {index} out of range for '{}' with {} entries.",
                self.name,
                messages.len()
            )));
        }
        let message = messages.remove(index);
        let edge = self.decode(&message)?;
        self.set_messages(messages).await?;
        Ok(edge)
    }

    /// Remove and return the last edge.
    pub async fn pop(&self) -> Result<E> {
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
        let mut messages = self.messages().await?;
        messages.reverse();
        self.set_messages(messages).await
    }

    /// Edit the edge at `index` in place and republish the list.
    pub async fn update(&self, index: usize, edit: impl FnOnce(&mut E)) -> Result<()> {
        let mut messages = self.messages().await?;
        let message = messages.get(index).ok_or_else(|| {
            AcpError::invalid_argument(format!(
                "Index {index} out of range for '{}' with {} entries.",
                self.name,
                messages.len()
            ))
        })?;
        let mut edge = self.decode(message)?;
        edit(&mut edge);
        messages[index] = edge.to_message()?;
        self.set_messages(messages).await
    }

    pub async fn contains(&self, value: &E) -> Result<bool> {
        let target = value.to_message()?;
        Ok(self
            .messages()
            .await?
            .iter()
            .any(|message| *message == target))
    }

    pub async fn count(&self, value: &E) -> Result<usize> {
        let target = value.to_message()?;
        Ok(self
            .messages()
            .await?
            .iter()
            .filter(|message| **message == target)
            .count())
    }

    /// Index of the first edge equal to `value`, if any.
    pub async fn index_of(&self, value: &E) -> Result<Option<usize>> {
        let target = value.to_message()?;
        Ok(self
            .messages()
            .await?
            .iter()
            .position(|message| *message == target))
    }
}
