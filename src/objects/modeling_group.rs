// ABOUTME: Modeling group entity: an ordered container of modeling plies

//! Modeling groups.

use crate::api::modeling_group::Properties;
use crate::error::Result;
use crate::tree::base;
use crate::tree::macros::{
    define_tree_object, grpc_collection_property, impl_creatable_object, impl_editable_object,
    impl_linked_paths,
};

use super::model::Model;
use super::modeling_ply::{ModelingPly, ModelingPlyBuilder};

impl_linked_paths!(Properties {
    singles: [],
    lists: [],
    edges: [],
});

define_tree_object! {
    /// An ordered container of modeling plies.
    pub struct ModelingGroup {
        collection_label: "modeling_groups",
        service: "acp.api.v0.modeling_group.ObjectService",
        properties: crate::api::modeling_group::Properties,
        supported_since: "1.0.0",
        property_names: ["name", "id", "modeling_plies"],
    }
}

impl_editable_object!(ModelingGroup);
impl_creatable_object!(ModelingGroup, parent: Model);

impl ModelingGroup {
    pub fn builder() -> ModelingGroupBuilder {
        ModelingGroupBuilder::new()
    }

    grpc_collection_property! {
        /// The modeling plies of the group.
        modeling_plies, create_modeling_ply: ModelingPly, ModelingPlyBuilder
    }
}

/// Builder for unstored [`ModelingGroup`] objects.
#[derive(Debug)]
pub struct ModelingGroupBuilder {
    name: String,
}

impl Default for ModelingGroupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelingGroupBuilder {
    pub fn new() -> Self {
        Self {
            name: "ModelingGroup".to_owned(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Finish the builder, producing an unstored modeling group.
    pub fn build(self) -> Result<ModelingGroup> {
        Ok(base::new_unstored_with(&self.name, Properties::default()))
    }
}
