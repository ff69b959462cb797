// ABOUTME: Element set entity: a named set of mesh elements

//! Element sets.

use crate::api::element_set::Properties;
use crate::error::Result;
use crate::objects::enums::StatusType;
use crate::tree::base;
use crate::tree::macros::{
    define_tree_object, grpc_data_property, grpc_data_property_read_only,
    grpc_enum_property_read_only, impl_creatable_object, impl_editable_object, impl_linked_paths,
};

use super::model::Model;

impl_linked_paths!(Properties {
    singles: [],
    lists: [],
    edges: [],
});

define_tree_object! {
    /// A named set of mesh elements.
    pub struct ElementSet {
        collection_label: "element_sets",
        service: "acp.api.v0.element_set.ObjectService",
        properties: crate::api::element_set::Properties,
        supported_since: "1.0.0",
        property_names: ["name", "id", "status", "locked", "middle_offset", "element_labels"],
    }
}

impl_editable_object!(ElementSet);
impl_creatable_object!(ElementSet, parent: Model);

impl ElementSet {
    pub fn builder() -> ElementSetBuilder {
        ElementSetBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_data_property_read_only! {
        locked: bool, locked
    }

    grpc_data_property! {
        /// Offset the reference surface to the mid-plane of the elements.
        middle_offset, set_middle_offset: bool, middle_offset
    }

    grpc_data_property! {
        /// Labels of the contained elements.
        element_labels, set_element_labels: Vec<i32>, element_labels
    }
}

/// Builder for unstored [`ElementSet`] objects.
#[derive(Debug)]
pub struct ElementSetBuilder {
    name: String,
    properties: Properties,
}

impl Default for ElementSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementSetBuilder {
    pub fn new() -> Self {
        Self {
            name: "ElementSet".to_owned(),
            properties: Properties::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn middle_offset(mut self, middle_offset: bool) -> Self {
        self.properties.middle_offset = middle_offset;
        self
    }

    pub fn element_labels(mut self, element_labels: impl Into<Vec<i32>>) -> Self {
        self.properties.element_labels = element_labels.into();
        self
    }

    /// Finish the builder, producing an unstored element set.
    pub fn build(self) -> Result<ElementSet> {
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
