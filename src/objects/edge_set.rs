// ABOUTME: Edge set entity: a set of element edges, by nodes or by reference

//! Edge sets.

use crate::api::edge_set::Properties;
use crate::error::Result;
use crate::objects::conversions::{triple_from_wire, triple_to_wire};
use crate::objects::enums::{EdgeSetType, StatusType};
use crate::tree::base;
use crate::tree::macros::{
    define_tree_object, grpc_data_property, grpc_data_property_convert, grpc_enum_property,
    grpc_enum_property_read_only, grpc_link_property, impl_creatable_object, impl_editable_object,
    impl_linked_paths,
};

use super::element_set::ElementSet;
use super::model::Model;

impl_linked_paths!(Properties {
    singles: [element_set],
    lists: [],
    edges: [],
});

define_tree_object! {
    /// A set of element edges, defined by nodes or by an element set
    /// boundary.
    pub struct EdgeSet {
        collection_label: "edge_sets",
        service: "acp.api.v0.edge_set.ObjectService",
        properties: crate::api::edge_set::Properties,
        supported_since: "1.0.0",
        property_names: [
            "name", "id", "status", "edge_set_type", "defining_node_labels",
            "element_set", "limit_angle", "origin",
        ],
    }
}

impl_editable_object!(EdgeSet);
impl_creatable_object!(EdgeSet, parent: Model);

impl EdgeSet {
    pub fn builder() -> EdgeSetBuilder {
        EdgeSetBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_enum_property! {
        /// How the edge set is defined.
        edge_set_type, set_edge_set_type: EdgeSetType, edge_set_type
    }

    grpc_data_property! {
        /// Labels of the nodes defining the edge set.
        defining_node_labels, set_defining_node_labels: Vec<i32>, defining_node_labels
    }

    grpc_link_property! {
        /// Element set whose boundary defines the edge set.
        element_set, set_element_set: ElementSet, element_set
    }

    grpc_data_property! {
        /// Maximum angle (in degree) up to which boundary edges are chained.
        limit_angle, set_limit_angle: f64, limit_angle
    }

    grpc_data_property_convert! {
        /// Point defining the start of the edge set.
        origin, set_origin: (f64, f64, f64), origin,
        from = triple_from_wire, to = triple_to_wire
    }
}

/// Builder for unstored [`EdgeSet`] objects.
#[derive(Debug)]
pub struct EdgeSetBuilder {
    name: String,
    properties: Properties,
    error: Option<crate::error::AcpError>,
}

impl Default for EdgeSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeSetBuilder {
    pub fn new() -> Self {
        Self {
            name: "EdgeSet".to_owned(),
            properties: Properties {
                limit_angle: -1.0,
                origin: vec![0.0, 0.0, 0.0],
                ..Default::default()
            },
            error: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn edge_set_type(mut self, edge_set_type: EdgeSetType) -> Self {
        use crate::objects::enums::WireEnum;
        self.properties.edge_set_type = edge_set_type.to_wire();
        self
    }

    pub fn defining_node_labels(mut self, labels: impl Into<Vec<i32>>) -> Self {
        self.properties.defining_node_labels = labels.into();
        self
    }

    pub fn element_set(mut self, element_set: &ElementSet) -> Self {
        match super::stored_link_path("element_set", element_set) {
            Ok(path) => self.properties.element_set = path,
            Err(err) => self.error = Some(err),
        }
        self
    }

    pub fn limit_angle(mut self, limit_angle: f64) -> Self {
        self.properties.limit_angle = limit_angle;
        self
    }

    pub fn origin(mut self, origin: (f64, f64, f64)) -> Self {
        self.properties.origin = triple_to_wire(origin);
        self
    }

    /// Finish the builder, producing an unstored edge set.
    pub fn build(self) -> Result<EdgeSet> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
