// ABOUTME: Oriented selection set entity: element sets with orientation data

//! Oriented selection sets.

use crate::api::oriented_selection_set::Properties;
use crate::error::Result;
use crate::mesh::{self, DataLocation, MeshData, VectorData};
use crate::objects::conversions::{triple_from_wire, triple_to_wire};
use crate::objects::enums::{RosetteSelectionMethod, StatusType, WireEnum};
use crate::tree::base;
use crate::tree::macros::{
    define_tree_object, grpc_data_property_convert, grpc_enum_property,
    grpc_enum_property_read_only, grpc_linked_object_list, impl_creatable_object,
    impl_editable_object, impl_linked_paths,
};

use super::element_set::ElementSet;
use super::model::Model;
use super::rosette::Rosette;

impl_linked_paths!(Properties {
    singles: [],
    lists: [element_sets, rosettes],
    edges: [],
});

define_tree_object! {
    /// Element sets equipped with an orientation and reference directions.
    pub struct OrientedSelectionSet {
        collection_label: "oriented_selection_sets",
        service: "acp.api.v0.oriented_selection_set.ObjectService",
        properties: crate::api::oriented_selection_set::Properties,
        supported_since: "1.0.0",
        property_names: [
            "name", "id", "status", "element_sets", "orientation_point",
            "orientation_direction", "rosettes", "rosette_selection_method",
        ],
    }
}

impl_editable_object!(OrientedSelectionSet);
impl_creatable_object!(OrientedSelectionSet, parent: Model);

impl OrientedSelectionSet {
    pub fn builder() -> OrientedSelectionSetBuilder {
        OrientedSelectionSetBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_linked_object_list! {
        /// Element sets the selection is defined on.
        element_sets, set_element_sets: ElementSet, element_sets
    }

    grpc_data_property_convert! {
        /// Orientation point of the selection.
        orientation_point, set_orientation_point: (f64, f64, f64), orientation_point,
        from = triple_from_wire, to = triple_to_wire
    }

    grpc_data_property_convert! {
        /// Orientation direction of the selection.
        orientation_direction, set_orientation_direction: (f64, f64, f64),
        orientation_direction,
        from = triple_from_wire, to = triple_to_wire
    }

    grpc_linked_object_list! {
        /// Rosettes of the selection, in priority order.
        rosettes, set_rosettes: Rosette, rosettes
    }

    grpc_enum_property! {
        /// Selection method for the rosettes.
        rosette_selection_method, set_rosette_selection_method: RosetteSelectionMethod,
        rosette_selection_method
    }

    /// The surface mesh the selection covers.
    pub async fn mesh(&self) -> Result<MeshData> {
        mesh::query_mesh(self).await
    }

    /// Elemental data of the selection.
    pub async fn elemental_data(&self) -> Result<OrientedSelectionSetElementalData> {
        let mut fields = mesh::query_data(
            self,
            DataLocation::Elemental,
            &["normal", "orientation", "reference_direction"],
        )
        .await?;
        Ok(OrientedSelectionSetElementalData {
            normal: mesh::take_vector(&mut fields, "normal")?,
            orientation: mesh::take_vector(&mut fields, "orientation")?,
            reference_direction: mesh::take_vector(&mut fields, "reference_direction")?,
        })
    }

    /// Nodal data of the selection.
    pub async fn nodal_data(&self) -> Result<OrientedSelectionSetNodalData> {
        let _fields = mesh::query_data(self, DataLocation::Nodal, &[]).await?;
        Ok(OrientedSelectionSetNodalData {})
    }
}

/// Elemental data of an oriented selection set.
#[derive(Clone, Debug)]
pub struct OrientedSelectionSetElementalData {
    pub normal: Option<VectorData>,
    pub orientation: Option<VectorData>,
    pub reference_direction: Option<VectorData>,
}

/// Nodal data of an oriented selection set. Carries no fields; queried for
/// the label set only.
#[derive(Clone, Debug)]
pub struct OrientedSelectionSetNodalData {}

/// Builder for unstored [`OrientedSelectionSet`] objects.
#[derive(Debug)]
pub struct OrientedSelectionSetBuilder {
    name: String,
    properties: Properties,
    error: Option<crate::error::AcpError>,
}

impl Default for OrientedSelectionSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientedSelectionSetBuilder {
    pub fn new() -> Self {
        Self {
            name: "OrientedSelectionSet".to_owned(),
            properties: Properties {
                orientation_point: vec![0.0, 0.0, 0.0],
                orientation_direction: vec![0.0, 0.0, 0.0],
                ..Default::default()
            },
            error: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn element_sets(mut self, element_sets: &[ElementSet]) -> Self {
        for element_set in element_sets {
            match crate::objects::stored_link_path("element_sets", element_set) {
                Ok(path) => self.properties.element_sets.push(path),
                Err(err) => {
                    self.error = Some(err);
                    break;
                }
            }
        }
        self
    }

    pub fn orientation_point(mut self, point: (f64, f64, f64)) -> Self {
        self.properties.orientation_point = triple_to_wire(point);
        self
    }

    pub fn orientation_direction(mut self, direction: (f64, f64, f64)) -> Self {
        self.properties.orientation_direction = triple_to_wire(direction);
        self
    }

    pub fn rosettes(mut self, rosettes: &[Rosette]) -> Self {
        for rosette in rosettes {
            match crate::objects::stored_link_path("rosettes", rosette) {
                Ok(path) => self.properties.rosettes.push(path),
                Err(err) => {
                    self.error = Some(err);
                    break;
                }
            }
        }
        self
    }

    pub fn rosette_selection_method(mut self, method: RosetteSelectionMethod) -> Self {
        self.properties.rosette_selection_method = method.to_wire();
        self
    }

    /// Finish the builder, producing an unstored selection set.
    pub fn build(self) -> Result<OrientedSelectionSet> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
