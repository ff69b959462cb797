// ABOUTME: Modeling ply entity: a ply definition with material, extent and draping

//! Modeling plies.

use crate::api::modeling_ply::Properties;
use crate::error::Result;
use crate::mesh::{self, DataLocation, MeshData, ScalarData, VectorData};
use crate::objects::conversions::{triple_from_wire, triple_to_wire};
use crate::objects::enums::{DrapingType, StatusType, WireEnum};
use crate::tree::base;
use crate::tree::edge_list::EdgeProperty;
use crate::tree::macros::{
    define_linked_union, define_tree_object, grpc_collection_property_read_only,
    grpc_data_property, grpc_data_property_convert, grpc_edge_property_list,
    grpc_enum_property, grpc_enum_property_read_only, grpc_link_property,
    grpc_linked_object_list, impl_creatable_object, impl_editable_object, impl_linked_paths,
};

use super::fabric::Fabric;
use super::lookup_table::LookUpTable1DColumn;
use super::modeling_group::ModelingGroup;
use super::oriented_selection_set::OrientedSelectionSet;
use super::production_ply::ProductionPly;
use super::selection_rules::LinkedSelectionRule;
use super::stackup::Stackup;

impl_linked_paths!(Properties {
    singles: [ply_material, draping_angle_1_field, draping_angle_2_field],
    lists: [oriented_selection_sets],
    edges: [selection_rules.resource_path],
});

define_linked_union! {
    /// Materials a modeling ply can be made of.
    pub enum PlyMaterial {
        Fabric(Fabric),
        Stackup(Stackup),
    }
}

define_tree_object! {
    /// A ply definition: material, extent, order and draping parameters.
    pub struct ModelingPly {
        collection_label: "modeling_plies",
        service: "acp.api.v0.modeling_ply.ObjectService",
        properties: crate::api::modeling_ply::Properties,
        supported_since: "1.0.0",
        property_names: [
            "name", "id", "status", "ply_material", "oriented_selection_sets",
            "ply_angle", "number_of_layers", "active", "global_ply_nr",
            "draping", "draping_seed_point", "auto_draping_direction",
            "draping_direction", "draping_mesh_size", "draping_thickness_correction",
            "draping_angle_1_field", "draping_angle_2_field", "selection_rules",
            "production_plies",
        ],
    }
}

impl_editable_object!(ModelingPly);
impl_creatable_object!(ModelingPly, parent: ModelingGroup);

impl ModelingPly {
    pub fn builder() -> ModelingPlyBuilder {
        ModelingPlyBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_link_property! {
        /// Material (fabric or stackup) of the ply.
        ply_material, set_ply_material: PlyMaterial, ply_material
    }

    grpc_linked_object_list! {
        /// Oriented selection sets defining the extent of the ply.
        oriented_selection_sets, set_oriented_selection_sets: OrientedSelectionSet,
        oriented_selection_sets
    }

    grpc_data_property! {
        /// Design angle between the reference direction and the ply fiber
        /// direction.
        ply_angle, set_ply_angle: f64, ply_angle
    }

    grpc_data_property! {
        /// Number of times the ply is generated.
        number_of_layers, set_number_of_layers: i32, number_of_layers
    }

    grpc_data_property! {
        /// Inactive plies are ignored in the lay-up and downstream analysis.
        active, set_active: bool, active
    }

    grpc_data_property! {
        /// Global ply order; 0 lets the server assign a consistent number.
        global_ply_nr, set_global_ply_nr: i32, global_ply_nr
    }

    grpc_enum_property! {
        /// Draping formulation of the ply.
        draping, set_draping: DrapingType, draping
    }

    grpc_data_property_convert! {
        /// Starting point of the draping algorithm.
        draping_seed_point, set_draping_seed_point: (f64, f64, f64), draping_seed_point,
        from = triple_from_wire, to = triple_to_wire
    }

    grpc_data_property! {
        /// Use the fiber direction at the seed point as draping direction.
        auto_draping_direction, set_auto_draping_direction: bool, auto_draping_direction
    }

    grpc_data_property_convert! {
        /// Primary draping direction; only used without auto direction.
        draping_direction, set_draping_direction: (f64, f64, f64), draping_direction,
        from = triple_from_wire, to = triple_to_wire
    }

    grpc_data_property! {
        /// Mesh size for the draping algorithm; 0 lets the server choose.
        draping_mesh_size, set_draping_mesh_size: f64, draping_mesh_size
    }

    grpc_data_property! {
        /// Correct the thickness of draped plies by the shear angle.
        draping_thickness_correction, set_draping_thickness_correction: bool,
        draping_thickness_correction
    }

    grpc_link_property! {
        /// Lookup table column with the first draping correction angle.
        draping_angle_1_field, set_draping_angle_1_field: LookUpTable1DColumn,
        draping_angle_1_field
    }

    grpc_link_property! {
        /// Lookup table column with the second draping correction angle.
        draping_angle_2_field, set_draping_angle_2_field: LookUpTable1DColumn,
        draping_angle_2_field
    }

    grpc_edge_property_list! {
        /// Selection rules limiting the extent of the ply.
        selection_rules, set_selection_rules: LinkedSelectionRule, selection_rules
    }

    grpc_collection_property_read_only! {
        /// The production plies generated from this ply.
        production_plies: ProductionPly
    }

    /// The surface mesh the ply covers.
    pub async fn mesh(&self) -> Result<MeshData> {
        mesh::query_mesh(self).await
    }

    /// Elemental data of the ply.
    pub async fn elemental_data(&self) -> Result<ModelingPlyElementalData> {
        let mut fields = mesh::query_data(
            self,
            DataLocation::Elemental,
            &[
                "normal",
                "orientation",
                "reference_direction",
                "fiber_direction",
                "draped_fiber_direction",
                "thickness",
                "relative_thickness_correction",
                "design_angle",
                "shear_angle",
                "area",
                "price",
                "volume",
                "mass",
                "offset",
                "cog",
            ],
        )
        .await?;
        Ok(ModelingPlyElementalData {
            normal: mesh::take_vector(&mut fields, "normal")?,
            orientation: mesh::take_vector(&mut fields, "orientation")?,
            reference_direction: mesh::take_vector(&mut fields, "reference_direction")?,
            fiber_direction: mesh::take_vector(&mut fields, "fiber_direction")?,
            draped_fiber_direction: mesh::take_vector(&mut fields, "draped_fiber_direction")?,
            thickness: mesh::take_scalar(&mut fields, "thickness")?,
            relative_thickness_correction: mesh::take_scalar(
                &mut fields,
                "relative_thickness_correction",
            )?,
            design_angle: mesh::take_scalar(&mut fields, "design_angle")?,
            shear_angle: mesh::take_scalar(&mut fields, "shear_angle")?,
            area: mesh::take_scalar(&mut fields, "area")?,
            price: mesh::take_scalar(&mut fields, "price")?,
            volume: mesh::take_scalar(&mut fields, "volume")?,
            mass: mesh::take_scalar(&mut fields, "mass")?,
            offset: mesh::take_scalar(&mut fields, "offset")?,
            cog: mesh::take_vector(&mut fields, "cog")?,
        })
    }

    /// Nodal data of the ply.
    pub async fn nodal_data(&self) -> Result<ModelingPlyNodalData> {
        let mut fields = mesh::query_data(self, DataLocation::Nodal, &["ply_offset"]).await?;
        Ok(ModelingPlyNodalData {
            ply_offset: mesh::take_vector(&mut fields, "ply_offset")?,
        })
    }
}

/// Elemental data of a modeling ply.
#[derive(Clone, Debug)]
pub struct ModelingPlyElementalData {
    pub normal: Option<VectorData>,
    pub orientation: Option<VectorData>,
    pub reference_direction: Option<VectorData>,
    pub fiber_direction: Option<VectorData>,
    pub draped_fiber_direction: Option<VectorData>,
    pub thickness: Option<ScalarData>,
    pub relative_thickness_correction: Option<ScalarData>,
    pub design_angle: Option<ScalarData>,
    pub shear_angle: Option<ScalarData>,
    pub area: Option<ScalarData>,
    pub price: Option<ScalarData>,
    pub volume: Option<ScalarData>,
    pub mass: Option<ScalarData>,
    pub offset: Option<ScalarData>,
    pub cog: Option<VectorData>,
}

/// Nodal data of a modeling ply.
#[derive(Clone, Debug)]
pub struct ModelingPlyNodalData {
    pub ply_offset: Option<VectorData>,
}

/// Builder for unstored [`ModelingPly`] objects.
#[derive(Debug)]
pub struct ModelingPlyBuilder {
    name: String,
    properties: Properties,
    error: Option<crate::error::AcpError>,
}

impl Default for ModelingPlyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelingPlyBuilder {
    pub fn new() -> Self {
        Self {
            name: "ModelingPly".to_owned(),
            properties: Properties {
                number_of_layers: 1,
                active: true,
                draping_seed_point: vec![0.0, 0.0, 0.0],
                auto_draping_direction: true,
                draping_direction: vec![1.0, 0.0, 0.0],
                draping_thickness_correction: true,
                ..Default::default()
            },
            error: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn ply_material(mut self, material: impl Into<PlyMaterial>) -> Self {
        let material = material.into();
        match crate::objects::stored_link_path("ply_material", &material) {
            Ok(path) => self.properties.ply_material = path,
            Err(err) => self.error = Some(err),
        }
        self
    }

    pub fn oriented_selection_sets(mut self, sets: &[OrientedSelectionSet]) -> Self {
        for set in sets {
            match crate::objects::stored_link_path("oriented_selection_sets", set) {
                Ok(path) => self.properties.oriented_selection_sets.push(path),
                Err(err) => {
                    self.error = Some(err);
                    break;
                }
            }
        }
        self
    }

    pub fn ply_angle(mut self, ply_angle: f64) -> Self {
        self.properties.ply_angle = ply_angle;
        self
    }

    pub fn number_of_layers(mut self, number_of_layers: i32) -> Self {
        self.properties.number_of_layers = number_of_layers;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.properties.active = active;
        self
    }

    pub fn global_ply_nr(mut self, global_ply_nr: i32) -> Self {
        self.properties.global_ply_nr = global_ply_nr;
        self
    }

    pub fn draping(mut self, draping: DrapingType) -> Self {
        self.properties.draping = draping.to_wire();
        self
    }

    pub fn draping_seed_point(mut self, point: (f64, f64, f64)) -> Self {
        self.properties.draping_seed_point = triple_to_wire(point);
        self
    }

    pub fn auto_draping_direction(mut self, value: bool) -> Self {
        self.properties.auto_draping_direction = value;
        self
    }

    pub fn draping_direction(mut self, direction: (f64, f64, f64)) -> Self {
        self.properties.draping_direction = triple_to_wire(direction);
        self
    }

    pub fn draping_mesh_size(mut self, size: f64) -> Self {
        self.properties.draping_mesh_size = size;
        self
    }

    pub fn draping_thickness_correction(mut self, value: bool) -> Self {
        self.properties.draping_thickness_correction = value;
        self
    }

    pub fn draping_angle_1_field(mut self, column: &LookUpTable1DColumn) -> Self {
        match crate::objects::stored_link_path("draping_angle_1_field", column) {
            Ok(path) => self.properties.draping_angle_1_field = path,
            Err(err) => self.error = Some(err),
        }
        self
    }

    pub fn draping_angle_2_field(mut self, column: &LookUpTable1DColumn) -> Self {
        match crate::objects::stored_link_path("draping_angle_2_field", column) {
            Ok(path) => self.properties.draping_angle_2_field = path,
            Err(err) => self.error = Some(err),
        }
        self
    }

    pub fn selection_rules(mut self, rules: &[LinkedSelectionRule]) -> Self {
        for rule in rules {
            match rule.to_message() {
                Ok(message) => self.properties.selection_rules.push(message),
                Err(err) => {
                    self.error = Some(err);
                    break;
                }
            }
        }
        self
    }

    /// Finish the builder, producing an unstored modeling ply.
    pub fn build(self) -> Result<ModelingPly> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
