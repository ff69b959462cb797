// ABOUTME: Fabric entity: a single-layer ply material with thickness and price

//! Fabrics.

use crate::api::fabric::Properties;
use crate::error::Result;
use crate::objects::enums::{
    CutoffMaterialType, DrapingMaterialType, DropoffMaterialType, StatusType, WireEnum,
};
use crate::tree::base;
use crate::tree::macros::{
    define_tree_object, grpc_data_property, grpc_data_property_read_only, grpc_enum_property,
    grpc_enum_property_read_only, grpc_link_property, impl_creatable_object, impl_editable_object,
    impl_linked_paths,
};

use super::material::Material;
use super::model::Model;

impl_linked_paths!(Properties {
    singles: [material],
    lists: [],
    edges: [],
});

define_tree_object! {
    /// A single-layer ply material defined by a material, a thickness, and
    /// draping parameters.
    pub struct Fabric {
        collection_label: "fabrics",
        service: "acp.api.v0.fabric.ObjectService",
        properties: crate::api::fabric::Properties,
        supported_since: "1.0.0",
        property_names: [
            "name", "id", "status", "locked", "material", "thickness", "area_price",
            "ignore_for_postprocessing", "drop_off_material_handling",
            "cut_off_material_handling", "draping_material_model", "draping_ud_coefficient",
        ],
    }
}

impl_editable_object!(Fabric);
impl_creatable_object!(Fabric, parent: Model);

impl Fabric {
    pub fn builder() -> FabricBuilder {
        FabricBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_data_property_read_only! {
        locked: bool, locked
    }

    grpc_link_property! {
        /// Material of the fabric.
        material, set_material: Material, material
    }

    grpc_data_property! {
        /// Thickness of the fabric.
        thickness, set_thickness: f64, thickness
    }

    grpc_data_property! {
        /// Price per area of the fabric.
        area_price, set_area_price: f64, area_price
    }

    grpc_data_property! {
        /// Skip plies made of this fabric in the failure computation.
        ignore_for_postprocessing, set_ignore_for_postprocessing: bool, ignore_for_postprocessing
    }

    grpc_enum_property! {
        /// Material of drop-off elements in the solid model extrusion.
        drop_off_material_handling, set_drop_off_material_handling: DropoffMaterialType,
        drop_off_material_handling
    }

    grpc_enum_property! {
        /// Material of cut-off elements in solid models when cut-off
        /// geometries are active.
        cut_off_material_handling, set_cut_off_material_handling: CutoffMaterialType,
        cut_off_material_handling
    }

    grpc_enum_property! {
        /// Draping model of the fabric.
        draping_material_model, set_draping_material_model: DrapingMaterialType,
        draping_material_model
    }

    grpc_data_property! {
        /// Draping coefficient of the uni-directional draping model, in the
        /// range 0 to 1.
        draping_ud_coefficient, set_draping_ud_coefficient: f64, draping_ud_coefficient,
        writable_since = "1.1.0"
    }
}

/// Builder for unstored [`Fabric`] objects.
#[derive(Debug)]
pub struct FabricBuilder {
    name: String,
    properties: Properties,
    error: Option<crate::error::AcpError>,
}

impl Default for FabricBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FabricBuilder {
    pub fn new() -> Self {
        Self {
            name: "Fabric".to_owned(),
            properties: Properties::default(),
            error: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn material(mut self, material: &Material) -> Self {
        match super::stored_link_path("material", material) {
            Ok(path) => self.properties.material = path,
            Err(err) => self.error = Some(err),
        }
        self
    }

    pub fn thickness(mut self, thickness: f64) -> Self {
        self.properties.thickness = thickness;
        self
    }

    pub fn area_price(mut self, area_price: f64) -> Self {
        self.properties.area_price = area_price;
        self
    }

    pub fn ignore_for_postprocessing(mut self, ignore: bool) -> Self {
        self.properties.ignore_for_postprocessing = ignore;
        self
    }

    pub fn drop_off_material_handling(mut self, value: DropoffMaterialType) -> Self {
        self.properties.drop_off_material_handling = value.to_wire();
        self
    }

    pub fn cut_off_material_handling(mut self, value: CutoffMaterialType) -> Self {
        self.properties.cut_off_material_handling = value.to_wire();
        self
    }

    pub fn draping_material_model(mut self, value: DrapingMaterialType) -> Self {
        self.properties.draping_material_model = value.to_wire();
        self
    }

    pub fn draping_ud_coefficient(mut self, coefficient: f64) -> Self {
        self.properties.draping_ud_coefficient = coefficient;
        self
    }

    /// Finish the builder, producing an unstored fabric.
    pub fn build(self) -> Result<Fabric> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
