// ABOUTME: Material entity with nested property sets

//! Materials.

pub mod property_sets;

use crate::api::material::{self as wire, Properties};
use crate::error::Result;
use crate::objects::enums::{PlyType, StatusType, WireEnum};
use crate::tree::base;
use crate::tree::macros::{
    define_tree_object, grpc_data_property_read_only, grpc_enum_property,
    grpc_enum_property_read_only, impl_creatable_object, impl_editable_object, impl_linked_paths,
};
use crate::tree::property;

use super::model::Model;
use property_sets::{
    density_from_wire, density_to_wire, engineering_constants_from_wire,
    engineering_constants_to_wire, ConstantDensity, ConstantEngineeringConstants,
    DensityPropertySet, EngineeringConstantsPropertySet,
};

impl_linked_paths!(Properties {
    singles: [],
    lists: [],
    edges: [],
});

define_tree_object! {
    /// A material with nested physical property sets.
    pub struct Material {
        collection_label: "materials",
        service: "acp.api.v0.material.ObjectService",
        properties: crate::api::material::Properties,
        supported_since: "1.0.0",
        property_names: [
            "name", "id", "status", "locked", "ply_type", "density",
            "engineering_constants",
        ],
    }
}

impl_editable_object!(Material);
impl_creatable_object!(Material, parent: Model);

impl Material {
    pub fn builder() -> MaterialBuilder {
        MaterialBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_data_property_read_only! {
        locked: bool, locked
    }

    grpc_enum_property! {
        /// Ply type of the material.
        ply_type, set_ply_type: PlyType, ply_type
    }

    /// The density property set, if defined.
    pub async fn density(&self) -> Result<Option<DensityPropertySet>> {
        property::get_property(self, "density", None, |state| {
            state
                .properties
                .property_sets
                .as_ref()
                .and_then(|sets| sets.density.as_ref())
                .map(density_from_wire)
                .transpose()
        })
        .await
    }

    /// Replace the density property set with a constant value; `None`
    /// removes the set.
    pub async fn set_density(&self, value: Option<ConstantDensity>) -> Result<()> {
        let wire_value = value.as_ref().map(density_to_wire);
        property::set_property(
            self,
            "density",
            None,
            wire_value,
            |state| {
                state
                    .properties
                    .property_sets
                    .as_ref()
                    .and_then(|sets| sets.density.clone())
            },
            |state, value| {
                state
                    .properties
                    .property_sets
                    .get_or_insert_with(wire::PropertySets::default)
                    .density = value;
            },
        )
        .await
    }

    /// The engineering constants property set, if defined. The concrete
    /// shape (isotropic or orthotropic, constant or variable) is recovered
    /// from the payload.
    pub async fn engineering_constants(
        &self,
    ) -> Result<Option<EngineeringConstantsPropertySet>> {
        property::get_property(self, "engineering_constants", None, |state| {
            state
                .properties
                .property_sets
                .as_ref()
                .and_then(|sets| sets.engineering_constants.as_ref())
                .map(engineering_constants_from_wire)
                .transpose()
        })
        .await
    }

    /// Replace the engineering constants with a constant value; `None`
    /// removes the set.
    pub async fn set_engineering_constants(
        &self,
        value: Option<ConstantEngineeringConstants>,
    ) -> Result<()> {
        let wire_value = value.as_ref().map(engineering_constants_to_wire);
        property::set_property(
            self,
            "engineering_constants",
            None,
            wire_value,
            |state| {
                state
                    .properties
                    .property_sets
                    .as_ref()
                    .and_then(|sets| sets.engineering_constants.clone())
            },
            |state, value| {
                state
                    .properties
                    .property_sets
                    .get_or_insert_with(wire::PropertySets::default)
                    .engineering_constants = value;
            },
        )
        .await
    }
}

/// Builder for unstored [`Material`] objects.
#[derive(Debug)]
pub struct MaterialBuilder {
    name: String,
    properties: Properties,
}

impl Default for MaterialBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialBuilder {
    pub fn new() -> Self {
        Self {
            name: "Material".to_owned(),
            properties: Properties::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn ply_type(mut self, ply_type: PlyType) -> Self {
        self.properties.ply_type = ply_type.to_wire();
        self
    }

    pub fn density(mut self, density: ConstantDensity) -> Self {
        self.properties
            .property_sets
            .get_or_insert_with(wire::PropertySets::default)
            .density = Some(density_to_wire(&density));
        self
    }

    pub fn engineering_constants(mut self, constants: ConstantEngineeringConstants) -> Self {
        self.properties
            .property_sets
            .get_or_insert_with(wire::PropertySets::default)
            .engineering_constants = Some(engineering_constants_to_wire(&constants));
        self
    }

    /// Finish the builder, producing an unstored material.
    pub fn build(self) -> Result<Material> {
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
