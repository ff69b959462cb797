// ABOUTME: Sensor entity: measures price, weight and area over selected entities

//! Sensors.

use crate::error::Result;
use crate::objects::enums::{SensorType, StatusType, WireEnum};
use crate::tree::base;
use crate::tree::macros::{
    define_linked_union, define_tree_object, grpc_data_property, grpc_data_property_read_only,
    grpc_enum_property, grpc_enum_property_read_only, grpc_linked_object_list,
    impl_creatable_object, impl_editable_object, impl_linked_paths,
};

use super::element_set::ElementSet;
use super::fabric::Fabric;
use super::material::Material;
use super::model::Model;
use super::modeling_ply::ModelingPly;
use super::oriented_selection_set::OrientedSelectionSet;
use super::stackup::Stackup;

impl_linked_paths!(crate::api::sensor::Properties {
    singles: [],
    lists: [entities],
    edges: [],
});

define_linked_union! {
    /// Entities a sensor can measure over; the allowed subset depends on
    /// the sensor type.
    pub enum SensorEntity {
        Material(Material),
        Fabric(Fabric),
        Stackup(Stackup),
        ElementSet(ElementSet),
        OrientedSelectionSet(OrientedSelectionSet),
        ModelingPly(ModelingPly),
    }
}

define_tree_object! {
    /// Measures price, weight and covered area over selected entities.
    pub struct Sensor {
        collection_label: "sensors",
        service: "acp.api.v0.sensor.ObjectService",
        properties: crate::api::sensor::Properties,
        supported_since: "1.2.0",
        property_names: [
            "name", "id", "status", "active", "sensor_type", "entities",
            "covered_area", "modeling_ply_area", "production_ply_area",
            "price", "weight",
        ],
    }
}

impl_editable_object!(Sensor);
impl_creatable_object!(Sensor, parent: Model);

impl Sensor {
    pub fn builder() -> SensorBuilder {
        SensorBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_data_property! {
        /// Inactive sensors are not evaluated.
        active, set_active: bool, active
    }

    grpc_enum_property! {
        /// What the sensor measures over.
        sensor_type, set_sensor_type: SensorType, sensor_type
    }

    grpc_linked_object_list! {
        /// The measured entities.
        entities, set_entities: SensorEntity, entities
    }

    grpc_data_property_read_only! {
        /// Area covered by the measured entities.
        covered_area: f64, covered_area
    }

    grpc_data_property_read_only! {
        /// Total modeling ply area.
        modeling_ply_area: f64, modeling_ply_area
    }

    grpc_data_property_read_only! {
        /// Total production ply area.
        production_ply_area: f64, production_ply_area
    }

    grpc_data_property_read_only! {
        /// Total price of the measured lay-up.
        price: f64, price
    }

    grpc_data_property_read_only! {
        /// Total weight of the measured lay-up.
        weight: f64, weight
    }
}

/// Builder for unstored [`Sensor`] objects.
#[derive(Debug)]
pub struct SensorBuilder {
    name: String,
    properties: crate::api::sensor::Properties,
    error: Option<crate::error::AcpError>,
}

impl Default for SensorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorBuilder {
    pub fn new() -> Self {
        Self {
            name: "Sensor".to_owned(),
            properties: crate::api::sensor::Properties {
                active: true,
                ..Default::default()
            },
            error: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.properties.active = active;
        self
    }

    pub fn sensor_type(mut self, sensor_type: SensorType) -> Self {
        self.properties.sensor_type = sensor_type.to_wire();
        self
    }

    pub fn entities(mut self, entities: &[SensorEntity]) -> Self {
        for entity in entities {
            match crate::objects::stored_link_path("entities", entity) {
                Ok(path) => self.properties.entities.push(path),
                Err(err) => {
                    self.error = Some(err);
                    break;
                }
            }
        }
        self
    }

    /// Finish the builder, producing an unstored sensor.
    pub fn build(self) -> Result<Sensor> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
