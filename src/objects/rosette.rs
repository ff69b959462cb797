// ABOUTME: Rosette entity: coordinate system used to orient plies

//! Rosettes.

use crate::api::rosette::Properties;
use crate::error::Result;
use crate::objects::conversions::{triple_from_wire, triple_to_wire};
use crate::objects::enums::StatusType;
use crate::tree::base;
use crate::tree::macros::{
    define_tree_object, grpc_data_property_convert, grpc_data_property_read_only,
    grpc_enum_property_read_only, impl_creatable_object, impl_editable_object, impl_linked_paths,
};

use super::model::Model;

impl_linked_paths!(Properties {
    singles: [],
    lists: [],
    edges: [],
});

define_tree_object! {
    /// A coordinate system defining the reference directions of plies.
    pub struct Rosette {
        collection_label: "rosettes",
        service: "acp.api.v0.rosette.ObjectService",
        properties: crate::api::rosette::Properties,
        supported_since: "1.0.0",
        property_names: ["name", "id", "status", "locked", "origin", "dir1", "dir2"],
    }
}

impl_editable_object!(Rosette);
impl_creatable_object!(Rosette, parent: Model);

impl Rosette {
    pub fn builder() -> RosetteBuilder {
        RosetteBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_data_property_read_only! {
        locked: bool, locked
    }

    grpc_data_property_convert! {
        /// Coordinates of the rosette origin.
        origin, set_origin: (f64, f64, f64), origin,
        from = triple_from_wire, to = triple_to_wire
    }

    grpc_data_property_convert! {
        /// Direction 1 (x-direction) vector of the rosette.
        dir1, set_dir1: (f64, f64, f64), dir1,
        from = triple_from_wire, to = triple_to_wire
    }

    grpc_data_property_convert! {
        /// Direction 2 (y-direction) vector of the rosette.
        dir2, set_dir2: (f64, f64, f64), dir2,
        from = triple_from_wire, to = triple_to_wire
    }
}

/// Builder for unstored [`Rosette`] objects.
#[derive(Debug)]
pub struct RosetteBuilder {
    name: String,
    properties: Properties,
}

impl Default for RosetteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RosetteBuilder {
    pub fn new() -> Self {
        Self {
            name: "Rosette".to_owned(),
            properties: Properties {
                origin: vec![0.0, 0.0, 0.0],
                dir1: vec![1.0, 0.0, 0.0],
                dir2: vec![0.0, 1.0, 0.0],
                ..Default::default()
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn origin(mut self, origin: (f64, f64, f64)) -> Self {
        self.properties.origin = triple_to_wire(origin);
        self
    }

    pub fn dir1(mut self, dir1: (f64, f64, f64)) -> Self {
        self.properties.dir1 = triple_to_wire(dir1);
        self
    }

    pub fn dir2(mut self, dir2: (f64, f64, f64)) -> Self {
        self.properties.dir2 = triple_to_wire(dir2);
        self
    }

    /// Finish the builder, producing an unstored rosette.
    pub fn build(self) -> Result<Rosette> {
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
