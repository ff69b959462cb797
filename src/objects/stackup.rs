// ABOUTME: Stackup entity: an ordered sequence of fabrics with angles

//! Stackups.

use crate::api::stackup::{self, Properties};
use crate::error::{AcpError, Result};
use crate::objects::enums::{StatusType, SymmetryType, WireEnum};
use crate::tree::base::{self, ServerWrapper};
use crate::tree::edge_list::EdgeProperty;
use crate::tree::linked::Linked;
use crate::tree::macros::{
    define_tree_object, grpc_data_property, grpc_data_property_read_only,
    grpc_edge_property_list, grpc_enum_property, grpc_enum_property_read_only,
    impl_creatable_object, impl_editable_object, impl_linked_paths,
};

use super::fabric::Fabric;
use super::model::Model;

impl_linked_paths!(Properties {
    singles: [],
    lists: [],
    edges: [fabrics.fabric],
});

/// One stackup layer: a fabric plus its nominal angle.
#[derive(Clone, Debug, PartialEq)]
pub struct FabricWithAngle {
    pub fabric: Fabric,
    pub angle: f64,
}

impl FabricWithAngle {
    pub fn new(fabric: Fabric, angle: f64) -> Self {
        Self { fabric, angle }
    }
}

impl EdgeProperty for FabricWithAngle {
    type Message = stackup::FabricWithAngle;

    fn to_message(&self) -> Result<Self::Message> {
        let fabric = self.fabric.path_value();
        if fabric.is_empty() {
            return Err(AcpError::invalid_argument(
                "Cannot use an unstored fabric in a stackup.",
            ));
        }
        Ok(stackup::FabricWithAngle {
            fabric,
            angle: self.angle,
        })
    }

    fn from_message(message: &Self::Message, server: &ServerWrapper) -> Result<Self> {
        Ok(Self {
            fabric: Fabric::from_path(&message.fabric, server)?,
            angle: message.angle,
        })
    }
}

define_tree_object! {
    /// An ordered sequence of fabrics, each with a nominal angle.
    pub struct Stackup {
        collection_label: "stackups",
        service: "acp.api.v0.stackup.ObjectService",
        properties: crate::api::stackup::Properties,
        supported_since: "1.0.0",
        property_names: [
            "name", "id", "status", "locked", "symmetry", "topdown", "fabrics",
            "area_price", "thickness",
        ],
    }
}

impl_editable_object!(Stackup);
impl_creatable_object!(Stackup, parent: Model);

impl Stackup {
    pub fn builder() -> StackupBuilder {
        StackupBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_data_property_read_only! {
        locked: bool, locked
    }

    grpc_enum_property! {
        /// Symmetry of the lay-up sequence.
        symmetry, set_symmetry: SymmetryType, symmetry
    }

    grpc_data_property! {
        /// Whether the first fabric is the top layer.
        topdown, set_topdown: bool, topdown
    }

    grpc_edge_property_list! {
        /// The layers of the stackup, in lay-up order.
        fabrics, set_fabrics: FabricWithAngle, fabrics
    }

    grpc_data_property_read_only! {
        /// Price per area of the full stackup.
        area_price: f64, area_price
    }

    grpc_data_property_read_only! {
        /// Total thickness of the stackup.
        thickness: f64, thickness
    }
}

/// Builder for unstored [`Stackup`] objects.
#[derive(Debug)]
pub struct StackupBuilder {
    name: String,
    properties: Properties,
    error: Option<AcpError>,
}

impl Default for StackupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StackupBuilder {
    pub fn new() -> Self {
        Self {
            name: "Stackup".to_owned(),
            properties: Properties {
                topdown: true,
                ..Default::default()
            },
            error: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn symmetry(mut self, symmetry: SymmetryType) -> Self {
        self.properties.symmetry = symmetry.to_wire();
        self
    }

    pub fn topdown(mut self, topdown: bool) -> Self {
        self.properties.topdown = topdown;
        self
    }

    pub fn fabrics(mut self, fabrics: &[FabricWithAngle]) -> Self {
        for fabric in fabrics {
            match fabric.to_message() {
                Ok(message) => self.properties.fabrics.push(message),
                Err(err) => {
                    self.error = Some(err);
                    break;
                }
            }
        }
        self
    }

    /// Finish the builder, producing an unstored stackup.
    pub fn build(self) -> Result<Stackup> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
