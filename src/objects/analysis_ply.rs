// ABOUTME: Analysis ply entity: read-only per-element ply used in the analysis

//! Analysis plies.

use crate::objects::enums::StatusType;
use crate::tree::macros::{
    define_tree_object, grpc_data_property_read_only, grpc_enum_property_read_only,
    grpc_link_property_read_only, impl_linked_paths,
};

use super::material::Material;

impl_linked_paths!(crate::api::analysis_ply::Properties {
    singles: [material],
    lists: [],
    edges: [],
});

define_tree_object! {
    /// A ply of the analysis model. Read-only.
    pub struct AnalysisPly {
        collection_label: "analysis_plies",
        service: "acp.api.v0.analysis_ply.ObjectService",
        properties: crate::api::analysis_ply::Properties,
        supported_since: "1.0.0",
        property_names: ["name", "id", "status", "material", "angle", "thickness"],
    }
}

impl AnalysisPly {
    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_link_property_read_only! {
        /// Material of the analysis ply.
        material: Material, material
    }

    grpc_data_property_read_only! {
        /// Final angle of the analysis ply.
        angle: f64, angle
    }

    grpc_data_property_read_only! {
        /// Final thickness of the analysis ply.
        thickness: f64, thickness
    }
}
