// ABOUTME: Production ply entity: read-only ply generated by the lay-up computation

//! Production plies.

use crate::objects::enums::StatusType;
use crate::tree::macros::{
    define_tree_object, grpc_collection_property_read_only, grpc_data_property_read_only,
    grpc_enum_property_read_only, grpc_link_property_read_only, impl_linked_paths,
};

use super::analysis_ply::AnalysisPly;
use super::material::Material;

impl_linked_paths!(crate::api::production_ply::Properties {
    singles: [material],
    lists: [],
    edges: [],
});

define_tree_object! {
    /// A ply produced by the lay-up computation. Read-only.
    pub struct ProductionPly {
        collection_label: "production_plies",
        service: "acp.api.v0.production_ply.ObjectService",
        properties: crate::api::production_ply::Properties,
        supported_since: "1.0.0",
        property_names: ["name", "id", "status", "material", "angle", "analysis_plies"],
    }
}

impl ProductionPly {
    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_link_property_read_only! {
        /// Material the ply is produced with.
        material: Material, material
    }

    grpc_data_property_read_only! {
        /// Production angle of the ply.
        angle: f64, angle
    }

    grpc_collection_property_read_only! {
        /// The analysis plies generated from this ply.
        analysis_plies: AnalysisPly
    }
}
