// ABOUTME: Wire messages of the model resource service
// ABOUTME: Includes the load/save/update/export endpoints specific to models

//! Model service messages.

use super::base::{StatusType, UnitSystemType};

/// Finite element input format accepted by the FE import endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Format {
    AnsysH5 = 0,
    AnsysCdb = 1,
    AnsysDat = 2,
    AbaqusInp = 3,
    NastranBdf = 4,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(bool, tag = "2")]
    pub use_nodal_thicknesses: bool,
    #[prost(bool, tag = "3")]
    pub draping_offset_correction: bool,
    #[prost(double, tag = "4")]
    pub angle_tolerance: f64,
    #[prost(double, tag = "5")]
    pub relative_thickness_tolerance: f64,
    #[prost(double, tag = "6")]
    pub minimum_analysis_ply_thickness: f64,
    #[prost(enumeration = "UnitSystemType", tag = "7")]
    pub unit_system: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoadFromFileRequest {
    #[prost(string, tag = "1")]
    pub path: String,
}

pub mod load_from_fe_file_request {
    /// Entities that may be skipped while importing an FE file.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum IgnorableEntity {
        Mesh = 0,
        ElementSets = 1,
        Materials = 2,
        CoordinateSystems = 3,
        ShellSections = 4,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoadFromFeFileRequest {
    #[prost(string, tag = "1")]
    pub path: String,
    #[prost(enumeration = "Format", tag = "2")]
    pub format: i32,
    #[prost(
        enumeration = "load_from_fe_file_request::IgnorableEntity",
        repeated,
        tag = "3"
    )]
    pub ignored_entities: Vec<i32>,
    #[prost(bool, tag = "4")]
    pub convert_section_data: bool,
    #[prost(enumeration = "UnitSystemType", tag = "5")]
    pub unit_system: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateRequest {
    #[prost(string, tag = "1")]
    pub resource_path: String,
    /// Only recompute the lay-up relations, not the full model.
    #[prost(bool, tag = "2")]
    pub relations_only: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SaveToFileRequest {
    #[prost(string, tag = "1")]
    pub resource_path: String,
    #[prost(string, tag = "2")]
    pub path: String,
    /// Also store computed results such as analysis plies and solid models.
    #[prost(bool, tag = "3")]
    pub save_cache: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SaveAnalysisModelRequest {
    #[prost(string, tag = "1")]
    pub resource_path: String,
    #[prost(string, tag = "2")]
    pub path: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SaveShellCompositeDefinitionsRequest {
    #[prost(string, tag = "1")]
    pub resource_path: String,
    #[prost(string, tag = "2")]
    pub path: String,
}
