// ABOUTME: Wire messages of the solid model resource service

//! Solid model service messages.

use super::base::StatusType;

/// On-disk format of a solid model export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SolidModelExportFormat {
    AnsysH5 = 0,
    AnsysCdb = 1,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(bool, tag = "2")]
    pub active: bool,
    /// Links to the element sets the solid model is extruded from.
    #[prost(string, repeated, tag = "3")]
    pub element_sets: Vec<String>,
    #[prost(double, tag = "4")]
    pub max_element_thickness: f64,
    #[prost(bool, tag = "5")]
    pub delete_bad_elements: bool,
    #[prost(double, tag = "6")]
    pub warping_limit: f64,
}

/// Request exporting the solid model to a file.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportRequest {
    #[prost(string, tag = "1")]
    pub resource_path: String,
    #[prost(string, tag = "2")]
    pub path: String,
    #[prost(enumeration = "SolidModelExportFormat", tag = "3")]
    pub format: i32,
}
