// ABOUTME: Wire messages of the CAD geometry resource service

//! CAD geometry service messages.

use super::base::StatusType;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(bool, tag = "2")]
    pub locked: bool,
    /// Server-visible path of the geometry source file.
    #[prost(string, tag = "3")]
    pub external_path: String,
    #[prost(double, tag = "4")]
    pub scale_factor: f64,
    #[prost(bool, tag = "5")]
    pub use_default_precision: bool,
    #[prost(double, tag = "6")]
    pub precision: f64,
    #[prost(bool, tag = "7")]
    pub use_default_offset: bool,
    #[prost(double, tag = "8")]
    pub offset: f64,
}

/// Request re-reading the geometry from a source file.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RefreshRequest {
    #[prost(string, tag = "1")]
    pub resource_path: String,
    #[prost(string, tag = "2")]
    pub path: String,
}

/// Triangle surface mesh used to visualize the geometry.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VisualizationMeshReply {
    #[prost(double, repeated, tag = "1")]
    pub vertices: Vec<f64>,
    #[prost(int32, repeated, tag = "2")]
    pub triangles: Vec<i32>,
}
