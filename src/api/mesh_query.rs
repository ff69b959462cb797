// ABOUTME: Wire messages of the mesh query service

//! Mesh query service messages.
//!
//! The mesh query service answers read-only geometry and data queries for
//! any mesh-bearing resource, addressed by resource path.

/// Full surface mesh of a resource.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MeshDataReply {
    #[prost(int32, repeated, tag = "1")]
    pub node_labels: Vec<i32>,
    /// Flat coordinate array; three components per node.
    #[prost(double, repeated, tag = "2")]
    pub node_coordinates: Vec<f64>,
    #[prost(int32, repeated, tag = "3")]
    pub element_labels: Vec<i32>,
    #[prost(int32, repeated, tag = "4")]
    pub element_types: Vec<i32>,
    /// Flat element connectivity array.
    #[prost(int32, repeated, tag = "5")]
    pub element_nodes: Vec<i32>,
    /// Start offset of each element's nodes in `element_nodes`.
    #[prost(int32, repeated, tag = "6")]
    pub element_nodes_offsets: Vec<i32>,
}

/// Request for elemental or nodal data of a resource.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DataRequest {
    #[prost(string, tag = "1")]
    pub resource_path: String,
    /// Names of the requested data fields.
    #[prost(string, repeated, tag = "2")]
    pub data_types: Vec<String>,
}

/// One returned data field.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DataField {
    #[prost(string, tag = "1")]
    pub name: String,
    /// Flat value array; `num_components` values per label.
    #[prost(double, repeated, tag = "2")]
    pub values: Vec<f64>,
    #[prost(int32, tag = "3")]
    pub num_components: i32,
}

/// Reply carrying parallel label and field arrays.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DataReply {
    #[prost(int32, repeated, tag = "1")]
    pub labels: Vec<i32>,
    #[prost(message, repeated, tag = "2")]
    pub fields: Vec<DataField>,
}
