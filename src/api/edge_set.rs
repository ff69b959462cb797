// ABOUTME: Wire messages of the edge set resource service

//! Edge set service messages.

use super::base::StatusType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum EdgeSetType {
    ByReference = 0,
    ByNodes = 1,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(enumeration = "EdgeSetType", tag = "2")]
    pub edge_set_type: i32,
    #[prost(int32, repeated, tag = "3")]
    pub defining_node_labels: Vec<i32>,
    /// Link to the element set whose boundary defines the edge set.
    #[prost(string, tag = "4")]
    pub element_set: String,
    #[prost(double, tag = "5")]
    pub limit_angle: f64,
    #[prost(double, repeated, tag = "6")]
    pub origin: Vec<f64>,
}
