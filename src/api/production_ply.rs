// ABOUTME: Wire messages of the production ply resource service

//! Production ply service messages.

use super::base::StatusType;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    /// Link to the produced material.
    #[prost(string, tag = "2")]
    pub material: String,
    #[prost(double, tag = "3")]
    pub angle: f64,
}
