// ABOUTME: Wire messages of the analysis ply resource service

//! Analysis ply service messages.

use super::base::StatusType;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    /// Link to the analysis material.
    #[prost(string, tag = "2")]
    pub material: String,
    #[prost(double, tag = "3")]
    pub angle: f64,
    #[prost(double, tag = "4")]
    pub thickness: f64,
}
