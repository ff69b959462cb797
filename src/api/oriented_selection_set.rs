// ABOUTME: Wire messages of the oriented selection set resource service

//! Oriented selection set service messages.

use super::base::StatusType;

/// Selection method for the rosettes of an oriented selection set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum RosetteSelectionMethod {
    MinimumAngle = 0,
    MaximumAngle = 1,
    MinimumDistance = 2,
    MinimumAngleSuperposed = 3,
    MinimumDistanceSuperposed = 4,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    /// Links to the element sets the selection is defined on.
    #[prost(string, repeated, tag = "2")]
    pub element_sets: Vec<String>,
    #[prost(double, repeated, tag = "3")]
    pub orientation_point: Vec<f64>,
    #[prost(double, repeated, tag = "4")]
    pub orientation_direction: Vec<f64>,
    /// Links to the rosettes of the selection, in priority order.
    #[prost(string, repeated, tag = "5")]
    pub rosettes: Vec<String>,
    #[prost(enumeration = "RosetteSelectionMethod", tag = "6")]
    pub rosette_selection_method: i32,
}
