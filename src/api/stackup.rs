// ABOUTME: Wire messages of the stackup resource service

//! Stackup service messages.

use super::base::StatusType;

/// Symmetry of the stackup lay-up sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SymmetryType {
    NoSymmetry = 0,
    EvenSymmetry = 1,
    OddSymmetry = 2,
}

/// One stackup layer: a fabric link plus its nominal angle.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FabricWithAngle {
    #[prost(string, tag = "1")]
    pub fabric: String,
    #[prost(double, tag = "2")]
    pub angle: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(bool, tag = "2")]
    pub locked: bool,
    #[prost(enumeration = "SymmetryType", tag = "3")]
    pub symmetry: i32,
    #[prost(bool, tag = "4")]
    pub topdown: bool,
    #[prost(message, repeated, tag = "5")]
    pub fabrics: Vec<FabricWithAngle>,
    #[prost(double, tag = "6")]
    pub area_price: f64,
    #[prost(double, tag = "7")]
    pub thickness: f64,
}
