// ABOUTME: Wire messages of the 1D lookup table and its column services

//! Lookup table service messages.

use super::base::StatusType;

/// Value shape of a lookup table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LookUpTableColumnValueType {
    Scalar = 0,
    Direction = 1,
}

/// Physical dimension of a lookup table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PhysicalDimension {
    Dimensionless = 0,
    Length = 1,
    Angle = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(double, repeated, tag = "2")]
    pub origin: Vec<f64>,
    #[prost(double, repeated, tag = "3")]
    pub direction: Vec<f64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ColumnProperties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(enumeration = "LookUpTableColumnValueType", tag = "2")]
    pub value_type: i32,
    #[prost(enumeration = "PhysicalDimension", tag = "3")]
    pub dimension_type: i32,
    /// Flat value array; rows of three components for direction columns.
    #[prost(double, repeated, tag = "4")]
    pub values: Vec<f64>,
}
