// ABOUTME: Wire messages of the rosette resource service

//! Rosette service messages.

use super::base::StatusType;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(bool, tag = "2")]
    pub locked: bool,
    #[prost(double, repeated, tag = "3")]
    pub origin: Vec<f64>,
    #[prost(double, repeated, tag = "4")]
    pub dir1: Vec<f64>,
    #[prost(double, repeated, tag = "5")]
    pub dir2: Vec<f64>,
}
