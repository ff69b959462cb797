// ABOUTME: Wire messages of the sensor resource service

//! Sensor service messages.

use super::base::StatusType;

/// What a sensor measures over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SensorType {
    SensorByArea = 0,
    SensorByMaterial = 1,
    SensorByPlies = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(bool, tag = "2")]
    pub active: bool,
    #[prost(enumeration = "SensorType", tag = "3")]
    pub sensor_type: i32,
    /// Links to the measured entities; the allowed types depend on the
    /// sensor type.
    #[prost(string, repeated, tag = "4")]
    pub entities: Vec<String>,
    #[prost(double, tag = "5")]
    pub covered_area: f64,
    #[prost(double, tag = "6")]
    pub modeling_ply_area: f64,
    #[prost(double, tag = "7")]
    pub production_ply_area: f64,
    #[prost(double, tag = "8")]
    pub price: f64,
    #[prost(double, tag = "9")]
    pub weight: f64,
}
