// ABOUTME: Wire messages of the modeling ply resource service

//! Modeling ply service messages.

use super::base::StatusType;

/// Draping formulation of a ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DrapingType {
    NoDraping = 0,
    Draping = 1,
    TabularValues = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    /// Link to the ply material (fabric, stackup or sub-laminate).
    #[prost(string, tag = "2")]
    pub ply_material: String,
    #[prost(string, repeated, tag = "3")]
    pub oriented_selection_sets: Vec<String>,
    #[prost(double, tag = "4")]
    pub ply_angle: f64,
    #[prost(int32, tag = "5")]
    pub number_of_layers: i32,
    #[prost(bool, tag = "6")]
    pub active: bool,
    /// Global ply order; 0 lets the server assign a consistent number.
    #[prost(int32, tag = "7")]
    pub global_ply_nr: i32,
    #[prost(enumeration = "DrapingType", tag = "8")]
    pub draping: i32,
    #[prost(double, repeated, tag = "9")]
    pub draping_seed_point: Vec<f64>,
    #[prost(bool, tag = "10")]
    pub auto_draping_direction: bool,
    #[prost(double, repeated, tag = "11")]
    pub draping_direction: Vec<f64>,
    #[prost(double, tag = "12")]
    pub draping_mesh_size: f64,
    #[prost(bool, tag = "13")]
    pub draping_thickness_correction: bool,
    /// Link to the lookup table column with the first draping correction angle.
    #[prost(string, tag = "14")]
    pub draping_angle_1_field: String,
    /// Link to the lookup table column with the second draping correction angle.
    #[prost(string, tag = "15")]
    pub draping_angle_2_field: String,
    #[prost(message, repeated, tag = "16")]
    pub selection_rules: Vec<super::selection_rules::LinkedSelectionRule>,
}
