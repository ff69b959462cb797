// ABOUTME: Wire messages of the fabric resource service

//! Fabric service messages.

use super::base::StatusType;

/// Material of drop-off elements in the solid model extrusion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DropoffMaterialType {
    Global = 0,
    Custom = 1,
}

/// Material of cut-off elements in solid models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CutoffMaterialType {
    Computed = 0,
    Custom = 1,
    Global = 2,
}

/// Draping model of a fabric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DrapingMaterialType {
    Woven = 0,
    Ud = 1,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(bool, tag = "2")]
    pub locked: bool,
    /// Link to the fabric material.
    #[prost(string, tag = "3")]
    pub material: String,
    #[prost(double, tag = "4")]
    pub thickness: f64,
    #[prost(double, tag = "5")]
    pub area_price: f64,
    #[prost(bool, tag = "6")]
    pub ignore_for_postprocessing: bool,
    #[prost(enumeration = "DropoffMaterialType", tag = "7")]
    pub drop_off_material_handling: i32,
    #[prost(enumeration = "CutoffMaterialType", tag = "8")]
    pub cut_off_material_handling: i32,
    #[prost(enumeration = "DrapingMaterialType", tag = "9")]
    pub draping_material_model: i32,
    #[prost(double, tag = "10")]
    pub draping_ud_coefficient: f64,
}
