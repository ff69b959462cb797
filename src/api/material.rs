// ABOUTME: Wire messages of the material resource service
// ABOUTME: Includes the nested property set messages (density, engineering constants)

//! Material service messages.
//!
//! A material carries nested *property sets*. A property set holds one
//! `values` row per field-variable sample: exactly one row for a constant
//! property set, a full table for a variable one. The engineering constants
//! property set is polymorphic (isotropic or orthotropic), expressed as a
//! protobuf oneof.

use super::base::StatusType;

/// Ply type of a material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PlyType {
    Regular = 0,
    Woven = 1,
    HomogeneousCore = 2,
    HoneycombCore = 3,
    UndirectionalFabric = 4,
    Isotropic = 5,
}

/// One field variable of a variable property set.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldVariable {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(double, repeated, tag = "2")]
    pub values: Vec<f64>,
    #[prost(double, tag = "3")]
    pub default: f64,
    #[prost(double, tag = "4")]
    pub lower_limit: f64,
    #[prost(double, tag = "5")]
    pub upper_limit: f64,
}

/// Interpolation settings of a variable property set.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InterpolationOptions {
    #[prost(string, tag = "1")]
    pub algorithm: String,
    #[prost(bool, tag = "2")]
    pub cached: bool,
    #[prost(bool, tag = "3")]
    pub normalized: bool,
}

pub mod density_property_set {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Data {
        #[prost(double, tag = "1")]
        pub rho: f64,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DensityPropertySet {
    #[prost(message, repeated, tag = "1")]
    pub values: Vec<density_property_set::Data>,
    #[prost(message, repeated, tag = "2")]
    pub field_variables: Vec<FieldVariable>,
    #[prost(message, optional, tag = "3")]
    pub interpolation_options: Option<InterpolationOptions>,
}

pub mod isotropic_engineering_constants_property_set {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Data {
        #[prost(double, tag = "1")]
        pub e: f64,
        #[prost(double, tag = "2")]
        pub nu: f64,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IsotropicEngineeringConstantsPropertySet {
    #[prost(message, repeated, tag = "1")]
    pub values: Vec<isotropic_engineering_constants_property_set::Data>,
    #[prost(message, repeated, tag = "2")]
    pub field_variables: Vec<FieldVariable>,
    #[prost(message, optional, tag = "3")]
    pub interpolation_options: Option<InterpolationOptions>,
}

pub mod orthotropic_engineering_constants_property_set {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Data {
        #[prost(double, tag = "1")]
        pub e1: f64,
        #[prost(double, tag = "2")]
        pub e2: f64,
        #[prost(double, tag = "3")]
        pub e3: f64,
        #[prost(double, tag = "4")]
        pub nu12: f64,
        #[prost(double, tag = "5")]
        pub nu23: f64,
        #[prost(double, tag = "6")]
        pub nu13: f64,
        #[prost(double, tag = "7")]
        pub g12: f64,
        #[prost(double, tag = "8")]
        pub g23: f64,
        #[prost(double, tag = "9")]
        pub g31: f64,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OrthotropicEngineeringConstantsPropertySet {
    #[prost(message, repeated, tag = "1")]
    pub values: Vec<orthotropic_engineering_constants_property_set::Data>,
    #[prost(message, repeated, tag = "2")]
    pub field_variables: Vec<FieldVariable>,
    #[prost(message, optional, tag = "3")]
    pub interpolation_options: Option<InterpolationOptions>,
}

pub mod property_sets {
    /// Engineering constants come in an isotropic and an orthotropic shape.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum EngineeringConstants {
        #[prost(message, tag = "2")]
        Isotropic(super::IsotropicEngineeringConstantsPropertySet),
        #[prost(message, tag = "3")]
        Orthotropic(super::OrthotropicEngineeringConstantsPropertySet),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PropertySets {
    #[prost(message, optional, tag = "1")]
    pub density: Option<DensityPropertySet>,
    #[prost(oneof = "property_sets::EngineeringConstants", tags = "2, 3")]
    pub engineering_constants: Option<property_sets::EngineeringConstants>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(bool, tag = "2")]
    pub locked: bool,
    #[prost(enumeration = "PlyType", tag = "3")]
    pub ply_type: i32,
    #[prost(message, optional, tag = "4")]
    pub property_sets: Option<PropertySets>,
}

/// Export format of the material save endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SaveToFileFormat {
    AnsysXml = 0,
}

/// Request writing all materials of a model to a MatML file.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SaveToFileRequest {
    #[prost(string, tag = "1")]
    pub collection_path: String,
    #[prost(string, tag = "2")]
    pub path: String,
    #[prost(enumeration = "SaveToFileFormat", tag = "3")]
    pub format: i32,
}
