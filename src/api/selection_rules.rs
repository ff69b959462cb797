// ABOUTME: Wire messages of the selection rule resource services
// ABOUTME: Parallel, cylindrical, spherical, tube, boolean and cutoff rules

//! Selection rule service messages.

use super::base::StatusType;

/// How a linked selection rule is combined with its predecessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BooleanOperationType {
    Intersect = 0,
    Add = 1,
    Remove = 2,
}

/// Edge record linking a selection rule into a boolean rule or modeling ply.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LinkedSelectionRule {
    #[prost(string, tag = "1")]
    pub resource_path: String,
    #[prost(enumeration = "BooleanOperationType", tag = "2")]
    pub operation_type: i32,
    #[prost(bool, tag = "3")]
    pub template_rule: bool,
    #[prost(double, tag = "4")]
    pub parameter_1: f64,
    #[prost(double, tag = "5")]
    pub parameter_2: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ParallelSelectionRuleProperties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(bool, tag = "2")]
    pub use_global_coordinate_system: bool,
    #[prost(string, tag = "3")]
    pub rosette: String,
    #[prost(double, repeated, tag = "4")]
    pub origin: Vec<f64>,
    #[prost(double, repeated, tag = "5")]
    pub direction: Vec<f64>,
    #[prost(double, tag = "6")]
    pub lower_limit: f64,
    #[prost(double, tag = "7")]
    pub upper_limit: f64,
    #[prost(bool, tag = "8")]
    pub relative_rule_type: bool,
    #[prost(bool, tag = "9")]
    pub include_rule_type: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CylindricalSelectionRuleProperties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(bool, tag = "2")]
    pub use_global_coordinate_system: bool,
    #[prost(string, tag = "3")]
    pub rosette: String,
    #[prost(double, repeated, tag = "4")]
    pub origin: Vec<f64>,
    #[prost(double, repeated, tag = "5")]
    pub direction: Vec<f64>,
    #[prost(double, tag = "6")]
    pub radius: f64,
    #[prost(bool, tag = "7")]
    pub relative_rule_type: bool,
    #[prost(bool, tag = "8")]
    pub include_rule_type: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SphericalSelectionRuleProperties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(bool, tag = "2")]
    pub use_global_coordinate_system: bool,
    #[prost(string, tag = "3")]
    pub rosette: String,
    #[prost(double, repeated, tag = "4")]
    pub origin: Vec<f64>,
    #[prost(double, tag = "5")]
    pub radius: f64,
    #[prost(bool, tag = "6")]
    pub relative_rule_type: bool,
    #[prost(bool, tag = "7")]
    pub include_rule_type: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TubeSelectionRuleProperties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    /// Link to the edge set defining the tube path.
    #[prost(string, tag = "2")]
    pub edge_set: String,
    #[prost(double, tag = "3")]
    pub outer_radius: f64,
    #[prost(double, tag = "4")]
    pub inner_radius: f64,
    #[prost(bool, tag = "5")]
    pub include_rule_type: bool,
    #[prost(bool, tag = "6")]
    pub extend_endings: bool,
    #[prost(bool, tag = "7")]
    pub symmetrical_extension: bool,
    #[prost(double, repeated, tag = "8")]
    pub head: Vec<f64>,
    #[prost(double, tag = "9")]
    pub head_extension: f64,
    #[prost(double, tag = "10")]
    pub tail_extension: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BooleanSelectionRuleProperties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(message, repeated, tag = "2")]
    pub selection_rules: Vec<LinkedSelectionRule>,
    #[prost(bool, tag = "3")]
    pub include_rule_type: bool,
}

/// Geometric source of a cutoff rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CutoffRuleType {
    Geometry = 0,
    TaperEdge = 1,
}

/// Which ply level the cutoff is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PlyCutoffType {
    ProductionPlyCutoff = 0,
    AnalysisPlyCutoff = 1,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CutoffSelectionRuleProperties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(enumeration = "CutoffRuleType", tag = "2")]
    pub cutoff_rule_type: i32,
    /// Link to the CAD geometry cutting the plies.
    #[prost(string, tag = "3")]
    pub cad_geometry: String,
    /// Link to the edge set the taper starts from.
    #[prost(string, tag = "4")]
    pub taper_edge_set: String,
    #[prost(double, tag = "5")]
    pub offset: f64,
    #[prost(double, tag = "6")]
    pub angle: f64,
    #[prost(enumeration = "PlyCutoffType", tag = "7")]
    pub ply_cutoff_type: i32,
    #[prost(bool, tag = "8")]
    pub ply_tapering: bool,
}
