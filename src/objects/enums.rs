// ABOUTME: Client-side string enums with explicit wire conversions
// ABOUTME: Unknown wire values surface as invalid-argument errors

//! Client-side enums.
//!
//! Server enums travel as integers; the client exposes them as Rust enums
//! whose string form is the lowercase snake-case variant name. Conversions
//! are explicit so that a value the client does not know fails loudly
//! instead of silently mapping to a default.

use crate::error::{AcpError, Result};

/// Conversion contract between a client enum and its wire integer.
pub trait WireEnum: Sized + Copy {
    fn to_wire(self) -> i32;
    fn from_wire(value: i32) -> Result<Self>;
    /// The canonical string form of the value.
    fn as_str(self) -> &'static str;
    fn from_str_value(value: &str) -> Result<Self>;
}

macro_rules! define_wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $wire:literal as $string:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $wire),+
        }

        impl $crate::objects::enums::WireEnum for $name {
            fn to_wire(self) -> i32 {
                self as i32
            }

            fn from_wire(value: i32) -> $crate::error::Result<Self> {
                match value {
                    $( $wire => Ok(Self::$variant), )+
                    _ => Err($crate::error::AcpError::invalid_argument(format!(
                        "Invalid wire value '{value}' for enum '{}'.",
                        stringify!($name)
                    ))),
                }
            }

            fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $string, )+
                }
            }

            fn from_str_value(value: &str) -> $crate::error::Result<Self> {
                match value {
                    $( $string => Ok(Self::$variant), )+
                    _ => Err($crate::error::AcpError::invalid_argument(format!(
                        "Invalid value '{value}' for enum '{}'.",
                        stringify!($name)
                    ))),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::objects::enums::WireEnum::as_str(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::AcpError;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::objects::enums::WireEnum::from_str_value(value)
            }
        }
    };
}
pub(crate) use define_wire_enum;

define_wire_enum! {
    /// Whether an object is up to date with respect to the lay-up
    /// computation.
    pub enum StatusType {
        Uptodate = 0 as "uptodate",
        Notuptodate = 1 as "notuptodate",
    }
}

define_wire_enum! {
    /// Unit system a model is defined in.
    pub enum UnitSystemType {
        Undefined = 0 as "undefined",
        Si = 1 as "si",
        Mks = 2 as "mks",
        Umks = 3 as "umks",
        Cgs = 4 as "cgs",
        Mpa = 5 as "mpa",
        Bft = 6 as "bft",
        Bin = 7 as "bin",
    }
}

define_wire_enum! {
    /// Ply type of a material.
    pub enum PlyType {
        Regular = 0 as "regular",
        Woven = 1 as "woven",
        HomogeneousCore = 2 as "homogeneous_core",
        HoneycombCore = 3 as "honeycomb_core",
        UndirectionalFabric = 4 as "undirectional_fabric",
        Isotropic = 5 as "isotropic",
    }
}

define_wire_enum! {
    /// Material of drop-off elements in the solid model extrusion.
    pub enum DropoffMaterialType {
        Global = 0 as "global",
        Custom = 1 as "custom",
    }
}

define_wire_enum! {
    /// Material of cut-off elements in solid models.
    pub enum CutoffMaterialType {
        Computed = 0 as "computed",
        Custom = 1 as "custom",
        Global = 2 as "global",
    }
}

define_wire_enum! {
    /// Draping model of a fabric.
    pub enum DrapingMaterialType {
        Woven = 0 as "woven",
        Ud = 1 as "ud",
    }
}

define_wire_enum! {
    /// Symmetry of a stackup lay-up sequence.
    pub enum SymmetryType {
        NoSymmetry = 0 as "no_symmetry",
        EvenSymmetry = 1 as "even_symmetry",
        OddSymmetry = 2 as "odd_symmetry",
    }
}

define_wire_enum! {
    /// How an edge set is defined.
    pub enum EdgeSetType {
        ByReference = 0 as "by_reference",
        ByNodes = 1 as "by_nodes",
    }
}

define_wire_enum! {
    /// Selection method for the rosettes of an oriented selection set.
    pub enum RosetteSelectionMethod {
        MinimumAngle = 0 as "minimum_angle",
        MaximumAngle = 1 as "maximum_angle",
        MinimumDistance = 2 as "minimum_distance",
        MinimumAngleSuperposed = 3 as "minimum_angle_superposed",
        MinimumDistanceSuperposed = 4 as "minimum_distance_superposed",
    }
}

define_wire_enum! {
    /// How a linked selection rule combines with its predecessors.
    pub enum BooleanOperationType {
        Intersect = 0 as "intersect",
        Add = 1 as "add",
        Remove = 2 as "remove",
    }
}

define_wire_enum! {
    /// Geometric source of a cutoff rule.
    pub enum CutoffRuleType {
        Geometry = 0 as "geometry",
        TaperEdge = 1 as "taper_edge",
    }
}

define_wire_enum! {
    /// Which ply level a cutoff is applied to.
    pub enum PlyCutoffType {
        ProductionPlyCutoff = 0 as "production_ply_cutoff",
        AnalysisPlyCutoff = 1 as "analysis_ply_cutoff",
    }
}

define_wire_enum! {
    /// Draping formulation of a modeling ply.
    pub enum DrapingType {
        NoDraping = 0 as "no_draping",
        Draping = 1 as "draping",
        TabularValues = 2 as "tabular_values",
    }
}

define_wire_enum! {
    /// Value shape of a lookup table column.
    pub enum LookUpTableColumnValueType {
        Scalar = 0 as "scalar",
        Direction = 1 as "direction",
    }
}

define_wire_enum! {
    /// Physical dimension of a lookup table column.
    pub enum PhysicalDimension {
        Dimensionless = 0 as "dimensionless",
        Length = 1 as "length",
        Angle = 2 as "angle",
    }
}

define_wire_enum! {
    /// What a sensor measures over.
    pub enum SensorType {
        SensorByArea = 0 as "sensor_by_area",
        SensorByMaterial = 1 as "sensor_by_material",
        SensorByPlies = 2 as "sensor_by_plies",
    }
}

define_wire_enum! {
    /// On-disk format of a solid model export.
    pub enum SolidModelExportFormat {
        AnsysH5 = 0 as "ansys:h5",
        AnsysCdb = 1 as "ansys:cdb",
    }
}

define_wire_enum! {
    /// Input format of the FE import endpoint.
    pub enum FeFormat {
        AnsysH5 = 0 as "ansys:h5",
        AnsysCdb = 1 as "ansys:cdb",
        AnsysDat = 2 as "ansys:dat",
        AbaqusInp = 3 as "abaqus:inp",
        NastranBdf = 4 as "nastran:bdf",
    }
}

define_wire_enum! {
    /// Entities that may be skipped while importing an FE file.
    pub enum IgnorableEntity {
        Mesh = 0 as "mesh",
        ElementSets = 1 as "element_sets",
        Materials = 2 as "materials",
        CoordinateSystems = 3 as "coordinate_systems",
        ShellSections = 4 as "shell_sections",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_roundtrip() {
        for value in [
            DrapingType::NoDraping,
            DrapingType::Draping,
            DrapingType::TabularValues,
        ] {
            assert_eq!(DrapingType::from_wire(value.to_wire()).unwrap(), value);
        }
    }

    #[test]
    fn test_unknown_wire_value_is_rejected() {
        let err = StatusType::from_wire(99).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_string_form() {
        assert_eq!(RosetteSelectionMethod::MinimumAngle.to_string(), "minimum_angle");
        assert_eq!(
            "maximum_angle".parse::<RosetteSelectionMethod>().unwrap(),
            RosetteSelectionMethod::MaximumAngle
        );
        assert_eq!(FeFormat::AnsysCdb.to_string(), "ansys:cdb");
    }

    #[test]
    fn test_unknown_string_is_rejected() {
        assert!("no_such_value".parse::<DrapingType>().is_err());
    }
}
