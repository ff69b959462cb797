// ABOUTME: Entity types of the ACP object tree
// ABOUTME: Declarative handle definitions plus the polymorphic resolver

//! Entity types.
//!
//! Each entity file declares one handle type: its collection label, gRPC
//! service, properties payload and accessor set. The shared behavior lives
//! in [`crate::tree`]; the files here stay declarative.

pub mod any;
pub mod analysis_ply;
pub mod cad_geometry;
pub(crate) mod conversions;
pub mod edge_set;
pub mod element_set;
pub mod enums;
pub mod fabric;
pub mod lookup_table;
pub mod material;
pub mod model;
pub mod modeling_group;
pub mod modeling_ply;
pub mod oriented_selection_set;
pub mod production_ply;
pub mod rosette;
pub mod selection_rules;
pub mod sensor;
pub mod solid_model;
pub mod stackup;

pub use any::AnyTreeObject;
pub use analysis_ply::AnalysisPly;
pub use cad_geometry::{CadGeometry, CadGeometryBuilder, TriangleMesh};
pub use edge_set::{EdgeSet, EdgeSetBuilder};
pub use element_set::{ElementSet, ElementSetBuilder};
pub use fabric::{Fabric, FabricBuilder};
pub use lookup_table::{
    LookUpTable1D, LookUpTable1DBuilder, LookUpTable1DColumn, LookUpTable1DColumnBuilder,
};
pub use material::{Material, MaterialBuilder};
pub use model::{Model, ModelElementalData, ModelNodalData};
pub use modeling_group::{ModelingGroup, ModelingGroupBuilder};
pub use modeling_ply::{
    ModelingPly, ModelingPlyBuilder, ModelingPlyElementalData, ModelingPlyNodalData, PlyMaterial,
};
pub use oriented_selection_set::{
    OrientedSelectionSet, OrientedSelectionSetBuilder, OrientedSelectionSetElementalData,
    OrientedSelectionSetNodalData,
};
pub use production_ply::ProductionPly;
pub use rosette::{Rosette, RosetteBuilder};
pub use selection_rules::{
    BooleanSelectionRule, BooleanSelectionRuleBuilder, CutoffSelectionRule,
    CutoffSelectionRuleBuilder, CylindricalSelectionRule, CylindricalSelectionRuleBuilder,
    LinkableSelectionRule, LinkedSelectionRule, ParallelSelectionRule,
    ParallelSelectionRuleBuilder, SphericalSelectionRule, SphericalSelectionRuleBuilder,
    TubeSelectionRule, TubeSelectionRuleBuilder,
};
pub use sensor::{Sensor, SensorBuilder, SensorEntity};
pub use solid_model::{SolidModel, SolidModelBuilder};
pub use stackup::{FabricWithAngle, Stackup, StackupBuilder};

use crate::error::{AcpError, Result};
use crate::tree::linked::Linked;

/// The resource path of a link target; builders reject unstored targets.
pub(crate) fn stored_link_path<L: Linked>(name: &str, target: &L) -> Result<String> {
    let path = target.path_value();
    if path.is_empty() {
        return Err(AcpError::invalid_argument(format!(
            "Cannot set '{name}': cannot link to an unstored object."
        )));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeObject;

    #[test]
    fn test_property_names_are_declared() {
        assert!(Fabric::PROPERTY_NAMES.contains(&"material"));
        assert!(Fabric::PROPERTY_NAMES.contains(&"thickness"));
        assert!(ModelingPly::PROPERTY_NAMES.contains(&"selection_rules"));
        assert!(Model::PROPERTY_NAMES.contains(&"modeling_groups"));
    }

    #[test]
    fn test_collection_labels_are_unique() {
        let labels = [
            Model::COLLECTION_LABEL,
            Material::COLLECTION_LABEL,
            Fabric::COLLECTION_LABEL,
            Stackup::COLLECTION_LABEL,
            ElementSet::COLLECTION_LABEL,
            EdgeSet::COLLECTION_LABEL,
            Rosette::COLLECTION_LABEL,
            LookUpTable1D::COLLECTION_LABEL,
            LookUpTable1DColumn::COLLECTION_LABEL,
            ParallelSelectionRule::COLLECTION_LABEL,
            CylindricalSelectionRule::COLLECTION_LABEL,
            SphericalSelectionRule::COLLECTION_LABEL,
            TubeSelectionRule::COLLECTION_LABEL,
            BooleanSelectionRule::COLLECTION_LABEL,
            CutoffSelectionRule::COLLECTION_LABEL,
            OrientedSelectionSet::COLLECTION_LABEL,
            ModelingGroup::COLLECTION_LABEL,
            ModelingPly::COLLECTION_LABEL,
            ProductionPly::COLLECTION_LABEL,
            AnalysisPly::COLLECTION_LABEL,
            CadGeometry::COLLECTION_LABEL,
            SolidModel::COLLECTION_LABEL,
            Sensor::COLLECTION_LABEL,
        ];
        let unique: std::collections::HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), labels.len());
    }

    #[test]
    fn test_unstored_handle_debug_format() {
        let fabric = Fabric::builder().name("UD").build().unwrap();
        assert_eq!(format!("{fabric:?}"), "<Fabric with name 'UD'>");
    }
}
