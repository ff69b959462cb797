// ABOUTME: Cutoff selection rule: trims plies along a geometry or taper edge

//! Cutoff selection rules.

use crate::api::selection_rules::CutoffSelectionRuleProperties as Properties;
use crate::error::Result;
use crate::objects::cad_geometry::CadGeometry;
use crate::objects::edge_set::EdgeSet;
use crate::objects::enums::{CutoffRuleType, PlyCutoffType, StatusType, WireEnum};
use crate::objects::model::Model;
use crate::tree::base;
use crate::tree::macros::{
    define_tree_object, grpc_data_property, grpc_enum_property, grpc_enum_property_read_only,
    grpc_link_property, impl_creatable_object, impl_editable_object, impl_linked_paths,
};

impl_linked_paths!(Properties {
    singles: [cad_geometry, taper_edge_set],
    lists: [],
    edges: [],
});

define_tree_object! {
    /// Trims plies along a CAD geometry or a tapered edge.
    pub struct CutoffSelectionRule {
        collection_label: "cutoff_selection_rules",
        service: "acp.api.v0.cutoff_selection_rule.ObjectService",
        properties: crate::api::selection_rules::CutoffSelectionRuleProperties,
        supported_since: "1.2.0",
        property_names: [
            "name", "id", "status", "cutoff_rule_type", "cad_geometry",
            "taper_edge_set", "offset", "angle", "ply_cutoff_type", "ply_tapering",
        ],
    }
}

impl_editable_object!(CutoffSelectionRule);
impl_creatable_object!(CutoffSelectionRule, parent: Model);

impl CutoffSelectionRule {
    pub fn builder() -> CutoffSelectionRuleBuilder {
        CutoffSelectionRuleBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_enum_property! {
        /// Geometric source of the cutoff.
        cutoff_rule_type, set_cutoff_rule_type: CutoffRuleType, cutoff_rule_type
    }

    grpc_link_property! {
        /// CAD geometry cutting the plies; used with the geometry rule type.
        cad_geometry, set_cad_geometry: CadGeometry, cad_geometry
    }

    grpc_link_property! {
        /// Edge set the taper starts from; used with the taper rule type.
        taper_edge_set, set_taper_edge_set: EdgeSet, taper_edge_set
    }

    grpc_data_property! {
        /// Offset of the cutoff plane.
        offset, set_offset: f64, offset
    }

    grpc_data_property! {
        /// Taper angle, in degree.
        angle, set_angle: f64, angle
    }

    grpc_enum_property! {
        /// Which ply level the cutoff is applied to.
        ply_cutoff_type, set_ply_cutoff_type: PlyCutoffType, ply_cutoff_type
    }

    grpc_data_property! {
        /// Taper the plies towards the cutoff.
        ply_tapering, set_ply_tapering: bool, ply_tapering
    }
}

/// Builder for unstored [`CutoffSelectionRule`] objects.
#[derive(Debug)]
pub struct CutoffSelectionRuleBuilder {
    name: String,
    properties: Properties,
    error: Option<crate::error::AcpError>,
}

impl Default for CutoffSelectionRuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CutoffSelectionRuleBuilder {
    pub fn new() -> Self {
        Self {
            name: "CutoffSelectionRule".to_owned(),
            properties: Properties::default(),
            error: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn cutoff_rule_type(mut self, value: CutoffRuleType) -> Self {
        self.properties.cutoff_rule_type = value.to_wire();
        self
    }

    pub fn cad_geometry(mut self, cad_geometry: &CadGeometry) -> Self {
        match crate::objects::stored_link_path("cad_geometry", cad_geometry) {
            Ok(path) => self.properties.cad_geometry = path,
            Err(err) => self.error = Some(err),
        }
        self
    }

    pub fn taper_edge_set(mut self, taper_edge_set: &EdgeSet) -> Self {
        match crate::objects::stored_link_path("taper_edge_set", taper_edge_set) {
            Ok(path) => self.properties.taper_edge_set = path,
            Err(err) => self.error = Some(err),
        }
        self
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.properties.offset = offset;
        self
    }

    pub fn angle(mut self, angle: f64) -> Self {
        self.properties.angle = angle;
        self
    }

    pub fn ply_cutoff_type(mut self, value: PlyCutoffType) -> Self {
        self.properties.ply_cutoff_type = value.to_wire();
        self
    }

    pub fn ply_tapering(mut self, value: bool) -> Self {
        self.properties.ply_tapering = value;
        self
    }

    /// Finish the builder, producing an unstored rule.
    pub fn build(self) -> Result<CutoffSelectionRule> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
