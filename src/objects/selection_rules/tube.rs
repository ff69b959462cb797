// ABOUTME: Tube selection rule: selects elements inside a tube along an edge set

//! Tube selection rules.

use crate::api::selection_rules::TubeSelectionRuleProperties as Properties;
use crate::error::Result;
use crate::objects::conversions::{triple_from_wire, triple_to_wire};
use crate::objects::edge_set::EdgeSet;
use crate::objects::enums::StatusType;
use crate::objects::model::Model;
use crate::tree::base;
use crate::tree::macros::{
    define_tree_object, grpc_data_property, grpc_data_property_convert,
    grpc_enum_property_read_only, grpc_link_property, impl_creatable_object,
    impl_editable_object, impl_linked_paths,
};

impl_linked_paths!(Properties {
    singles: [edge_set],
    lists: [],
    edges: [],
});

define_tree_object! {
    /// Selects all elements inside a tube around an edge set.
    pub struct TubeSelectionRule {
        collection_label: "tube_selection_rules",
        service: "acp.api.v0.tube_selection_rule.ObjectService",
        properties: crate::api::selection_rules::TubeSelectionRuleProperties,
        supported_since: "1.0.0",
        property_names: [
            "name", "id", "status", "edge_set", "outer_radius", "inner_radius",
            "include_rule_type", "extend_endings", "symmetrical_extension",
            "head", "head_extension", "tail_extension",
        ],
    }
}

impl_editable_object!(TubeSelectionRule);
impl_creatable_object!(TubeSelectionRule, parent: Model);

impl TubeSelectionRule {
    pub fn builder() -> TubeSelectionRuleBuilder {
        TubeSelectionRuleBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_link_property! {
        /// Edge set defining the tube path.
        edge_set, set_edge_set: EdgeSet, edge_set
    }

    grpc_data_property! {
        outer_radius, set_outer_radius: f64, outer_radius
    }

    grpc_data_property! {
        inner_radius, set_inner_radius: f64, inner_radius
    }

    grpc_data_property! {
        /// Include the selected area; `false` inverts the selection.
        include_rule_type, set_include_rule_type: bool, include_rule_type
    }

    grpc_data_property! {
        /// Extend the tube beyond the ends of the edge set.
        extend_endings, set_extend_endings: bool, extend_endings
    }

    grpc_data_property! {
        /// Use the same extension length on both endings.
        symmetrical_extension, set_symmetrical_extension: bool, symmetrical_extension
    }

    grpc_data_property_convert! {
        /// Point determining the head of the edge set for asymmetric
        /// extensions.
        head, set_head: (f64, f64, f64), head,
        from = triple_from_wire, to = triple_to_wire
    }

    grpc_data_property! {
        head_extension, set_head_extension: f64, head_extension
    }

    grpc_data_property! {
        tail_extension, set_tail_extension: f64, tail_extension
    }
}

/// Builder for unstored [`TubeSelectionRule`] objects.
#[derive(Debug)]
pub struct TubeSelectionRuleBuilder {
    name: String,
    properties: Properties,
    error: Option<crate::error::AcpError>,
}

impl Default for TubeSelectionRuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TubeSelectionRuleBuilder {
    pub fn new() -> Self {
        Self {
            name: "TubeSelectionRule".to_owned(),
            properties: Properties {
                outer_radius: 1.0,
                include_rule_type: true,
                symmetrical_extension: true,
                head: vec![0.0, 0.0, 0.0],
                ..Default::default()
            },
            error: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn edge_set(mut self, edge_set: &EdgeSet) -> Self {
        match crate::objects::stored_link_path("edge_set", edge_set) {
            Ok(path) => self.properties.edge_set = path,
            Err(err) => self.error = Some(err),
        }
        self
    }

    pub fn outer_radius(mut self, outer_radius: f64) -> Self {
        self.properties.outer_radius = outer_radius;
        self
    }

    pub fn inner_radius(mut self, inner_radius: f64) -> Self {
        self.properties.inner_radius = inner_radius;
        self
    }

    pub fn include_rule_type(mut self, value: bool) -> Self {
        self.properties.include_rule_type = value;
        self
    }

    pub fn extend_endings(mut self, value: bool) -> Self {
        self.properties.extend_endings = value;
        self
    }

    pub fn symmetrical_extension(mut self, value: bool) -> Self {
        self.properties.symmetrical_extension = value;
        self
    }

    pub fn head(mut self, head: (f64, f64, f64)) -> Self {
        self.properties.head = triple_to_wire(head);
        self
    }

    pub fn head_extension(mut self, head_extension: f64) -> Self {
        self.properties.head_extension = head_extension;
        self
    }

    pub fn tail_extension(mut self, tail_extension: f64) -> Self {
        self.properties.tail_extension = tail_extension;
        self
    }

    /// Finish the builder, producing an unstored rule.
    pub fn build(self) -> Result<TubeSelectionRule> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
