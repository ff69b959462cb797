// ABOUTME: Parallel selection rule: selects elements between two planes

//! Parallel selection rules.

use crate::api::selection_rules::ParallelSelectionRuleProperties as Properties;
use crate::error::Result;
use crate::objects::conversions::{triple_from_wire, triple_to_wire};
use crate::objects::enums::StatusType;
use crate::objects::model::Model;
use crate::objects::rosette::Rosette;
use crate::tree::base;
use crate::tree::macros::{
    define_tree_object, grpc_data_property, grpc_data_property_convert,
    grpc_enum_property_read_only, grpc_link_property, impl_creatable_object,
    impl_editable_object, impl_linked_paths,
};

impl_linked_paths!(Properties {
    singles: [rosette],
    lists: [],
    edges: [],
});

define_tree_object! {
    /// Selects all elements within a distance band along a direction.
    pub struct ParallelSelectionRule {
        collection_label: "parallel_selection_rules",
        service: "acp.api.v0.parallel_selection_rule.ObjectService",
        properties: crate::api::selection_rules::ParallelSelectionRuleProperties,
        supported_since: "1.0.0",
        property_names: [
            "name", "id", "status", "use_global_coordinate_system", "rosette",
            "origin", "direction", "lower_limit", "upper_limit",
            "relative_rule_type", "include_rule_type",
        ],
    }
}

impl_editable_object!(ParallelSelectionRule);
impl_creatable_object!(ParallelSelectionRule, parent: Model);

impl ParallelSelectionRule {
    pub fn builder() -> ParallelSelectionRuleBuilder {
        ParallelSelectionRuleBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_data_property! {
        /// Use the global coordinate system for origin and direction.
        use_global_coordinate_system, set_use_global_coordinate_system: bool,
        use_global_coordinate_system
    }

    grpc_link_property! {
        /// Rosette used for origin and direction when the global coordinate
        /// system is not used.
        rosette, set_rosette: Rosette, rosette
    }

    grpc_data_property_convert! {
        origin, set_origin: (f64, f64, f64), origin,
        from = triple_from_wire, to = triple_to_wire
    }

    grpc_data_property_convert! {
        direction, set_direction: (f64, f64, f64), direction,
        from = triple_from_wire, to = triple_to_wire
    }

    grpc_data_property! {
        /// Negative distance of the selection band.
        lower_limit, set_lower_limit: f64, lower_limit
    }

    grpc_data_property! {
        /// Positive distance of the selection band.
        upper_limit, set_upper_limit: f64, upper_limit
    }

    grpc_data_property! {
        /// Evaluate parameters relative to the object size.
        relative_rule_type, set_relative_rule_type: bool, relative_rule_type
    }

    grpc_data_property! {
        /// Include the selected area; `false` inverts the selection.
        include_rule_type, set_include_rule_type: bool, include_rule_type
    }
}

/// Builder for unstored [`ParallelSelectionRule`] objects.
#[derive(Debug)]
pub struct ParallelSelectionRuleBuilder {
    name: String,
    properties: Properties,
    error: Option<crate::error::AcpError>,
}

impl Default for ParallelSelectionRuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelSelectionRuleBuilder {
    pub fn new() -> Self {
        Self {
            name: "ParallelSelectionRule".to_owned(),
            properties: Properties {
                use_global_coordinate_system: true,
                origin: vec![0.0, 0.0, 0.0],
                direction: vec![1.0, 0.0, 0.0],
                include_rule_type: true,
                ..Default::default()
            },
            error: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn use_global_coordinate_system(mut self, value: bool) -> Self {
        self.properties.use_global_coordinate_system = value;
        self
    }

    pub fn rosette(mut self, rosette: &Rosette) -> Self {
        match crate::objects::stored_link_path("rosette", rosette) {
            Ok(path) => self.properties.rosette = path,
            Err(err) => self.error = Some(err),
        }
        self
    }

    pub fn origin(mut self, origin: (f64, f64, f64)) -> Self {
        self.properties.origin = triple_to_wire(origin);
        self
    }

    pub fn direction(mut self, direction: (f64, f64, f64)) -> Self {
        self.properties.direction = triple_to_wire(direction);
        self
    }

    pub fn lower_limit(mut self, lower_limit: f64) -> Self {
        self.properties.lower_limit = lower_limit;
        self
    }

    pub fn upper_limit(mut self, upper_limit: f64) -> Self {
        self.properties.upper_limit = upper_limit;
        self
    }

    pub fn relative_rule_type(mut self, value: bool) -> Self {
        self.properties.relative_rule_type = value;
        self
    }

    pub fn include_rule_type(mut self, value: bool) -> Self {
        self.properties.include_rule_type = value;
        self
    }

    /// Finish the builder, producing an unstored rule.
    pub fn build(self) -> Result<ParallelSelectionRule> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
