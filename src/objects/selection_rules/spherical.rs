// ABOUTME: Spherical selection rule: selects elements inside a sphere

//! Spherical selection rules.

use crate::api::selection_rules::SphericalSelectionRuleProperties as Properties;
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
    /// Selects all elements inside a sphere.
    pub struct SphericalSelectionRule {
        collection_label: "spherical_selection_rules",
        service: "acp.api.v0.spherical_selection_rule.ObjectService",
        properties: crate::api::selection_rules::SphericalSelectionRuleProperties,
        supported_since: "1.0.0",
        property_names: [
            "name", "id", "status", "use_global_coordinate_system", "rosette",
            "origin", "radius", "relative_rule_type", "include_rule_type",
        ],
    }
}

impl_editable_object!(SphericalSelectionRule);
impl_creatable_object!(SphericalSelectionRule, parent: Model);

impl SphericalSelectionRule {
    pub fn builder() -> SphericalSelectionRuleBuilder {
        SphericalSelectionRuleBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_data_property! {
        /// Use the global coordinate system for the origin.
        use_global_coordinate_system, set_use_global_coordinate_system: bool,
        use_global_coordinate_system
    }

    grpc_link_property! {
        /// Rosette used for the origin when the global coordinate system is
        /// not used.
        rosette, set_rosette: Rosette, rosette
    }

    grpc_data_property_convert! {
        /// Center of the sphere.
        origin, set_origin: (f64, f64, f64), origin,
        from = triple_from_wire, to = triple_to_wire
    }

    grpc_data_property! {
        /// Radius of the sphere.
        radius, set_radius: f64, radius
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

/// Builder for unstored [`SphericalSelectionRule`] objects.
#[derive(Debug)]
pub struct SphericalSelectionRuleBuilder {
    name: String,
    properties: Properties,
    error: Option<crate::error::AcpError>,
}

impl Default for SphericalSelectionRuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SphericalSelectionRuleBuilder {
    pub fn new() -> Self {
        Self {
            name: "SphericalSelectionRule".to_owned(),
            properties: Properties {
                use_global_coordinate_system: true,
                origin: vec![0.0, 0.0, 0.0],
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

    pub fn radius(mut self, radius: f64) -> Self {
        self.properties.radius = radius;
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
    pub fn build(self) -> Result<SphericalSelectionRule> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
