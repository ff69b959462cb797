// ABOUTME: Boolean selection rule: combines linked selection rules

//! Boolean selection rules.

use crate::api::selection_rules::BooleanSelectionRuleProperties as Properties;
use crate::error::Result;
use crate::objects::enums::StatusType;
use crate::objects::model::Model;
use crate::tree::base;
use crate::tree::edge_list::EdgeProperty;
use crate::tree::macros::{
    define_tree_object, grpc_data_property, grpc_edge_property_list,
    grpc_enum_property_read_only, impl_creatable_object, impl_editable_object,
    impl_linked_paths,
};

use super::LinkedSelectionRule;

impl_linked_paths!(Properties {
    singles: [],
    lists: [],
    edges: [selection_rules.resource_path],
});

define_tree_object! {
    /// Combines several selection rules with boolean operations.
    pub struct BooleanSelectionRule {
        collection_label: "boolean_selection_rules",
        service: "acp.api.v0.boolean_selection_rule.ObjectService",
        properties: crate::api::selection_rules::BooleanSelectionRuleProperties,
        supported_since: "1.0.0",
        property_names: [
            "name", "id", "status", "selection_rules", "include_rule_type",
        ],
    }
}

impl_editable_object!(BooleanSelectionRule);
impl_creatable_object!(BooleanSelectionRule, parent: Model);

impl BooleanSelectionRule {
    pub fn builder() -> BooleanSelectionRuleBuilder {
        BooleanSelectionRuleBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_edge_property_list! {
        /// The combined rules, evaluated in order.
        selection_rules, set_selection_rules: LinkedSelectionRule, selection_rules
    }

    grpc_data_property! {
        /// Include the selected area; `false` inverts the selection.
        include_rule_type, set_include_rule_type: bool, include_rule_type
    }
}

/// Builder for unstored [`BooleanSelectionRule`] objects.
#[derive(Debug)]
pub struct BooleanSelectionRuleBuilder {
    name: String,
    properties: Properties,
    error: Option<crate::error::AcpError>,
}

impl Default for BooleanSelectionRuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BooleanSelectionRuleBuilder {
    pub fn new() -> Self {
        Self {
            name: "BooleanSelectionRule".to_owned(),
            properties: Properties {
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

    pub fn selection_rules(mut self, rules: &[LinkedSelectionRule]) -> Self {
        for rule in rules {
            match rule.to_message() {
                Ok(message) => self.properties.selection_rules.push(message),
                Err(err) => {
                    self.error = Some(err);
                    break;
                }
            }
        }
        self
    }

    pub fn include_rule_type(mut self, value: bool) -> Self {
        self.properties.include_rule_type = value;
        self
    }

    /// Finish the builder, producing an unstored rule.
    pub fn build(self) -> Result<BooleanSelectionRule> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
