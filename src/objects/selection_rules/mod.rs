// ABOUTME: Selection rule entities limiting the extent of plies
// ABOUTME: Includes the linked-rule edge record used by boolean rules and plies

//! Selection rules.

pub mod boolean;
pub mod cutoff;
pub mod cylindrical;
pub mod parallel;
pub mod spherical;
pub mod tube;

pub use boolean::{BooleanSelectionRule, BooleanSelectionRuleBuilder};
pub use cutoff::{CutoffSelectionRule, CutoffSelectionRuleBuilder};
pub use cylindrical::{CylindricalSelectionRule, CylindricalSelectionRuleBuilder};
pub use parallel::{ParallelSelectionRule, ParallelSelectionRuleBuilder};
pub use spherical::{SphericalSelectionRule, SphericalSelectionRuleBuilder};
pub use tube::{TubeSelectionRule, TubeSelectionRuleBuilder};

use crate::api::selection_rules as wire;
use crate::error::{AcpError, Result};
use crate::objects::enums::{BooleanOperationType, WireEnum};
use crate::tree::base::ServerWrapper;
use crate::tree::edge_list::EdgeProperty;
use crate::tree::linked::Linked;
use crate::tree::macros::define_linked_union;

define_linked_union! {
    /// Selection rules that can be linked into a boolean rule or a
    /// modeling ply.
    pub enum LinkableSelectionRule {
        Parallel(ParallelSelectionRule),
        Cylindrical(CylindricalSelectionRule),
        Spherical(SphericalSelectionRule),
        Tube(TubeSelectionRule),
    }
}

/// Edge record linking a selection rule into a boolean rule or modeling
/// ply.
///
/// With `template_rule` enabled, the rule parameters are taken from
/// `parameter_1` / `parameter_2` instead of the linked rule itself.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkedSelectionRule {
    pub selection_rule: LinkableSelectionRule,
    pub operation_type: BooleanOperationType,
    pub template_rule: bool,
    pub parameter_1: f64,
    pub parameter_2: f64,
}

impl LinkedSelectionRule {
    pub fn new(selection_rule: impl Into<LinkableSelectionRule>) -> Self {
        Self {
            selection_rule: selection_rule.into(),
            operation_type: BooleanOperationType::Intersect,
            template_rule: false,
            parameter_1: 0.0,
            parameter_2: 0.0,
        }
    }

    pub fn with_operation_type(mut self, operation_type: BooleanOperationType) -> Self {
        self.operation_type = operation_type;
        self
    }

    pub fn with_template_rule(mut self, parameter_1: f64, parameter_2: f64) -> Self {
        self.template_rule = true;
        self.parameter_1 = parameter_1;
        self.parameter_2 = parameter_2;
        self
    }
}

impl EdgeProperty for LinkedSelectionRule {
    type Message = wire::LinkedSelectionRule;

    fn to_message(&self) -> Result<Self::Message> {
        let resource_path = self.selection_rule.path_value();
        if resource_path.is_empty() {
            return Err(AcpError::invalid_argument(
                "Cannot link an unstored selection rule.",
            ));
        }
        Ok(wire::LinkedSelectionRule {
            resource_path,
            operation_type: self.operation_type.to_wire(),
            template_rule: self.template_rule,
            parameter_1: self.parameter_1,
            parameter_2: self.parameter_2,
        })
    }

    fn from_message(message: &Self::Message, server: &ServerWrapper) -> Result<Self> {
        Ok(Self {
            selection_rule: LinkableSelectionRule::from_path(&message.resource_path, server)?,
            operation_type: BooleanOperationType::from_wire(message.operation_type)?,
            template_rule: message.template_rule,
            parameter_1: message.parameter_1,
            parameter_2: message.parameter_2,
        })
    }
}
