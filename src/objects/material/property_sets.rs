// ABOUTME: Client views of the material property sets
// ABOUTME: Constant sets are writable single-row values; variable sets are read-only tables

//! Material property sets.
//!
//! A property set holds one `values` row per field-variable sample. A
//! *constant* set has no field variables and exactly one row; it is
//! writable by copying a new value into the material payload. A *variable*
//! set carries the full table plus its field variables and interpolation
//! options, and is read-only on the client.

use crate::api::material as wire;
use crate::error::{AcpError, Result};

/// One field variable of a variable property set.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldVariable {
    pub name: String,
    pub values: Vec<f64>,
    pub default: f64,
    pub lower_limit: f64,
    pub upper_limit: f64,
}

impl FieldVariable {
    pub(crate) fn from_wire(value: &wire::FieldVariable) -> Self {
        Self {
            name: value.name.clone(),
            values: value.values.clone(),
            default: value.default,
            lower_limit: value.lower_limit,
            upper_limit: value.upper_limit,
        }
    }
}

/// Interpolation settings of a variable property set.
#[derive(Clone, Debug, PartialEq)]
pub struct InterpolationOptions {
    pub algorithm: String,
    pub cached: bool,
    pub normalized: bool,
}

impl InterpolationOptions {
    pub(crate) fn from_wire(value: &wire::InterpolationOptions) -> Self {
        Self {
            algorithm: value.algorithm.clone(),
            cached: value.cached,
            normalized: value.normalized,
        }
    }
}

/// Constant density value.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ConstantDensity {
    pub rho: f64,
}

/// Read-only variable density table.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDensity {
    pub rho: Vec<f64>,
    pub field_variables: Vec<FieldVariable>,
    pub interpolation_options: Option<InterpolationOptions>,
}

/// Density property set of a material.
#[derive(Clone, Debug, PartialEq)]
pub enum DensityPropertySet {
    Constant(ConstantDensity),
    Variable(VariableDensity),
}

pub(crate) fn density_from_wire(value: &wire::DensityPropertySet) -> Result<DensityPropertySet> {
    if value.field_variables.is_empty() {
        let row = value.values.first().ok_or_else(|| {
            AcpError::runtime("The density property set has no values row.")
        })?;
        Ok(DensityPropertySet::Constant(ConstantDensity { rho: row.rho }))
    } else {
        Ok(DensityPropertySet::Variable(VariableDensity {
            rho: value.values.iter().map(|row| row.rho).collect(),
            field_variables: value
                .field_variables
                .iter()
                .map(FieldVariable::from_wire)
                .collect(),
            interpolation_options: value
                .interpolation_options
                .as_ref()
                .map(InterpolationOptions::from_wire),
        }))
    }
}

pub(crate) fn density_to_wire(value: &ConstantDensity) -> wire::DensityPropertySet {
    wire::DensityPropertySet {
        values: vec![wire::density_property_set::Data { rho: value.rho }],
        field_variables: Vec::new(),
        interpolation_options: None,
    }
}

/// Constant isotropic engineering constants.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ConstantIsotropicEngineeringConstants {
    pub e: f64,
    pub nu: f64,
}

/// Constant orthotropic engineering constants.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ConstantOrthotropicEngineeringConstants {
    pub e1: f64,
    pub e2: f64,
    pub e3: f64,
    pub nu12: f64,
    pub nu23: f64,
    pub nu13: f64,
    pub g12: f64,
    pub g23: f64,
    pub g31: f64,
}

/// Writable engineering constants value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConstantEngineeringConstants {
    Isotropic(ConstantIsotropicEngineeringConstants),
    Orthotropic(ConstantOrthotropicEngineeringConstants),
}

/// Read-only variable isotropic engineering constants table.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableIsotropicEngineeringConstants {
    pub e: Vec<f64>,
    pub nu: Vec<f64>,
    pub field_variables: Vec<FieldVariable>,
    pub interpolation_options: Option<InterpolationOptions>,
}

/// Read-only variable orthotropic engineering constants table (one vector
/// per constant, indexed like the field variable samples).
#[derive(Clone, Debug, PartialEq)]
pub struct VariableOrthotropicEngineeringConstants {
    pub e1: Vec<f64>,
    pub e2: Vec<f64>,
    pub e3: Vec<f64>,
    pub nu12: Vec<f64>,
    pub nu23: Vec<f64>,
    pub nu13: Vec<f64>,
    pub g12: Vec<f64>,
    pub g23: Vec<f64>,
    pub g31: Vec<f64>,
    pub field_variables: Vec<FieldVariable>,
    pub interpolation_options: Option<InterpolationOptions>,
}

/// Engineering constants property set of a material.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineeringConstantsPropertySet {
    ConstantIsotropic(ConstantIsotropicEngineeringConstants),
    ConstantOrthotropic(ConstantOrthotropicEngineeringConstants),
    VariableIsotropic(VariableIsotropicEngineeringConstants),
    VariableOrthotropic(VariableOrthotropicEngineeringConstants),
}

pub(crate) fn engineering_constants_from_wire(
    value: &wire::property_sets::EngineeringConstants,
) -> Result<EngineeringConstantsPropertySet> {
    use wire::property_sets::EngineeringConstants as Wire;
    match value {
        Wire::Isotropic(set) => {
            if !set.field_variables.is_empty() {
                return Ok(EngineeringConstantsPropertySet::VariableIsotropic(
                    VariableIsotropicEngineeringConstants {
                        e: set.values.iter().map(|row| row.e).collect(),
                        nu: set.values.iter().map(|row| row.nu).collect(),
                        field_variables: set
                            .field_variables
                            .iter()
                            .map(FieldVariable::from_wire)
                            .collect(),
                        interpolation_options: set
                            .interpolation_options
                            .as_ref()
                            .map(InterpolationOptions::from_wire),
                    },
                ));
            }
            let row = set.values.first().ok_or_else(|| {
                AcpError::runtime("The engineering constants property set has no values row.")
            })?;
            Ok(EngineeringConstantsPropertySet::ConstantIsotropic(
                ConstantIsotropicEngineeringConstants {
                    e: row.e,
                    nu: row.nu,
                },
            ))
        }
        Wire::Orthotropic(set) => {
            if set.field_variables.is_empty() {
                let row = set.values.first().ok_or_else(|| {
                    AcpError::runtime(
                        "The engineering constants property set has no values row.",
                    )
                })?;
                Ok(EngineeringConstantsPropertySet::ConstantOrthotropic(
                    ConstantOrthotropicEngineeringConstants {
                        e1: row.e1,
                        e2: row.e2,
                        e3: row.e3,
                        nu12: row.nu12,
                        nu23: row.nu23,
                        nu13: row.nu13,
                        g12: row.g12,
                        g23: row.g23,
                        g31: row.g31,
                    },
                ))
            } else {
                Ok(EngineeringConstantsPropertySet::VariableOrthotropic(
                    VariableOrthotropicEngineeringConstants {
                        e1: set.values.iter().map(|row| row.e1).collect(),
                        e2: set.values.iter().map(|row| row.e2).collect(),
                        e3: set.values.iter().map(|row| row.e3).collect(),
                        nu12: set.values.iter().map(|row| row.nu12).collect(),
                        nu23: set.values.iter().map(|row| row.nu23).collect(),
                        nu13: set.values.iter().map(|row| row.nu13).collect(),
                        g12: set.values.iter().map(|row| row.g12).collect(),
                        g23: set.values.iter().map(|row| row.g23).collect(),
                        g31: set.values.iter().map(|row| row.g31).collect(),
                        field_variables: set
                            .field_variables
                            .iter()
                            .map(FieldVariable::from_wire)
                            .collect(),
                        interpolation_options: set
                            .interpolation_options
                            .as_ref()
                            .map(InterpolationOptions::from_wire),
                    },
                ))
            }
        }
    }
}

pub(crate) fn engineering_constants_to_wire(
    value: &ConstantEngineeringConstants,
) -> wire::property_sets::EngineeringConstants {
    use wire::property_sets::EngineeringConstants as Wire;
    match value {
        ConstantEngineeringConstants::Isotropic(set) => {
            Wire::Isotropic(wire::IsotropicEngineeringConstantsPropertySet {
                values: vec![wire::isotropic_engineering_constants_property_set::Data {
                    e: set.e,
                    nu: set.nu,
                }],
                field_variables: Vec::new(),
                interpolation_options: None,
            })
        }
        ConstantEngineeringConstants::Orthotropic(set) => {
            Wire::Orthotropic(wire::OrthotropicEngineeringConstantsPropertySet {
                values: vec![wire::orthotropic_engineering_constants_property_set::Data {
                    e1: set.e1,
                    e2: set.e2,
                    e3: set.e3,
                    nu12: set.nu12,
                    nu23: set.nu23,
                    nu13: set.nu13,
                    g12: set.g12,
                    g23: set.g23,
                    g31: set.g31,
                }],
                field_variables: Vec::new(),
                interpolation_options: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_density_roundtrip() {
        let wire_set = density_to_wire(&ConstantDensity { rho: 1.5 });
        match density_from_wire(&wire_set).unwrap() {
            DensityPropertySet::Constant(value) => assert_eq!(value.rho, 1.5),
            other => panic!("expected constant density, got {other:?}"),
        }
    }

    #[test]
    fn test_variable_density_is_detected() {
        let wire_set = wire::DensityPropertySet {
            values: vec![
                wire::density_property_set::Data { rho: 1.0 },
                wire::density_property_set::Data { rho: 2.0 },
            ],
            field_variables: vec![wire::FieldVariable {
                name: "Temperature".into(),
                values: vec![20.0, 100.0],
                default: 20.0,
                lower_limit: 0.0,
                upper_limit: 200.0,
            }],
            interpolation_options: None,
        };
        match density_from_wire(&wire_set).unwrap() {
            DensityPropertySet::Variable(value) => {
                assert_eq!(value.rho, vec![1.0, 2.0]);
                assert_eq!(value.field_variables[0].name, "Temperature");
            }
            other => panic!("expected variable density, got {other:?}"),
        }
    }

    #[test]
    fn test_engineering_constants_roundtrip() {
        let constant = ConstantEngineeringConstants::Orthotropic(
            ConstantOrthotropicEngineeringConstants {
                e1: 1.0,
                e2: 2.0,
                e3: 3.0,
                nu12: 0.1,
                nu23: 0.2,
                nu13: 0.3,
                g12: 4.0,
                g23: 5.0,
                g31: 6.0,
            },
        );
        let wire_set = engineering_constants_to_wire(&constant);
        match engineering_constants_from_wire(&wire_set).unwrap() {
            EngineeringConstantsPropertySet::ConstantOrthotropic(value) => {
                assert_eq!(value.e1, 1.0);
                assert_eq!(value.g31, 6.0);
            }
            other => panic!("expected orthotropic constants, got {other:?}"),
        }
    }
}
