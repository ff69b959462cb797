// ABOUTME: 1D lookup table entity and its column children

//! Lookup tables.
//!
//! A 1D lookup table interpolates values along an axis defined by origin
//! and direction; its data lives in column children.

use crate::api::lookup_table::{ColumnProperties, Properties};
use crate::error::Result;
use crate::objects::conversions::{triple_from_wire, triple_to_wire};
use crate::objects::enums::{
    LookUpTableColumnValueType, PhysicalDimension, StatusType, WireEnum,
};
use crate::tree::base;
use crate::tree::macros::{
    define_tree_object, grpc_collection_property, grpc_data_property,
    grpc_data_property_convert, grpc_enum_property, grpc_enum_property_read_only,
    impl_creatable_object, impl_editable_object, impl_linked_paths,
};

use super::model::Model;

impl_linked_paths!(Properties {
    singles: [],
    lists: [],
    edges: [],
});

impl_linked_paths!(ColumnProperties {
    singles: [],
    lists: [],
    edges: [],
});

define_tree_object! {
    /// A 1D lookup table interpolating values along an axis.
    pub struct LookUpTable1D {
        collection_label: "lookup_tables_1d",
        service: "acp.api.v0.lookup_table_1d.ObjectService",
        properties: crate::api::lookup_table::Properties,
        supported_since: "1.0.0",
        property_names: ["name", "id", "status", "origin", "direction", "columns"],
    }
}

impl_editable_object!(LookUpTable1D);
impl_creatable_object!(LookUpTable1D, parent: Model);

impl LookUpTable1D {
    pub fn builder() -> LookUpTable1DBuilder {
        LookUpTable1DBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_data_property_convert! {
        /// Origin of the interpolation axis.
        origin, set_origin: (f64, f64, f64), origin,
        from = triple_from_wire, to = triple_to_wire
    }

    grpc_data_property_convert! {
        /// Direction of the interpolation axis.
        direction, set_direction: (f64, f64, f64), direction,
        from = triple_from_wire, to = triple_to_wire
    }

    grpc_collection_property! {
        /// The data columns of the table.
        columns, create_column: LookUpTable1DColumn, LookUpTable1DColumnBuilder
    }
}

/// Builder for unstored [`LookUpTable1D`] objects.
#[derive(Debug)]
pub struct LookUpTable1DBuilder {
    name: String,
    properties: Properties,
}

impl Default for LookUpTable1DBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LookUpTable1DBuilder {
    pub fn new() -> Self {
        Self {
            name: "LookUpTable1D".to_owned(),
            properties: Properties {
                origin: vec![0.0, 0.0, 0.0],
                direction: vec![0.0, 0.0, 1.0],
                ..Default::default()
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
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

    /// Finish the builder, producing an unstored lookup table.
    pub fn build(self) -> Result<LookUpTable1D> {
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}

define_tree_object! {
    /// One data column of a 1D lookup table.
    pub struct LookUpTable1DColumn {
        collection_label: "columns",
        service: "acp.api.v0.lookup_table_1d_column.ObjectService",
        properties: crate::api::lookup_table::ColumnProperties,
        supported_since: "1.0.0",
        property_names: [
            "name", "id", "status", "value_type", "dimension_type", "values",
        ],
    }
}

impl_editable_object!(LookUpTable1DColumn);
impl_creatable_object!(LookUpTable1DColumn, parent: LookUpTable1D);

impl LookUpTable1DColumn {
    pub fn builder() -> LookUpTable1DColumnBuilder {
        LookUpTable1DColumnBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_enum_property_read_only! {
        /// Value shape of the column; fixed at creation.
        value_type: LookUpTableColumnValueType, value_type
    }

    grpc_enum_property! {
        /// Physical dimension of the column values.
        dimension_type, set_dimension_type: PhysicalDimension, dimension_type
    }

    grpc_data_property! {
        /// Flat value array; rows of three components for direction columns.
        values, set_values: Vec<f64>, values
    }
}

/// Builder for unstored [`LookUpTable1DColumn`] objects.
#[derive(Debug)]
pub struct LookUpTable1DColumnBuilder {
    name: String,
    properties: ColumnProperties,
}

impl Default for LookUpTable1DColumnBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LookUpTable1DColumnBuilder {
    pub fn new() -> Self {
        Self {
            name: "Column".to_owned(),
            properties: ColumnProperties::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn value_type(mut self, value_type: LookUpTableColumnValueType) -> Self {
        self.properties.value_type = value_type.to_wire();
        self
    }

    pub fn dimension_type(mut self, dimension_type: PhysicalDimension) -> Self {
        self.properties.dimension_type = dimension_type.to_wire();
        self
    }

    pub fn values(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.properties.values = values.into();
        self
    }

    /// Finish the builder, producing an unstored column.
    pub fn build(self) -> Result<LookUpTable1DColumn> {
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
