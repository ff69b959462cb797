// ABOUTME: Mesh and elemental/nodal data adapters over the mesh query service
// ABOUTME: Converts server array payloads into typed ndarray containers

//! Mesh and data adapters.
//!
//! The mesh query service answers read-only queries for any mesh-bearing
//! resource. Mesh geometry arrives as flat arrays and is stored in typed
//! [`ndarray`] containers; elemental and nodal data fields are wrapped as
//! scalar or vector containers depending on the advertised component
//! count. The [`ScalarData::expand_to_mesh`] / [`VectorData::expand_to_mesh`]
//! helpers expand values onto the parent mesh by label lookup, producing
//! NaN-filled mesh-sized arrays for external visualization tooling.

use std::collections::HashMap;

use ndarray::{Array1, Array2};

use crate::api::base::GetRequest;
use crate::api::mesh_query::{DataReply, DataRequest, MeshDataReply};
use crate::error::{AcpError, Result};
use crate::rpc::ServiceClient;
use crate::tree::base::{self, TreeObject};

/// Fully qualified name of the mesh query service.
pub const SERVICE_NAME: &str = "acp.api.v0.mesh_query.MeshQueryService";

/// Whether a data field lives on elements or nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataLocation {
    Elemental,
    Nodal,
}

/// Surface mesh of a resource.
#[derive(Clone, Debug)]
pub struct MeshData {
    pub node_labels: Array1<i32>,
    /// One row of `(x, y, z)` per node.
    pub node_coordinates: Array2<f64>,
    pub element_labels: Array1<i32>,
    pub element_types: Array1<i32>,
    /// Flat element connectivity array.
    pub element_nodes: Array1<i32>,
    /// Start offset of each element's nodes in `element_nodes`.
    pub element_nodes_offsets: Array1<i32>,
}

impl MeshData {
    pub(crate) fn from_reply(reply: MeshDataReply) -> Result<Self> {
        let node_count = reply.node_labels.len();
        let node_coordinates = Array2::from_shape_vec((node_count, 3), reply.node_coordinates)
            .map_err(|err| {
                AcpError::runtime(format!("Invalid node coordinate array shape: {err}"))
            })?;
        Ok(Self {
            node_labels: Array1::from(reply.node_labels),
            node_coordinates,
            element_labels: Array1::from(reply.element_labels),
            element_types: Array1::from(reply.element_types),
            element_nodes: Array1::from(reply.element_nodes),
            element_nodes_offsets: Array1::from(reply.element_nodes_offsets),
        })
    }

    fn labels_at(&self, location: DataLocation) -> &Array1<i32> {
        match location {
            DataLocation::Elemental => &self.element_labels,
            DataLocation::Nodal => &self.node_labels,
        }
    }
}

fn label_index_map(labels: &Array1<i32>) -> HashMap<i32, usize> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| (*label, index))
        .collect()
}

/// Scalar data field with one value per labeled entity.
#[derive(Clone, Debug)]
pub struct ScalarData {
    labels: Array1<i32>,
    values: Array1<f64>,
    component_name: String,
    location: DataLocation,
}

impl ScalarData {
    pub fn labels(&self) -> &Array1<i32> {
        &self.labels
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    pub fn location(&self) -> DataLocation {
        self.location
    }

    /// Expand the values onto the given mesh by label lookup. Entities
    /// without a value read as NaN.
    pub fn expand_to_mesh(&self, mesh: &MeshData) -> Array1<f64> {
        let mesh_labels = mesh.labels_at(self.location);
        let index_map = label_index_map(mesh_labels);
        let mut expanded = Array1::from_elem(mesh_labels.len(), f64::NAN);
        for (label, value) in self.labels.iter().zip(self.values.iter()) {
            if let Some(&index) = index_map.get(label) {
                expanded[index] = *value;
            }
        }
        expanded
    }
}

/// Vector data field with three components per labeled entity.
#[derive(Clone, Debug)]
pub struct VectorData {
    labels: Array1<i32>,
    values: Array2<f64>,
    component_name: String,
    location: DataLocation,
}

impl VectorData {
    pub fn labels(&self) -> &Array1<i32> {
        &self.labels
    }

    /// One row of three components per label.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    pub fn location(&self) -> DataLocation {
        self.location
    }

    /// Expand the values onto the given mesh by label lookup. Entities
    /// without a value read as NaN rows.
    pub fn expand_to_mesh(&self, mesh: &MeshData) -> Array2<f64> {
        let mesh_labels = mesh.labels_at(self.location);
        let index_map = label_index_map(mesh_labels);
        let mut expanded = Array2::from_elem((mesh_labels.len(), 3), f64::NAN);
        for (row, label) in self.labels.iter().enumerate() {
            if let Some(&index) = index_map.get(label) {
                for component in 0..3 {
                    expanded[(index, component)] = self.values[(row, component)];
                }
            }
        }
        expanded
    }
}

/// A returned data field, scalar or vector depending on the advertised
/// component count.
#[derive(Clone, Debug)]
pub enum FieldData {
    Scalar(ScalarData),
    Vector(VectorData),
}

/// Query the surface mesh of a stored resource.
pub(crate) async fn query_mesh<T: TreeObject>(obj: &T) -> Result<MeshData> {
    let server = base::server_wrapper(obj)?;
    let client = ServiceClient::new(server.channel(), SERVICE_NAME);
    let reply: MeshDataReply = client
        .unary(
            "GetMeshData",
            GetRequest {
                resource_path: base::resource_path_value(obj),
            },
        )
        .await
        .map_err(AcpError::from)?;
    MeshData::from_reply(reply)
}

/// Query elemental or nodal data fields of a stored resource by name.
pub(crate) async fn query_data<T: TreeObject>(
    obj: &T,
    location: DataLocation,
    field_names: &[&str],
) -> Result<HashMap<String, FieldData>> {
    let server = base::server_wrapper(obj)?;
    let client = ServiceClient::new(server.channel(), SERVICE_NAME);
    let method = match location {
        DataLocation::Elemental => "GetElementalData",
        DataLocation::Nodal => "GetNodalData",
    };
    let reply: DataReply = client
        .unary(
            method,
            DataRequest {
                resource_path: base::resource_path_value(obj),
                data_types: field_names.iter().map(|name| name.to_string()).collect(),
            },
        )
        .await
        .map_err(AcpError::from)?;

    let labels = Array1::from(reply.labels);
    let mut fields = HashMap::new();
    for field in reply.fields {
        let data = match field.num_components {
            0 | 1 => {
                if field.values.len() != labels.len() {
                    return Err(AcpError::runtime(format!(
                        "Field '{}' has {} values for {} labels.",
                        field.name,
                        field.values.len(),
                        labels.len()
                    )));
                }
                FieldData::Scalar(ScalarData {
                    labels: labels.clone(),
                    values: Array1::from(field.values),
                    component_name: field.name.clone(),
                    location,
                })
            }
            3 => {
                let values = Array2::from_shape_vec((labels.len(), 3), field.values)
                    .map_err(|err| {
                        AcpError::runtime(format!(
                            "Invalid array shape for field '{}': {err}",
                            field.name
                        ))
                    })?;
                FieldData::Vector(VectorData {
                    labels: labels.clone(),
                    values,
                    component_name: field.name.clone(),
                    location,
                })
            }
            other => {
                return Err(AcpError::runtime(format!(
                    "Unsupported component count {other} for field '{}'.",
                    field.name
                )))
            }
        };
        fields.insert(field.name, data);
    }
    Ok(fields)
}

pub(crate) fn take_scalar(
    fields: &mut HashMap<String, FieldData>,
    name: &str,
) -> Result<Option<ScalarData>> {
    match fields.remove(name) {
        None => Ok(None),
        Some(FieldData::Scalar(data)) => Ok(Some(data)),
        Some(FieldData::Vector(_)) => Err(AcpError::runtime(format!(
            "Field '{name}' is a vector field, expected scalar data."
        ))),
    }
}

pub(crate) fn take_vector(
    fields: &mut HashMap<String, FieldData>,
    name: &str,
) -> Result<Option<VectorData>> {
    match fields.remove(name) {
        None => Ok(None),
        Some(FieldData::Vector(data)) => Ok(Some(data)),
        Some(FieldData::Scalar(_)) => Err(AcpError::runtime(format!(
            "Field '{name}' is a scalar field, expected vector data."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh_with_labels() -> MeshData {
        MeshData {
            node_labels: Array1::from(vec![1, 2, 3]),
            node_coordinates: Array2::zeros((3, 3)),
            element_labels: Array1::from(vec![10, 20, 30, 40]),
            element_types: Array1::from(vec![0, 0, 0, 0]),
            element_nodes: Array1::from(vec![1, 2, 3]),
            element_nodes_offsets: Array1::from(vec![0]),
        }
    }

    #[test]
    fn test_scalar_expand_fills_missing_with_nan() {
        let data = ScalarData {
            labels: Array1::from(vec![20, 40]),
            values: Array1::from(vec![2.0, 4.0]),
            component_name: "thickness".into(),
            location: DataLocation::Elemental,
        };
        let expanded = data.expand_to_mesh(&mesh_with_labels());
        assert!(expanded[0].is_nan());
        assert_eq!(expanded[1], 2.0);
        assert!(expanded[2].is_nan());
        assert_eq!(expanded[3], 4.0);
    }

    #[test]
    fn test_vector_expand_by_label() {
        let data = VectorData {
            labels: Array1::from(vec![30]),
            values: Array2::from_shape_vec((1, 3), vec![1.0, 2.0, 3.0]).unwrap(),
            component_name: "normal".into(),
            location: DataLocation::Elemental,
        };
        let expanded = data.expand_to_mesh(&mesh_with_labels());
        assert_eq!(expanded[(2, 0)], 1.0);
        assert_eq!(expanded[(2, 2)], 3.0);
        assert!(expanded[(0, 0)].is_nan());
    }

    #[test]
    fn test_mesh_from_reply_validates_shape() {
        let reply = MeshDataReply {
            node_labels: vec![1, 2],
            node_coordinates: vec![0.0; 5],
            element_labels: vec![],
            element_types: vec![],
            element_nodes: vec![],
            element_nodes_offsets: vec![],
        };
        assert!(MeshData::from_reply(reply).is_err());
    }
}
