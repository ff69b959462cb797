// ABOUTME: CAD geometry entity: an external geometry file loaded into the model

//! CAD geometries.

use crate::api::base::Empty;
use crate::api::cad_geometry::{Properties, RefreshRequest, VisualizationMeshReply};
use crate::error::{AcpError, Result};
use crate::objects::enums::StatusType;
use crate::tree::base;
use crate::tree::macros::{
    define_tree_object, grpc_data_property, grpc_data_property_read_only,
    grpc_enum_property_read_only, impl_creatable_object, impl_editable_object,
    impl_linked_paths,
};
use ndarray::{Array1, Array2};

use super::model::Model;

impl_linked_paths!(Properties {
    singles: [],
    lists: [],
    edges: [],
});

define_tree_object! {
    /// An external geometry file loaded into the model.
    pub struct CadGeometry {
        collection_label: "cad_geometries",
        service: "acp.api.v0.cad_geometry.ObjectService",
        properties: crate::api::cad_geometry::Properties,
        supported_since: "1.1.0",
        property_names: [
            "name", "id", "status", "locked", "external_path", "scale_factor",
            "use_default_precision", "precision", "use_default_offset", "offset",
        ],
    }
}

impl_editable_object!(CadGeometry);
impl_creatable_object!(CadGeometry, parent: Model);

impl CadGeometry {
    pub fn builder() -> CadGeometryBuilder {
        CadGeometryBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_data_property_read_only! {
        locked: bool, locked
    }

    grpc_data_property_read_only! {
        /// Server-visible path of the geometry source file.
        external_path: String, external_path
    }

    grpc_data_property! {
        /// Scale factor applied to the geometry.
        scale_factor, set_scale_factor: f64, scale_factor
    }

    grpc_data_property! {
        use_default_precision, set_use_default_precision: bool, use_default_precision
    }

    grpc_data_property! {
        /// Geometry precision; only used without default precision.
        precision, set_precision: f64, precision
    }

    grpc_data_property! {
        use_default_offset, set_use_default_offset: bool, use_default_offset
    }

    grpc_data_property! {
        /// Geometry offset; only used without default offset.
        offset, set_offset: f64, offset
    }

    /// Re-read the geometry from a file. The path may be local; it is
    /// uploaded first when the server is remote.
    pub async fn refresh(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let server = base::server_wrapper(self)?;
        let remote_path = server
            .transfer()
            .upload_file_if_autotransfer(path.as_ref())
            .await?;
        let client = base::service_client(self)?;
        let _: Empty = client
            .unary(
                "Refresh",
                RefreshRequest {
                    resource_path: base::resource_path_value(self),
                    path: remote_path,
                },
            )
            .await
            .map_err(AcpError::from)?;
        // Pick up the refreshed state.
        base::get(self).await
    }

    /// The triangle surface mesh used to visualize the geometry.
    pub async fn visualization_mesh(&self) -> Result<TriangleMesh> {
        let client = base::service_client(self)?;
        let reply: VisualizationMeshReply = client
            .unary(
                "GetVisualizationMesh",
                crate::api::base::GetRequest {
                    resource_path: base::resource_path_value(self),
                },
            )
            .await
            .map_err(AcpError::from)?;
        TriangleMesh::from_reply(reply)
    }
}

/// Triangle surface mesh of a CAD geometry.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    /// One row of `(x, y, z)` per vertex.
    pub vertices: Array2<f64>,
    /// Flat triangle connectivity array; three vertex indices per triangle.
    pub triangles: Array1<i32>,
}

impl TriangleMesh {
    fn from_reply(reply: VisualizationMeshReply) -> Result<Self> {
        if reply.vertices.len() % 3 != 0 {
            return Err(AcpError::runtime(
                "Invalid vertex array length in visualization mesh.",
            ));
        }
        let vertex_count = reply.vertices.len() / 3;
        let vertices = Array2::from_shape_vec((vertex_count, 3), reply.vertices)
            .map_err(|err| AcpError::runtime(format!("Invalid vertex array shape: {err}")))?;
        Ok(Self {
            vertices,
            triangles: Array1::from(reply.triangles),
        })
    }
}

/// Builder for unstored [`CadGeometry`] objects.
#[derive(Debug)]
pub struct CadGeometryBuilder {
    name: String,
    properties: Properties,
}

impl Default for CadGeometryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CadGeometryBuilder {
    pub fn new() -> Self {
        Self {
            name: "CadGeometry".to_owned(),
            properties: Properties {
                scale_factor: 1.0,
                use_default_precision: true,
                use_default_offset: true,
                ..Default::default()
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn scale_factor(mut self, scale_factor: f64) -> Self {
        self.properties.scale_factor = scale_factor;
        self
    }

    pub fn use_default_precision(mut self, value: bool) -> Self {
        self.properties.use_default_precision = value;
        self
    }

    pub fn precision(mut self, precision: f64) -> Self {
        self.properties.precision = precision;
        self
    }

    pub fn use_default_offset(mut self, value: bool) -> Self {
        self.properties.use_default_offset = value;
        self
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.properties.offset = offset;
        self
    }

    /// Finish the builder, producing an unstored CAD geometry.
    pub fn build(self) -> Result<CadGeometry> {
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
