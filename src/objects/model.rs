// ABOUTME: Model entity: the root object owning all lay-up definitions
// ABOUTME: Covers load/save/update endpoints and the child collections

//! Models.

use std::path::Path;

use crate::api::base::Empty;
use crate::api::generic::ObjectInfo;
use crate::api::material::SaveToFileRequest as MaterialSaveToFileRequest;
use crate::api::model::{
    LoadFromFeFileRequest, LoadFromFileRequest, Properties, SaveAnalysisModelRequest,
    SaveShellCompositeDefinitionsRequest, SaveToFileRequest, UpdateRequest,
};
use crate::error::{AcpError, Result};
use crate::filetransfer;
use crate::mesh::{self, DataLocation, MeshData, ScalarData, VectorData};
use crate::objects::enums::{
    FeFormat, IgnorableEntity, StatusType, UnitSystemType, WireEnum,
};
use crate::rpc::ServiceClient;
use crate::tree::base::{self, ServerWrapper, TreeObject};
use crate::tree::macros::{
    define_tree_object, grpc_collection_property, grpc_data_property,
    grpc_enum_property_read_only, impl_editable_object, impl_linked_paths,
};

use super::cad_geometry::{CadGeometry, CadGeometryBuilder};
use super::edge_set::{EdgeSet, EdgeSetBuilder};
use super::element_set::{ElementSet, ElementSetBuilder};
use super::fabric::{Fabric, FabricBuilder};
use super::lookup_table::{LookUpTable1D, LookUpTable1DBuilder};
use super::material::{Material, MaterialBuilder};
use super::modeling_group::{ModelingGroup, ModelingGroupBuilder};
use super::oriented_selection_set::{OrientedSelectionSet, OrientedSelectionSetBuilder};
use super::rosette::{Rosette, RosetteBuilder};
use super::selection_rules::{
    BooleanSelectionRule, BooleanSelectionRuleBuilder, CutoffSelectionRule,
    CutoffSelectionRuleBuilder, CylindricalSelectionRule, CylindricalSelectionRuleBuilder,
    ParallelSelectionRule, ParallelSelectionRuleBuilder, SphericalSelectionRule,
    SphericalSelectionRuleBuilder, TubeSelectionRule, TubeSelectionRuleBuilder,
};
use super::sensor::{Sensor, SensorBuilder};
use super::solid_model::{SolidModel, SolidModelBuilder};
use super::stackup::{Stackup, StackupBuilder};

impl_linked_paths!(Properties {
    singles: [],
    lists: [],
    edges: [],
});

define_tree_object! {
    /// The root object owning all lay-up definitions of one loaded model.
    pub struct Model {
        collection_label: "models",
        service: "acp.api.v0.model.ObjectService",
        properties: crate::api::model::Properties,
        supported_since: "1.0.0",
        property_names: [
            "name", "id", "status", "use_nodal_thicknesses",
            "draping_offset_correction", "angle_tolerance",
            "relative_thickness_tolerance", "minimum_analysis_ply_thickness",
            "unit_system", "materials", "fabrics", "stackups", "element_sets",
            "edge_sets", "rosettes", "lookup_tables_1d", "parallel_selection_rules",
            "cylindrical_selection_rules", "spherical_selection_rules",
            "tube_selection_rules", "boolean_selection_rules",
            "cutoff_selection_rules", "oriented_selection_sets", "modeling_groups",
            "cad_geometries", "solid_models", "sensors",
        ],
    }
}

impl_editable_object!(Model);

impl Model {
    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_data_property! {
        /// Use nodal instead of element thicknesses.
        use_nodal_thicknesses, set_use_nodal_thicknesses: bool, use_nodal_thicknesses
    }

    grpc_data_property! {
        /// Consider lay-up thickness in the draping analysis.
        draping_offset_correction, set_draping_offset_correction: bool,
        draping_offset_correction
    }

    grpc_data_property! {
        /// Section computation angle tolerance, in degree.
        angle_tolerance, set_angle_tolerance: f64, angle_tolerance
    }

    grpc_data_property! {
        /// Section computation relative thickness tolerance.
        relative_thickness_tolerance, set_relative_thickness_tolerance: f64,
        relative_thickness_tolerance
    }

    grpc_data_property! {
        /// Section computation minimum analysis ply thickness, in the length
        /// unit of the model.
        minimum_analysis_ply_thickness, set_minimum_analysis_ply_thickness: f64,
        minimum_analysis_ply_thickness
    }

    grpc_enum_property_read_only! {
        /// Unit system the model is defined in.
        unit_system: UnitSystemType, unit_system
    }

    grpc_collection_property! {
        materials, create_material: Material, MaterialBuilder
    }

    grpc_collection_property! {
        fabrics, create_fabric: Fabric, FabricBuilder
    }

    grpc_collection_property! {
        stackups, create_stackup: Stackup, StackupBuilder
    }

    grpc_collection_property! {
        element_sets, create_element_set: ElementSet, ElementSetBuilder
    }

    grpc_collection_property! {
        edge_sets, create_edge_set: EdgeSet, EdgeSetBuilder
    }

    grpc_collection_property! {
        rosettes, create_rosette: Rosette, RosetteBuilder
    }

    grpc_collection_property! {
        lookup_tables_1d, create_lookup_table_1d: LookUpTable1D, LookUpTable1DBuilder
    }

    grpc_collection_property! {
        parallel_selection_rules, create_parallel_selection_rule: ParallelSelectionRule,
        ParallelSelectionRuleBuilder
    }

    grpc_collection_property! {
        cylindrical_selection_rules, create_cylindrical_selection_rule:
        CylindricalSelectionRule, CylindricalSelectionRuleBuilder
    }

    grpc_collection_property! {
        spherical_selection_rules, create_spherical_selection_rule: SphericalSelectionRule,
        SphericalSelectionRuleBuilder
    }

    grpc_collection_property! {
        tube_selection_rules, create_tube_selection_rule: TubeSelectionRule,
        TubeSelectionRuleBuilder
    }

    grpc_collection_property! {
        boolean_selection_rules, create_boolean_selection_rule: BooleanSelectionRule,
        BooleanSelectionRuleBuilder
    }

    grpc_collection_property! {
        cutoff_selection_rules, create_cutoff_selection_rule: CutoffSelectionRule,
        CutoffSelectionRuleBuilder
    }

    grpc_collection_property! {
        oriented_selection_sets, create_oriented_selection_set: OrientedSelectionSet,
        OrientedSelectionSetBuilder
    }

    grpc_collection_property! {
        modeling_groups, create_modeling_group: ModelingGroup, ModelingGroupBuilder
    }

    grpc_collection_property! {
        cad_geometries, create_cad_geometry: CadGeometry, CadGeometryBuilder
    }

    grpc_collection_property! {
        solid_models, create_solid_model: SolidModel, SolidModelBuilder
    }

    grpc_collection_property! {
        sensors, create_sensor: Sensor, SensorBuilder
    }

    /// Load a model from a native (`.acph5`) file on the server.
    pub(crate) async fn load_from_file(server: &ServerWrapper, path: &str) -> Result<Model> {
        let client = ServiceClient::new(server.channel(), Self::SERVICE_NAME);
        let reply: ObjectInfo<Properties> = client
            .unary(
                "LoadFromFile",
                LoadFromFileRequest {
                    path: path.to_owned(),
                },
            )
            .await
            .map_err(AcpError::from)?;
        Ok(base::from_object_info(reply, Some(server.clone())))
    }

    /// Load a model from an FE input file on the server.
    pub(crate) async fn load_from_fe_file(
        server: &ServerWrapper,
        path: &str,
        format: FeFormat,
        ignored_entities: &[IgnorableEntity],
        convert_section_data: bool,
        unit_system: UnitSystemType,
    ) -> Result<Model> {
        let client = ServiceClient::new(server.channel(), Self::SERVICE_NAME);
        let reply: ObjectInfo<Properties> = client
            .unary(
                "LoadFromFEFile",
                LoadFromFeFileRequest {
                    path: path.to_owned(),
                    format: format.to_wire(),
                    ignored_entities: ignored_entities
                        .iter()
                        .map(|entity| entity.to_wire())
                        .collect(),
                    convert_section_data,
                    unit_system: unit_system.to_wire(),
                },
            )
            .await
            .map_err(AcpError::from)?;
        Ok(base::from_object_info(reply, Some(server.clone())))
    }

    /// Recompute the lay-up on the server.
    pub async fn update(&self, relations_only: bool) -> Result<()> {
        let client = base::service_client(self)?;
        let _: Empty = client
            .unary(
                "Update",
                UpdateRequest {
                    resource_path: base::resource_path_value(self),
                    relations_only,
                },
            )
            .await
            .map_err(AcpError::from)?;
        Ok(())
    }

    /// Save the model as a native (`.acph5`) file. With `save_cache`, the
    /// computed results (analysis plies, solid models) are stored too.
    pub async fn save(&self, path: impl AsRef<Path>, save_cache: bool) -> Result<()> {
        let server = base::server_wrapper(self)?;
        let client = base::service_client(self)?;
        let resource_path = base::resource_path_value(self);
        filetransfer::with_export_path(server.transfer(), path.as_ref(), |export_path| {
            let client = client.clone();
            let resource_path = resource_path.clone();
            async move {
                let _: Empty = client
                    .unary(
                        "SaveToFile",
                        SaveToFileRequest {
                            resource_path,
                            path: export_path,
                            save_cache,
                        },
                    )
                    .await
                    .map_err(AcpError::from)?;
                Ok(())
            }
        })
        .await
    }

    /// Save the analysis model (mesh plus lay-up) as a solver input file.
    pub async fn save_analysis_model(&self, path: impl AsRef<Path>) -> Result<()> {
        let server = base::server_wrapper(self)?;
        let client = base::service_client(self)?;
        let resource_path = base::resource_path_value(self);
        filetransfer::with_export_path(server.transfer(), path.as_ref(), |export_path| {
            let client = client.clone();
            let resource_path = resource_path.clone();
            async move {
                let _: Empty = client
                    .unary(
                        "SaveAnalysisModel",
                        SaveAnalysisModelRequest {
                            resource_path,
                            path: export_path,
                        },
                    )
                    .await
                    .map_err(AcpError::from)?;
                Ok(())
            }
        })
        .await
    }

    /// Export the shell lay-up as an HDF5 composite definitions file.
    pub async fn export_shell_composite_definitions(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let server = base::server_wrapper(self)?;
        let client = base::service_client(self)?;
        let resource_path = base::resource_path_value(self);
        filetransfer::with_export_path(server.transfer(), path.as_ref(), |export_path| {
            let client = client.clone();
            let resource_path = resource_path.clone();
            async move {
                let _: Empty = client
                    .unary(
                        "SaveShellCompositeDefinitions",
                        SaveShellCompositeDefinitionsRequest {
                            resource_path,
                            path: export_path,
                        },
                    )
                    .await
                    .map_err(AcpError::from)?;
                Ok(())
            }
        })
        .await
    }

    /// Write the model's materials to a MatML (XML) file.
    pub async fn export_materials(&self, path: impl AsRef<Path>) -> Result<()> {
        let server = base::server_wrapper(self)?;
        let collection_path = crate::paths::join([
            base::resource_path_value(self).as_str(),
            Material::COLLECTION_LABEL,
        ]);
        let client = ServiceClient::new(server.channel(), Material::SERVICE_NAME);
        filetransfer::with_export_path(server.transfer(), path.as_ref(), |export_path| {
            let client = client.clone();
            let collection_path = collection_path.clone();
            async move {
                let _: Empty = client
                    .unary(
                        "SaveToFile",
                        MaterialSaveToFileRequest {
                            collection_path,
                            path: export_path,
                            format: crate::api::material::SaveToFileFormat::AnsysXml as i32,
                        },
                    )
                    .await
                    .map_err(AcpError::from)?;
                Ok(())
            }
        })
        .await
    }

    /// The surface mesh of the model.
    pub async fn mesh(&self) -> Result<MeshData> {
        mesh::query_mesh(self).await
    }

    /// Elemental data of the model.
    pub async fn elemental_data(&self) -> Result<ModelElementalData> {
        let mut fields = mesh::query_data(
            self,
            DataLocation::Elemental,
            &[
                "normal",
                "thickness",
                "relative_thickness_correction",
                "area",
                "price",
                "volume",
                "mass",
                "offset",
                "cog",
            ],
        )
        .await?;
        Ok(ModelElementalData {
            normal: mesh::take_vector(&mut fields, "normal")?,
            thickness: mesh::take_scalar(&mut fields, "thickness")?,
            relative_thickness_correction: mesh::take_scalar(
                &mut fields,
                "relative_thickness_correction",
            )?,
            area: mesh::take_scalar(&mut fields, "area")?,
            price: mesh::take_scalar(&mut fields, "price")?,
            volume: mesh::take_scalar(&mut fields, "volume")?,
            mass: mesh::take_scalar(&mut fields, "mass")?,
            offset: mesh::take_scalar(&mut fields, "offset")?,
            cog: mesh::take_vector(&mut fields, "cog")?,
        })
    }

    /// Nodal data of the model. Carries no fields; queried for the label
    /// set only.
    pub async fn nodal_data(&self) -> Result<ModelNodalData> {
        let _fields = mesh::query_data(self, DataLocation::Nodal, &[]).await?;
        Ok(ModelNodalData {})
    }
}

/// Elemental data of a model.
#[derive(Clone, Debug)]
pub struct ModelElementalData {
    pub normal: Option<VectorData>,
    pub thickness: Option<ScalarData>,
    pub relative_thickness_correction: Option<ScalarData>,
    pub area: Option<ScalarData>,
    pub price: Option<ScalarData>,
    pub volume: Option<ScalarData>,
    pub mass: Option<ScalarData>,
    pub offset: Option<ScalarData>,
    pub cog: Option<VectorData>,
}

/// Nodal data of a model.
#[derive(Clone, Debug)]
pub struct ModelNodalData {}
