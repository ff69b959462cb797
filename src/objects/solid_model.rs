// ABOUTME: Solid model entity: extruded 3D lay-up with file export

//! Solid models.

use crate::api::base::Empty;
use crate::api::solid_model::{ExportRequest, Properties};
use crate::error::{AcpError, Result};
use crate::filetransfer;
use crate::objects::enums::{SolidModelExportFormat, StatusType, WireEnum};
use crate::tree::base;
use crate::tree::macros::{
    define_tree_object, grpc_data_property, grpc_enum_property_read_only,
    grpc_linked_object_list, impl_creatable_object, impl_editable_object, impl_linked_paths,
};

use super::element_set::ElementSet;
use super::model::Model;

impl_linked_paths!(Properties {
    singles: [],
    lists: [element_sets],
    edges: [],
});

define_tree_object! {
    /// A 3D lay-up extruded from element sets.
    pub struct SolidModel {
        collection_label: "solid_models",
        service: "acp.api.v0.solid_model.ObjectService",
        properties: crate::api::solid_model::Properties,
        supported_since: "1.1.0",
        property_names: [
            "name", "id", "status", "active", "element_sets",
            "max_element_thickness", "delete_bad_elements", "warping_limit",
        ],
    }
}

impl_editable_object!(SolidModel);
impl_creatable_object!(SolidModel, parent: Model);

impl SolidModel {
    pub fn builder() -> SolidModelBuilder {
        SolidModelBuilder::new()
    }

    grpc_enum_property_read_only! {
        status: StatusType, status
    }

    grpc_data_property! {
        /// Inactive solid models are ignored in the lay-up computation.
        active, set_active: bool, active
    }

    grpc_linked_object_list! {
        /// Element sets the solid model is extruded from.
        element_sets, set_element_sets: ElementSet, element_sets
    }

    grpc_data_property! {
        /// Elements thicker than this limit are split during extrusion.
        max_element_thickness, set_max_element_thickness: f64, max_element_thickness
    }

    grpc_data_property! {
        /// Drop badly shaped elements during extrusion.
        delete_bad_elements, set_delete_bad_elements: bool, delete_bad_elements
    }

    grpc_data_property! {
        /// Warping limit used when bad elements are dropped.
        warping_limit, set_warping_limit: f64, warping_limit
    }

    /// Export the solid model to a file. The path may be local; the export
    /// is downloaded from the server when it runs remotely.
    pub async fn export(
        &self,
        path: impl AsRef<std::path::Path>,
        format: SolidModelExportFormat,
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
                        "Export",
                        ExportRequest {
                            resource_path,
                            path: export_path,
                            format: format.to_wire(),
                        },
                    )
                    .await
                    .map_err(AcpError::from)?;
                Ok(())
            }
        })
        .await
    }
}

/// Builder for unstored [`SolidModel`] objects.
#[derive(Debug)]
pub struct SolidModelBuilder {
    name: String,
    properties: Properties,
    error: Option<AcpError>,
}

impl Default for SolidModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolidModelBuilder {
    pub fn new() -> Self {
        Self {
            name: "SolidModel".to_owned(),
            properties: Properties {
                active: true,
                ..Default::default()
            },
            error: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.properties.active = active;
        self
    }

    pub fn element_sets(mut self, element_sets: &[ElementSet]) -> Self {
        for element_set in element_sets {
            match crate::objects::stored_link_path("element_sets", element_set) {
                Ok(path) => self.properties.element_sets.push(path),
                Err(err) => {
                    self.error = Some(err);
                    break;
                }
            }
        }
        self
    }

    pub fn max_element_thickness(mut self, value: f64) -> Self {
        self.properties.max_element_thickness = value;
        self
    }

    pub fn delete_bad_elements(mut self, value: bool) -> Self {
        self.properties.delete_bad_elements = value;
        self
    }

    pub fn warping_limit(mut self, value: f64) -> Self {
        self.properties.warping_limit = value;
        self
    }

    /// Finish the builder, producing an unstored solid model.
    pub fn build(self) -> Result<SolidModel> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(base::new_unstored_with(&self.name, self.properties))
    }
}
