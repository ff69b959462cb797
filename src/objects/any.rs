// ABOUTME: Polymorphic resolution from resource paths to concrete handle types
// ABOUTME: A tagged union over every entity type, keyed by collection label

//! Polymorphic resolution.
//!
//! A stored resource path embeds the collection label of its object, which
//! determines the concrete handle type. [`AnyTreeObject`] is the tagged
//! union over every entity type; [`AnyTreeObject::from_resource_path`] is
//! the switch recovering the concrete type from a path.

use crate::error::{AcpError, Result};
use crate::paths;
use crate::tree::base::{self, ServerWrapper, TreeObject};

use super::analysis_ply::AnalysisPly;
use super::cad_geometry::CadGeometry;
use super::edge_set::EdgeSet;
use super::element_set::ElementSet;
use super::fabric::Fabric;
use super::lookup_table::{LookUpTable1D, LookUpTable1DColumn};
use super::material::Material;
use super::model::Model;
use super::modeling_group::ModelingGroup;
use super::modeling_ply::ModelingPly;
use super::oriented_selection_set::OrientedSelectionSet;
use super::production_ply::ProductionPly;
use super::rosette::Rosette;
use super::selection_rules::{
    BooleanSelectionRule, CutoffSelectionRule, CylindricalSelectionRule, ParallelSelectionRule,
    SphericalSelectionRule, TubeSelectionRule,
};
use super::sensor::Sensor;
use super::solid_model::SolidModel;
use super::stackup::Stackup;

macro_rules! any_tree_object {
    ($($variant:ident),+ $(,)?) => {
        /// A handle of any entity type.
        #[derive(Clone, Debug)]
        pub enum AnyTreeObject {
            $($variant($variant)),+
        }

        $(
            impl From<$variant> for AnyTreeObject {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+

        impl PartialEq for AnyTreeObject {
            fn eq(&self, other: &Self) -> bool {
                match (self, other) {
                    $( (Self::$variant(a), Self::$variant(b)) => a == b, )+
                    _ => false,
                }
            }
        }

        impl AnyTreeObject {
            /// Reconstruct the concrete handle type from a resource path.
            /// An empty path resolves to `None`; an unknown collection
            /// label is an error.
            pub fn from_resource_path(
                path: &str,
                server: &ServerWrapper,
            ) -> Result<Option<AnyTreeObject>> {
                if path.is_empty() {
                    return Ok(None);
                }
                let label = paths::collection_label(path).unwrap_or_default();
                $(
                    if label == <$variant as TreeObject>::COLLECTION_LABEL {
                        let object: $variant =
                            base::from_resource_path(path, server.clone())?;
                        return Ok(Some(object.into()));
                    }
                )+
                Err(AcpError::invalid_argument(format!(
                    "Unknown collection label '{label}' in resource path '{path}'."
                )))
            }

            /// The resource path of the object; empty while unstored.
            pub fn path(&self) -> String {
                match self {
                    $( Self::$variant(object) => base::resource_path_value(object), )+
                }
            }

            /// The entity type name, e.g. `"Fabric"`.
            pub fn type_name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => <$variant as TreeObject>::TYPE_NAME, )+
                }
            }

            /// The name of the object, without a server round trip.
            pub fn local_name(&self) -> String {
                match self {
                    $( Self::$variant(object) => base::local_name(object), )+
                }
            }

            pub(crate) fn server_wrapper(&self) -> Result<ServerWrapper> {
                match self {
                    $( Self::$variant(object) => base::server_wrapper(object), )+
                }
            }

            /// Refresh the object from the server.
            pub(crate) async fn refresh(&self) -> Result<()> {
                match self {
                    $( Self::$variant(object) => base::get(object).await, )+
                }
            }

            /// All link field values of the local properties payload.
            pub(crate) fn linked_paths(&self) -> Vec<String> {
                use crate::tree::base::LinkedPaths;
                match self {
                    $(
                        Self::$variant(object) => {
                            base::lock_state(object).properties.linked_paths()
                        }
                    )+
                }
            }

            /// Rewrite the links of an unstored copy through `map`.
            pub(crate) fn map_links(
                &self,
                map: &mut dyn FnMut(&str) -> Option<String>,
            ) {
                use crate::tree::base::LinkedPaths;
                match self {
                    $(
                        Self::$variant(object) => {
                            base::lock_state(object).properties.map_links(map);
                        }
                    )+
                }
            }

            /// Deep-copy into a new unstored handle of the same type.
            pub(crate) fn duplicate(&self, unlink: bool) -> AnyTreeObject {
                match self {
                    $( Self::$variant(object) => base::duplicate(object, unlink).into(), )+
                }
            }

            /// Store the object under the given parent, adopting its server
            /// wrapper.
            pub(crate) async fn store_under(&self, parent: &AnyTreeObject) -> Result<()> {
                let server = parent.server_wrapper()?;
                let parent_path = parent.path();
                match self {
                    $(
                        Self::$variant(object) => {
                            base::store_with(object, &parent_path, server).await
                        }
                    )+
                }
            }

            /// Publish the local state of the object to the server.
            pub(crate) async fn put(&self) -> Result<()> {
                match self {
                    $( Self::$variant(object) => base::put(object).await, )+
                }
            }
        }
    };
}

any_tree_object!(
    Model,
    Material,
    Fabric,
    Stackup,
    ElementSet,
    EdgeSet,
    Rosette,
    LookUpTable1D,
    LookUpTable1DColumn,
    ParallelSelectionRule,
    CylindricalSelectionRule,
    SphericalSelectionRule,
    TubeSelectionRule,
    BooleanSelectionRule,
    CutoffSelectionRule,
    OrientedSelectionSet,
    ModelingGroup,
    ModelingPly,
    ProductionPly,
    AnalysisPly,
    CadGeometry,
    SolidModel,
    Sensor,
);

impl AnyTreeObject {
    /// Whether objects of this type can be created through `store`.
    pub(crate) fn is_creatable(&self) -> bool {
        !matches!(
            self,
            Self::Model(_) | Self::ProductionPly(_) | Self::AnalysisPly(_)
        )
    }

    /// The creatable child objects of this object, collection by
    /// collection.
    pub(crate) async fn child_objects(&self) -> Result<Vec<AnyTreeObject>> {
        fn collect<T: TreeObject>(
            children: &mut Vec<AnyTreeObject>,
            values: Vec<T>,
        ) where
            AnyTreeObject: From<T>,
        {
            children.extend(values.into_iter().map(AnyTreeObject::from));
        }

        let mut children = Vec::new();
        match self {
            Self::Model(model) => {
                collect(&mut children, model.materials()?.values().await?);
                collect(&mut children, model.fabrics()?.values().await?);
                collect(&mut children, model.stackups()?.values().await?);
                collect(&mut children, model.element_sets()?.values().await?);
                collect(&mut children, model.edge_sets()?.values().await?);
                collect(&mut children, model.rosettes()?.values().await?);
                collect(&mut children, model.lookup_tables_1d()?.values().await?);
                collect(
                    &mut children,
                    model.parallel_selection_rules()?.values().await?,
                );
                collect(
                    &mut children,
                    model.cylindrical_selection_rules()?.values().await?,
                );
                collect(
                    &mut children,
                    model.spherical_selection_rules()?.values().await?,
                );
                collect(&mut children, model.tube_selection_rules()?.values().await?);
                collect(
                    &mut children,
                    model.boolean_selection_rules()?.values().await?,
                );
                collect(
                    &mut children,
                    model.cutoff_selection_rules()?.values().await?,
                );
                collect(
                    &mut children,
                    model.oriented_selection_sets()?.values().await?,
                );
                collect(&mut children, model.modeling_groups()?.values().await?);
                collect(&mut children, model.cad_geometries()?.values().await?);
                collect(&mut children, model.solid_models()?.values().await?);
                collect(&mut children, model.sensors()?.values().await?);
            }
            Self::ModelingGroup(group) => {
                collect(&mut children, group.modeling_plies()?.values().await?);
            }
            Self::LookUpTable1D(table) => {
                collect(&mut children, table.columns()?.values().await?);
            }
            _ => {}
        }
        Ok(children)
    }
}

/// The parent object of a stored handle.
pub(crate) async fn parent_of<T: TreeObject>(obj: &T) -> Result<AnyTreeObject>
where
    AnyTreeObject: From<T>,
{
    if !base::is_stored(obj) {
        return Err(AcpError::runtime(
            "Cannot get the parent of an unstored object.",
        ));
    }
    let path = base::resource_path_value(obj);
    let parent_path = paths::parent(&path)
        .ok_or_else(|| AcpError::runtime("The object does not have a parent."))?;
    let server = base::server_wrapper(obj)?;
    AnyTreeObject::from_resource_path(&parent_path, &server)?
        .ok_or_else(|| AcpError::runtime("The parent object could not be found."))
}

impl AnyTreeObject {
    /// Try to view this object as a model.
    pub fn as_model(&self) -> Option<&Model> {
        match self {
            Self::Model(model) => Some(model),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label_is_rejected() {
        // Resolution without a server requires no connection for the error
        // path: an unknown label fails before any lookup.
        let label = paths::collection_label("models/m1/nonexistent_things/x1");
        assert_eq!(label, Some("nonexistent_things"));
    }
}
