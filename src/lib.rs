// ABOUTME: Main library entry point for the ACP client
// ABOUTME: Typed object tree over the ACP composite layup modeling gRPC server

//! # ACP Client
//!
//! A typed, object-oriented client for the ACP composite layup modeling
//! server. User code holds handles to server-resident entities (models,
//! materials, fabrics, modeling plies, selection rules, ...) and mutates
//! them through accessor methods; every mutation is a gRPC round trip that
//! keeps the local handle in lockstep with the authoritative server state.
//!
//! ## Key pieces
//!
//! - **Handles with identity.** At most one live handle exists per server
//!   resource; reconstructing a handle from a resource path returns the
//!   cached instance.
//! - **Synchronized properties.** Reads refresh from the server, writes
//!   compare and republish only on real changes, with optimistic
//!   concurrency through the server's version token.
//! - **Version gating.** Operations declare the minimum server version
//!   they need and fail early against older servers.
//! - **Transparent file transfer.** Paths are always given as local paths;
//!   uploads and downloads happen automatically when the server is remote.
//!
//! ## Quick start
//!
//! ```no_run
//! use acp_client::prelude::*;
//!
//! # async fn example() -> acp_client::Result<()> {
//! let client = Client::connect(ClientConfig::new("http://127.0.0.1:50555")).await?;
//! let model = client.import_model(Some("Demo"), "model.acph5").await?;
//!
//! let rosette = model
//!     .create_rosette(Rosette::builder().name("R1").origin((0.0, 0.0, 0.0)))
//!     .await?;
//! rosette.set_origin((2.0, 3.0, 1.0)).await?;
//!
//! let material = model.create_material(Material::builder().name("Epoxy")).await?;
//! let fabric = model
//!     .create_fabric(Fabric::builder().name("UD").material(&material).thickness(0.2))
//!     .await?;
//! # let _ = fabric;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod constants;
pub mod error;
pub mod filetransfer;
pub mod mesh;
pub mod objects;
pub mod paths;
pub mod rpc;
pub mod tree;
pub(crate) mod version;

pub use client::{Client, ClientConfig, FeImportOptions};
pub use error::{AcpError, ErrorKind, Result};
pub use tree::clone::recursive_copy;

// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::client::{Client, ClientConfig, FeImportOptions};
    pub use crate::error::{AcpError, ErrorKind, Result};
    pub use crate::mesh::{DataLocation, MeshData, ScalarData, VectorData};
    pub use crate::objects::enums::*;
    pub use crate::objects::{
        AnalysisPly, AnyTreeObject, BooleanSelectionRule, CadGeometry, CutoffSelectionRule,
        CylindricalSelectionRule, EdgeSet, ElementSet, Fabric, FabricWithAngle,
        LinkableSelectionRule, LinkedSelectionRule, LookUpTable1D, LookUpTable1DColumn,
        Material, Model, ModelingGroup, ModelingPly, OrientedSelectionSet,
        ParallelSelectionRule, PlyMaterial, ProductionPly, Rosette, SensorEntity, Sensor,
        SolidModel, SphericalSelectionRule, Stackup, TubeSelectionRule,
    };
    pub use crate::objects::material::property_sets::{
        ConstantDensity, ConstantEngineeringConstants, ConstantIsotropicEngineeringConstants,
        ConstantOrthotropicEngineeringConstants, DensityPropertySet,
        EngineeringConstantsPropertySet,
    };
    pub use crate::paths::ResourcePath;
    pub use crate::recursive_copy;
    pub use crate::tree::{Collection, EdgePropertyList, LinkedObjectList};
}
