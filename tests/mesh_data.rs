// ABOUTME: End-to-end tests for mesh and elemental/nodal data adapters

//! Mesh queries against the mock server.

mod common;

use acp_client::prelude::*;

async fn import_model(
    server: &common::MockAcpServer,
    client: &Client,
    prefix: &str,
) -> Model {
    let filename = common::unique_model_file(prefix);
    server.seed_file(&filename, b"mock model file");
    client
        .import_model(None, filename.as_str())
        .await
        .expect("failed to import model")
}

#[tokio::test]
async fn test_model_mesh_arrays() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    let mesh = model.mesh().await.unwrap();
    assert_eq!(mesh.node_labels.len(), 4);
    assert_eq!(mesh.node_coordinates.shape(), &[4, 3]);
    assert_eq!(mesh.element_labels.len(), 2);
    assert_eq!(mesh.element_nodes.len(), 6);
    assert_eq!(mesh.element_nodes_offsets.len(), 2);
    assert_eq!(mesh.node_coordinates[(1, 0)], 1.0);
}

#[tokio::test]
async fn test_model_elemental_data_fields() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    let data = model.elemental_data().await.unwrap();
    let thickness = data.thickness.expect("thickness field present");
    assert_eq!(thickness.values().len(), 2);
    assert_eq!(thickness.values()[0], 1.0);
    assert_eq!(thickness.component_name(), "thickness");

    let normal = data.normal.expect("normal field present");
    assert_eq!(normal.values().shape(), &[2, 3]);
    assert_eq!(normal.values()[(0, 2)], 1.0);
}

#[tokio::test]
async fn test_expand_to_mesh_by_labels() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    let mesh = model.mesh().await.unwrap();
    let data = model.elemental_data().await.unwrap();
    let thickness = data.thickness.unwrap();

    // The data labels match the mesh element labels, so the expansion is
    // dense.
    let expanded = thickness.expand_to_mesh(&mesh);
    assert_eq!(expanded.len(), mesh.element_labels.len());
    assert!(expanded.iter().all(|value| !value.is_nan()));
}

#[tokio::test]
async fn test_modeling_ply_data() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    let group = model
        .create_modeling_group(ModelingGroup::builder().name("Group.1"))
        .await
        .unwrap();
    let ply = group
        .create_modeling_ply(ModelingPly::builder().name("Ply.1"))
        .await
        .unwrap();

    let elemental = ply.elemental_data().await.unwrap();
    assert!(elemental.fiber_direction.is_some());
    assert!(elemental.mass.is_some());

    let nodal = ply.nodal_data().await.unwrap();
    let ply_offset = nodal.ply_offset.expect("ply_offset field present");
    assert_eq!(ply_offset.location(), DataLocation::Nodal);
}

#[tokio::test]
async fn test_cad_geometry_visualization_mesh() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    let geometry = model
        .create_cad_geometry(CadGeometry::builder().name("wing"))
        .await
        .unwrap();
    let mesh = geometry.visualization_mesh().await.unwrap();
    assert_eq!(mesh.vertices.shape(), &[3, 3]);
    assert_eq!(mesh.triangles.len(), 3);
}

#[tokio::test]
async fn test_mesh_query_on_deleted_object_fails() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;
    let id = model.id().await.unwrap();

    client.models().remove(&id).await.unwrap();
    let err = model.mesh().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
