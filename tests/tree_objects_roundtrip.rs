// ABOUTME: End-to-end tests for handle lifecycle, identity and property sync

//! Create/read/mutate round trips against the mock server.

mod common;

use acp_client::prelude::*;
use acp_client::tree::TreeObject;
use std::sync::Arc;

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
async fn test_create_and_read_rosette() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "model").await;

    let rosette = model
        .create_rosette(
            Rosette::builder()
                .name("R1")
                .origin((0.0, 0.0, 0.0))
                .dir1((1.0, 0.0, 0.0))
                .dir2((0.0, 1.0, 0.0)),
        )
        .await
        .unwrap();

    let id = rosette.id().await.unwrap();
    assert!(!id.is_empty());
    assert_eq!(rosette.name().await.unwrap(), "R1");
    assert_eq!(rosette.origin().await.unwrap(), (0.0, 0.0, 0.0));
    assert_eq!(rosette.version(), 1);

    // The collection returns the identical handle while it is live.
    let fetched = model
        .rosettes()
        .unwrap()
        .get(&id)
        .await
        .unwrap()
        .expect("rosette must be listed");
    assert_eq!(fetched, rosette);
    assert!(Arc::ptr_eq(fetched.inner(), rosette.inner()));
}

#[tokio::test]
async fn test_mutate_and_republish() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "model").await;

    let rosette = model
        .create_rosette(Rosette::builder().name("R1"))
        .await
        .unwrap();
    let initial_version = rosette.version();

    rosette.set_origin((2.0, 3.0, 1.0)).await.unwrap();
    assert_eq!(rosette.origin().await.unwrap(), (2.0, 3.0, 1.0));
    assert!(rosette.version() > initial_version);

    // Writing the same value again skips the Put: the version is unchanged.
    let version_after_write = rosette.version();
    rosette.set_origin((2.0, 3.0, 1.0)).await.unwrap();
    assert_eq!(rosette.version(), version_after_write);
}

#[tokio::test]
async fn test_version_is_monotonic_across_writes() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "model").await;

    let fabric = model
        .create_fabric(Fabric::builder().name("F1"))
        .await
        .unwrap();
    let mut last_version = fabric.version();
    for thickness in [0.1, 0.2, 0.3] {
        fabric.set_thickness(thickness).await.unwrap();
        assert!(fabric.version() > last_version);
        last_version = fabric.version();
    }
}

#[tokio::test]
async fn test_delete_and_reuse() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "model").await;

    let group = model
        .create_modeling_group(ModelingGroup::builder().name("Group.1"))
        .await
        .unwrap();
    let id = group.id().await.unwrap();

    model.modeling_groups().unwrap().remove(&id).await.unwrap();

    // The removed handle is unusable; the server reports not-found.
    let err = group.name().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // Re-creating a group with the same name (and thus id) is allowed.
    let recreated = model
        .create_modeling_group(ModelingGroup::builder().name("Group.1"))
        .await
        .unwrap();
    assert_eq!(recreated.id().await.unwrap(), id);
}

#[tokio::test]
async fn test_unstored_handles_read_and_write_locally() {
    let fabric = Fabric::builder().name("local").build().unwrap();
    assert!(!fabric.is_stored());
    assert!(fabric.resource_path().is_empty());

    // No server round trip happens for unstored handles.
    fabric.set_thickness(1.25).await.unwrap();
    assert_eq!(fabric.thickness().await.unwrap(), 1.25);
    assert_eq!(fabric.name().await.unwrap(), "local");
}

#[tokio::test]
async fn test_unstored_equality_is_identity() {
    let first = Fabric::builder().name("a").build().unwrap();
    let second = Fabric::builder().name("a").build().unwrap();
    assert_ne!(first, second);
    assert_eq!(first, first.clone());
}

#[tokio::test]
async fn test_rename_roundtrip() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "model").await;

    let material = model
        .create_material(Material::builder().name("Epoxy"))
        .await
        .unwrap();
    material.set_name("Epoxy Carbon").await.unwrap();
    assert_eq!(material.name().await.unwrap(), "Epoxy Carbon");

    // The id stays stable across renames.
    assert_eq!(material.id().await.unwrap(), "epoxy");
}

#[tokio::test]
async fn test_parent_resolution() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "model").await;

    let group = model
        .create_modeling_group(ModelingGroup::builder().name("Group.1"))
        .await
        .unwrap();
    let ply = group
        .create_modeling_ply(ModelingPly::builder().name("Ply.1"))
        .await
        .unwrap();

    let parent = ply.parent().await.unwrap();
    assert_eq!(parent, AnyTreeObject::from(group.clone()));

    let grandparent = group.parent().await.unwrap();
    assert!(grandparent.as_model().is_some());
}

#[tokio::test]
async fn test_model_scalar_properties() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "model").await;

    assert_eq!(model.unit_system().await.unwrap(), UnitSystemType::Si);
    assert_eq!(model.angle_tolerance().await.unwrap(), 1.0);

    model.set_angle_tolerance(2.5).await.unwrap();
    assert_eq!(model.angle_tolerance().await.unwrap(), 2.5);
}
