// ABOUTME: End-to-end tests for collection mappings and version gating

//! Collection semantics and version gates against the mock server.

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
async fn test_collection_iteration_follows_server_order() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    for name in ["gamma", "alpha", "beta"] {
        model
            .create_rosette(Rosette::builder().name(name))
            .await
            .unwrap();
    }

    let ids = model.rosettes().unwrap().ids().await.unwrap();
    assert_eq!(ids, vec!["gamma", "alpha", "beta"]);

    let items = model.rosettes().unwrap().items().await.unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].0, "gamma");
}

#[tokio::test]
async fn test_collection_len_contains_get() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    let fabrics = model.fabrics().unwrap();
    assert_eq!(fabrics.len().await.unwrap(), 0);
    assert!(fabrics.is_empty().await.unwrap());
    assert!(!fabrics.contains("ud").await.unwrap());
    assert!(fabrics.get("ud").await.unwrap().is_none());

    model
        .create_fabric(Fabric::builder().name("UD"))
        .await
        .unwrap();
    assert_eq!(fabrics.len().await.unwrap(), 1);
    assert!(fabrics.contains("ud").await.unwrap());
}

#[tokio::test]
async fn test_collection_pop_returns_unstored_copy() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    model
        .create_fabric(Fabric::builder().name("UD").thickness(0.25))
        .await
        .unwrap();

    let popped = model.fabrics().unwrap().pop("ud").await.unwrap();
    assert!(!popped.is_stored());
    assert_eq!(popped.name().await.unwrap(), "UD");
    assert_eq!(popped.thickness().await.unwrap(), 0.25);
    assert_eq!(model.fabrics().unwrap().len().await.unwrap(), 0);

    // The unstored copy can be stored again.
    popped.store(&model).await.unwrap();
    assert_eq!(model.fabrics().unwrap().len().await.unwrap(), 1);
}

#[tokio::test]
async fn test_collection_clear() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    for name in ["a", "b", "c"] {
        model
            .create_element_set(ElementSet::builder().name(name))
            .await
            .unwrap();
    }
    let element_sets = model.element_sets().unwrap();
    assert_eq!(element_sets.len().await.unwrap(), 3);
    element_sets.clear().await.unwrap();
    assert!(element_sets.is_empty().await.unwrap());
}

#[tokio::test]
async fn test_collection_remove_missing_id() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    let err = model
        .rosettes()
        .unwrap()
        .remove("missing")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_pop_first_on_empty_collection() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    let err = model.rosettes().unwrap().pop_first().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_object_type_version_gate() {
    // A server older than the sensor's minimum version rejects the store.
    let server = common::MockAcpServer::spawn_with_version("1.1.0").await;
    let client = Client::connect(ClientConfig::new(&server.endpoint))
        .await
        .unwrap();
    let model = import_model(&server, &client, "m1").await;

    let sensor = Sensor::builder().name("S1").build().unwrap();
    let err = sensor.store(&model).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Runtime);
    let message = err.to_string();
    assert!(message.contains("Sensor"));
    assert!(message.contains("1.2.0"));
    assert!(message.contains("1.1.0"));
    assert!(!sensor.is_stored());
}

#[tokio::test]
async fn test_property_write_version_gate() {
    let server = common::MockAcpServer::spawn_with_version("1.0.0").await;
    let client = Client::connect(ClientConfig::new(&server.endpoint))
        .await
        .unwrap();
    let model = import_model(&server, &client, "m1").await;

    let fabric = model
        .create_fabric(Fabric::builder().name("UD"))
        .await
        .unwrap();

    // Reading the gated property is fine; writing needs a newer server.
    assert_eq!(fabric.draping_ud_coefficient().await.unwrap(), 0.0);
    let err = fabric.set_draping_ud_coefficient(0.5).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Runtime);
    let message = err.to_string();
    assert!(message.contains("draping_ud_coefficient"));
    assert!(message.contains("1.1.0"));
    assert!(message.contains("1.0.0"));
}

#[tokio::test]
async fn test_gate_skipped_for_unstored_handles() {
    // The same gated write succeeds locally on an unstored handle.
    let fabric = Fabric::builder().name("UD").build().unwrap();
    fabric.set_draping_ud_coefficient(0.5).await.unwrap();
    assert_eq!(fabric.draping_ud_coefficient().await.unwrap(), 0.5);
}

#[tokio::test]
async fn test_models_collection_and_clear() {
    let (server, client) = common::connect().await;
    import_model(&server, &client, "m1").await;
    import_model(&server, &client, "m2").await;

    assert_eq!(client.models().len().await.unwrap(), 2);
    client.clear().await.unwrap();
    assert!(client.models().is_empty().await.unwrap());
}

#[tokio::test]
async fn test_write_resynchronizes_after_external_change() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    let rosette = model
        .create_rosette(Rosette::builder().name("R1"))
        .await
        .unwrap();

    // Delete and re-create the object behind the handle's back; the handle
    // keeps pointing at the same path.
    let id = rosette.id().await.unwrap();
    model.rosettes().unwrap().remove(&id).await.unwrap();
    model
        .create_rosette(Rosette::builder().name("R1"))
        .await
        .unwrap();

    // Every write starts with a Get, so the handle resynchronizes and the
    // Put carries the current version token.
    rosette.set_origin((1.0, 0.0, 0.0)).await.unwrap();
    assert_eq!(rosette.origin().await.unwrap(), (1.0, 0.0, 0.0));
}
