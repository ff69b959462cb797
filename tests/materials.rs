// ABOUTME: End-to-end tests for material property sets and model update

//! Material property sets against the mock server.

mod common;

use std::time::Duration;

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
async fn test_density_property_set_roundtrip() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    let material = model
        .create_material(
            Material::builder()
                .name("Epoxy")
                .density(ConstantDensity { rho: 1540.0 }),
        )
        .await
        .unwrap();

    match material.density().await.unwrap() {
        Some(DensityPropertySet::Constant(density)) => assert_eq!(density.rho, 1540.0),
        other => panic!("expected a constant density, got {other:?}"),
    }

    material
        .set_density(Some(ConstantDensity { rho: 1600.0 }))
        .await
        .unwrap();
    match material.density().await.unwrap() {
        Some(DensityPropertySet::Constant(density)) => assert_eq!(density.rho, 1600.0),
        other => panic!("expected a constant density, got {other:?}"),
    }

    material.set_density(None).await.unwrap();
    assert!(material.density().await.unwrap().is_none());
}

#[tokio::test]
async fn test_engineering_constants_polymorphism() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    let material = model
        .create_material(Material::builder().name("Epoxy"))
        .await
        .unwrap();
    assert!(material.engineering_constants().await.unwrap().is_none());

    // Isotropic shape.
    material
        .set_engineering_constants(Some(ConstantEngineeringConstants::Isotropic(
            ConstantIsotropicEngineeringConstants { e: 3.5e9, nu: 0.35 },
        )))
        .await
        .unwrap();
    match material.engineering_constants().await.unwrap() {
        Some(EngineeringConstantsPropertySet::ConstantIsotropic(constants)) => {
            assert_eq!(constants.e, 3.5e9);
            assert_eq!(constants.nu, 0.35);
        }
        other => panic!("expected isotropic constants, got {other:?}"),
    }

    // Switching to the orthotropic shape replaces the oneof payload.
    material
        .set_engineering_constants(Some(ConstantEngineeringConstants::Orthotropic(
            ConstantOrthotropicEngineeringConstants {
                e1: 1.2e11,
                e2: 1.0e10,
                e3: 1.0e10,
                nu12: 0.3,
                nu23: 0.4,
                nu13: 0.3,
                g12: 5.0e9,
                g23: 4.0e9,
                g31: 5.0e9,
            },
        )))
        .await
        .unwrap();
    match material.engineering_constants().await.unwrap() {
        Some(EngineeringConstantsPropertySet::ConstantOrthotropic(constants)) => {
            assert_eq!(constants.e1, 1.2e11);
            assert_eq!(constants.g23, 4.0e9);
        }
        other => panic!("expected orthotropic constants, got {other:?}"),
    }
}

#[tokio::test]
async fn test_material_ply_type() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    let material = model
        .create_material(Material::builder().name("Core").ply_type(PlyType::HoneycombCore))
        .await
        .unwrap();
    assert_eq!(material.ply_type().await.unwrap(), PlyType::HoneycombCore);

    material.set_ply_type(PlyType::Regular).await.unwrap();
    assert_eq!(material.ply_type().await.unwrap(), PlyType::Regular);
}

#[tokio::test]
async fn test_model_update() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    model.update(false).await.unwrap();
    model.update(true).await.unwrap();
}

#[tokio::test]
async fn test_wait_for_server() {
    let (_server, client) = common::connect().await;
    client
        .wait_for_server(Duration::from_secs(5))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_connect_to_unreachable_server_fails() {
    // Nothing listens on this port; the connect must fail cleanly.
    let config = ClientConfig {
        connect_timeout_ms: 500,
        ..ClientConfig::new("http://127.0.0.1:1")
    };
    let err = Client::connect(config).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unavailable);
}
