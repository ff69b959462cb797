// ABOUTME: End-to-end tests for cloning, unlinking and recursive copy

//! Clone and recursive copy against the mock server.

mod common;

use acp_client::prelude::*;
use acp_client::recursive_copy;

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
async fn test_duplicate_copies_name_and_properties() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    let material = model
        .create_material(Material::builder().name("Epoxy"))
        .await
        .unwrap();
    let fabric = model
        .create_fabric(
            Fabric::builder()
                .name("UD")
                .material(&material)
                .thickness(0.25),
        )
        .await
        .unwrap();

    let copy = fabric.duplicate(false);
    assert!(!copy.is_stored());
    assert_eq!(copy.name().await.unwrap(), "UD");
    assert_eq!(copy.thickness().await.unwrap(), 0.25);

    // Storing the copy under the same model keeps the link.
    copy.store(&model).await.unwrap();
    assert_eq!(copy.material().await.unwrap().unwrap(), material);
    assert_ne!(copy.id().await.unwrap(), fabric.id().await.unwrap());
}

#[tokio::test]
async fn test_duplicate_with_unlink_clears_all_links() {
    let (server, client) = common::connect().await;
    let model = import_model(&server, &client, "m1").await;

    let rosette = model
        .create_rosette(Rosette::builder().name("R1"))
        .await
        .unwrap();
    let element_set = model
        .create_element_set(ElementSet::builder().name("All"))
        .await
        .unwrap();
    let oss = model
        .create_oriented_selection_set(
            OrientedSelectionSet::builder()
                .name("OSS.1")
                .element_sets(std::slice::from_ref(&element_set))
                .rosettes(std::slice::from_ref(&rosette)),
        )
        .await
        .unwrap();

    let copy = oss.duplicate(true);
    copy.store(&model).await.unwrap();
    assert!(copy.element_sets().len().await.unwrap() == 0);
    assert!(copy.rosettes().len().await.unwrap() == 0);
}

#[tokio::test]
async fn test_recursive_copy_rewrites_links() {
    let (server, client) = common::connect().await;
    let model_1 = import_model(&server, &client, "m1").await;
    let model_2 = import_model(&server, &client, "m2").await;

    // Lay-up under model 1: material <- fabric, element set / rosette <-
    // oriented selection set, and a modeling group with one ply using all
    // of them plus a selection rule edge.
    let material = model_1
        .create_material(Material::builder().name("Epoxy"))
        .await
        .unwrap();
    let fabric = model_1
        .create_fabric(Fabric::builder().name("UD").material(&material))
        .await
        .unwrap();
    let element_set = model_1
        .create_element_set(ElementSet::builder().name("All"))
        .await
        .unwrap();
    let rosette = model_1
        .create_rosette(Rosette::builder().name("R1"))
        .await
        .unwrap();
    let oss = model_1
        .create_oriented_selection_set(
            OrientedSelectionSet::builder()
                .name("OSS.1")
                .element_sets(std::slice::from_ref(&element_set))
                .rosettes(std::slice::from_ref(&rosette)),
        )
        .await
        .unwrap();
    let rule = model_1
        .create_parallel_selection_rule(ParallelSelectionRule::builder().name("Rule.1"))
        .await
        .unwrap();
    let group = model_1
        .create_modeling_group(ModelingGroup::builder().name("Group.1"))
        .await
        .unwrap();
    group
        .create_modeling_ply(
            ModelingPly::builder()
                .name("Ply.1")
                .ply_material(fabric.clone())
                .oriented_selection_sets(std::slice::from_ref(&oss))
                .selection_rules(&[LinkedSelectionRule::new(rule.clone())]),
        )
        .await
        .unwrap();

    let new_objects = recursive_copy(
        &[AnyTreeObject::from(group.clone())],
        &[(
            AnyTreeObject::from(model_1.clone()),
            AnyTreeObject::from(model_2.clone()),
        )],
    )
    .await
    .unwrap();
    assert!(!new_objects.is_empty());

    // Everything the ply depends on was cloned into model 2.
    assert_eq!(model_2.fabrics().unwrap().len().await.unwrap(), 1);
    assert_eq!(model_2.materials().unwrap().len().await.unwrap(), 1);
    assert_eq!(model_2.element_sets().unwrap().len().await.unwrap(), 1);
    assert_eq!(model_2.rosettes().unwrap().len().await.unwrap(), 1);
    assert_eq!(
        model_2
            .oriented_selection_sets()
            .unwrap()
            .len()
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        model_2
            .parallel_selection_rules()
            .unwrap()
            .len()
            .await
            .unwrap(),
        1
    );
    assert_eq!(model_2.modeling_groups().unwrap().len().await.unwrap(), 1);

    // The cloned ply links into model 2, not model 1.
    let new_group = model_2
        .modeling_groups()
        .unwrap()
        .values()
        .await
        .unwrap()
        .remove(0);
    let new_ply = new_group
        .modeling_plies()
        .unwrap()
        .values()
        .await
        .unwrap()
        .remove(0);

    let new_material = new_ply.ply_material().await.unwrap().unwrap();
    let model_2_prefix = model_2.resource_path().value().to_owned();
    match &new_material {
        PlyMaterial::Fabric(new_fabric) => {
            assert!(new_fabric
                .resource_path()
                .value()
                .starts_with(&model_2_prefix));
            assert_ne!(new_fabric.resource_path(), fabric.resource_path());
        }
        other => panic!("expected a fabric ply material, got {other:?}"),
    }

    let new_rules = new_ply.selection_rules().values().await.unwrap();
    assert_eq!(new_rules.len(), 1);
    {
        use acp_client::tree::Linked;
        assert!(new_rules[0]
            .selection_rule
            .path_value()
            .starts_with(&model_2_prefix));
    }

    // The source lay-up is untouched.
    assert_eq!(model_1.fabrics().unwrap().len().await.unwrap(), 1);
}
