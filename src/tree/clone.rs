// ABOUTME: Recursive copy of object subtrees across parents or models
// ABOUTME: Builds a dependency graph and clones in reverse topological order

//! Recursive copy.
//!
//! Copies a set of source objects (including their children and linked
//! objects) under new parents. The dependency graph is walked leaves
//! first, so every link target is cloned before the objects referring to
//! it; links on each clone are rewritten through the replacement map.
//! Edge-property lists are cleared before the clone is stored and written
//! back (with rewritten targets) afterwards.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::api::selection_rules::LinkedSelectionRule as LinkedSelectionRuleMessage;
use crate::api::stackup::FabricWithAngle as FabricWithAngleMessage;
use crate::error::{AcpError, Result};
use crate::objects::AnyTreeObject;
use crate::paths;
use crate::tree::base;

struct DependencyGraph {
    graph: DiGraph<String, ()>,
    indices: HashMap<String, NodeIndex>,
    visited: HashMap<String, AnyTreeObject>,
}

impl DependencyGraph {
    fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            indices: HashMap::new(),
            visited: HashMap::new(),
        }
    }

    fn node(&mut self, path: &str) -> NodeIndex {
        if let Some(index) = self.indices.get(path) {
            return *index;
        }
        let index = self.graph.add_node(path.to_owned());
        self.indices.insert(path.to_owned(), index);
        index
    }

    fn visit<'a>(
        &'a mut self,
        object: AnyTreeObject,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let path = object.path();
            if path.is_empty() {
                return Err(AcpError::invalid_argument(
                    "Cannot copy an unstored object.",
                ));
            }
            if self.visited.contains_key(&path) {
                return Ok(());
            }
            object.refresh().await?;
            self.visited.insert(path.clone(), object.clone());
            self.node(&path);

            // Children point at their parent: the parent is cloned first.
            let mut pending = Vec::new();
            for child in object.child_objects().await? {
                if !child.is_creatable() {
                    tracing::debug!(
                        type_name = child.type_name(),
                        "skipping non-creatable child in recursive copy"
                    );
                    continue;
                }
                let child_index = self.node(&child.path());
                let parent_index = self.node(&path);
                self.graph.update_edge(child_index, parent_index, ());
                pending.push(child);
            }

            // Objects point at their link targets: targets are cloned first.
            for linked_path in object.linked_paths() {
                if linked_path.is_empty() {
                    continue;
                }
                let server = object.server_wrapper()?;
                let Some(linked) = AnyTreeObject::from_resource_path(&linked_path, &server)?
                else {
                    continue;
                };
                let object_index = self.node(&path);
                let linked_index = self.node(&linked_path);
                self.graph.update_edge(object_index, linked_index, ());
                pending.push(linked);
            }

            for next in pending {
                self.visit(next).await?;
            }
            Ok(())
        })
    }
}

/// Edge messages taken out of a clone before it is stored.
enum EdgeSnapshot {
    StackupFabrics(Vec<FabricWithAngleMessage>),
    SelectionRules(Vec<LinkedSelectionRuleMessage>),
}

fn split_edges(object: &AnyTreeObject) -> Option<EdgeSnapshot> {
    match object {
        AnyTreeObject::Stackup(stackup) => {
            let mut state = base::lock_state(stackup);
            if state.properties.fabrics.is_empty() {
                return None;
            }
            Some(EdgeSnapshot::StackupFabrics(std::mem::take(
                &mut state.properties.fabrics,
            )))
        }
        AnyTreeObject::BooleanSelectionRule(rule) => {
            let mut state = base::lock_state(rule);
            if state.properties.selection_rules.is_empty() {
                return None;
            }
            Some(EdgeSnapshot::SelectionRules(std::mem::take(
                &mut state.properties.selection_rules,
            )))
        }
        AnyTreeObject::ModelingPly(ply) => {
            let mut state = base::lock_state(ply);
            if state.properties.selection_rules.is_empty() {
                return None;
            }
            Some(EdgeSnapshot::SelectionRules(std::mem::take(
                &mut state.properties.selection_rules,
            )))
        }
        _ => None,
    }
}

fn restore_edges(object: &AnyTreeObject, snapshot: EdgeSnapshot) -> Result<()> {
    match (object, snapshot) {
        (AnyTreeObject::Stackup(stackup), EdgeSnapshot::StackupFabrics(fabrics)) => {
            base::lock_state(stackup).properties.fabrics = fabrics;
            Ok(())
        }
        (AnyTreeObject::BooleanSelectionRule(rule), EdgeSnapshot::SelectionRules(rules)) => {
            base::lock_state(rule).properties.selection_rules = rules;
            Ok(())
        }
        (AnyTreeObject::ModelingPly(ply), EdgeSnapshot::SelectionRules(rules)) => {
            base::lock_state(ply).properties.selection_rules = rules;
            Ok(())
        }
        _ => Err(AcpError::runtime(
            "Edge snapshot does not match the cloned object type.",
        )),
    }
}

/// Recursively copy `source_objects` (with children and linked objects)
/// under new parents.
///
/// `parent_mapping` seeds the replacement map: any object listed as a
/// mapping source is not copied; objects stored beneath it are cloned
/// under the mapping target instead. Returns the newly created objects.
pub async fn recursive_copy(
    source_objects: &[AnyTreeObject],
    parent_mapping: &[(AnyTreeObject, AnyTreeObject)],
) -> Result<Vec<AnyTreeObject>> {
    let mut dependency_graph = DependencyGraph::new();
    for source in source_objects {
        dependency_graph.visit(source.clone()).await?;
    }

    let mut replacement: HashMap<String, AnyTreeObject> = HashMap::new();
    for (source, target) in parent_mapping {
        replacement.insert(source.path(), target.clone());
    }

    let order = toposort(&dependency_graph.graph, None).map_err(|_| {
        AcpError::runtime("The object graph contains a dependency cycle.")
    })?;

    let mut new_objects = Vec::new();
    for index in order.into_iter().rev() {
        let path = dependency_graph.graph[index].clone();
        if replacement.contains_key(&path) {
            continue;
        }
        let Some(source) = dependency_graph.visited.get(&path) else {
            // Nodes can enter the graph as link targets of skipped
            // (non-creatable) children; they were never visited.
            continue;
        };
        if !source.is_creatable() {
            tracing::debug!(
                type_name = source.type_name(),
                "skipping non-creatable object in recursive copy"
            );
            continue;
        }

        let copy = source.duplicate(false);

        // Rewrite all links through the replacement map.
        let mut missing: Option<String> = None;
        copy.map_links(&mut |linked_path| {
            if linked_path.is_empty() {
                return None;
            }
            match replacement.get(linked_path) {
                Some(new_target) => Some(new_target.path()),
                None => {
                    missing = Some(linked_path.to_owned());
                    None
                }
            }
        });
        if let Some(missing_path) = missing {
            return Err(AcpError::runtime(format!(
                "No replacement found for the linked object '{missing_path}'."
            )));
        }

        let edges = split_edges(&copy);

        let parent_path = paths::parent(&path).ok_or_else(|| {
            AcpError::runtime(format!("The object '{path}' does not have a parent."))
        })?;
        let new_parent = replacement.get(&parent_path).ok_or_else(|| {
            AcpError::runtime(format!(
                "No replacement found for the parent object '{parent_path}'."
            ))
        })?;

        copy.store_under(new_parent).await?;

        if let Some(snapshot) = edges {
            restore_edges(&copy, snapshot)?;
            copy.put().await?;
        }

        replacement.insert(path, copy.clone());
        new_objects.push(copy);
    }

    Ok(new_objects)
}
