//! Hierarchy inference over the build-phase arena.
//!
//! Given a flat set of dotted names connected by `requires` edges, infer
//! a strict single-rooted tree: parents by longest dotted prefix,
//! children as the inverse relation, owning directories, and the
//! `_init_` rename that splits a package's aggregate file from the
//! package-as-namespace.

use tracing::debug;

use depuml_error::{Error, Result};

use crate::node::{INDEX_FILE, NodeArena, NodeId};

/// Run all hierarchy passes over `arena` and return the root node.
///
/// Fails with an `InvalidStructure` error unless exactly one node ends
/// up parentless.
pub fn build_hierarchy(arena: &mut NodeArena) -> Result<NodeId> {
    let root = assign_parents(arena)?;
    derive_children(arena);
    assign_dirnames(arena);
    suffix_index_names(arena);
    debug!(nodes = arena.len(), root = %arena.node(root).name, "hierarchy built");
    Ok(root)
}

/// Parent of `F` is the node with the longest name `P` such that
/// `F.name` starts with `P.name + "."`.
fn assign_parents(arena: &mut NodeArena) -> Result<NodeId> {
    let ids: Vec<NodeId> = arena.ids().collect();

    let mut parents: Vec<Option<NodeId>> = Vec::with_capacity(ids.len());
    for &f in &ids {
        let fname = &arena.node(f).name;
        let parent = ids
            .iter()
            .filter(|&&p| {
                let pname = &arena.node(p).name;
                fname.len() > pname.len()
                    && fname.starts_with(pname)
                    && fname.as_bytes()[pname.len()] == b'.'
            })
            .max_by_key(|&&p| arena.node(p).name.len())
            .copied();
        parents.push(parent);
    }

    for (&id, &parent) in ids.iter().zip(&parents) {
        arena.node_mut(id).parent = parent;
    }

    let roots: Vec<NodeId> = ids
        .iter()
        .copied()
        .filter(|&id| arena.node(id).parent.is_none())
        .collect();

    match roots.as_slice() {
        [root] => Ok(*root),
        [] => Err(Error::invalid_structure(
            "there should be exactly one root package, found none",
        )
        .with_operation("hierarchy::assign_parents")),
        many => {
            let names: Vec<&str> = many.iter().map(|&id| arena.node(id).name.as_str()).collect();
            Err(Error::invalid_structure(
                "there should be exactly one root package",
            )
            .with_operation("hierarchy::assign_parents")
            .with_context("roots", names.join(", ")))
        }
    }
}

/// A node's children are exactly the nodes whose parent it is.
fn derive_children(arena: &mut NodeArena) {
    let ids: Vec<NodeId> = arena.ids().collect();
    for &id in &ids {
        if let Some(parent) = arena.node(id).parent {
            arena.node_mut(parent).children.insert(id);
        }
    }
}

/// A package (root or node with children) owns its own directory; a
/// leaf file belongs to its parent's directory.
fn assign_dirnames(arena: &mut NodeArena) {
    let ids: Vec<NodeId> = arena.ids().collect();
    for &id in &ids {
        let node = arena.node(id);
        let dirname = if !node.children.is_empty() || node.parent.is_none() {
            node.name.clone()
        } else {
            let parent = node.parent.expect("leaf with no parent survived root check");
            arena.node(parent).name.clone()
        };
        arena.node_mut(id).dirname = Some(dirname);
    }
}

/// Extend every package's name with the reserved index token so the
/// aggregate file is distinct from the package namespace.
fn suffix_index_names(arena: &mut NodeArena) {
    let ids: Vec<NodeId> = arena.ids().collect();
    for &id in &ids {
        if !arena.node(id).children.is_empty() {
            let name = format!("{}.{INDEX_FILE}", arena.node(id).name);
            arena.rename(id, name);
        }
    }
}
