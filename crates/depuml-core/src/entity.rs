//! The frozen result phase: immutable entities and the graph that owns them.
//!
//! [`freeze`] walks the build arena exactly once and produces an
//! [`EntityGraph`] whose fields are private with read-only accessors, so
//! rendering cannot mutate shared structure by accident. This replaces
//! the runtime frozen-flag idea with a compile-time builder/result split.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use depuml_error::{Error, Result};

use crate::node::{INDEX_FILE, NodeArena, NodeId};

/// Identifier for an entity in an [`EntityGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    pub fn as_u32(self) -> u32 {
        self.0
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable file or package in the final hierarchy.
///
/// Relations are [`EntityId`]s into the owning [`EntityGraph`]; there is
/// no mutator, so the snapshot cannot drift after construction.
#[derive(Debug, Clone)]
pub struct Entity {
    name: String,
    dirname: String,
    parent: Option<EntityId>,
    requires: BTreeSet<EntityId>,
    children: BTreeSet<EntityId>,
}

impl Entity {
    /// Fully dotted identifier (packages carry the `_init_` suffix).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dotted name of the directory owning this entity.
    pub fn dirname(&self) -> &str {
        &self.dirname
    }

    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    pub fn requires(&self) -> &BTreeSet<EntityId> {
        &self.requires
    }

    pub fn children(&self) -> &BTreeSet<EntityId> {
        &self.children
    }

    /// True if this entity is a package's aggregate "index" file rather
    /// than a leaf file.
    pub fn is_index(&self) -> bool {
        self.name.ends_with(INDEX_FILE)
    }
}

/// Immutable snapshot of the whole package hierarchy.
#[derive(Debug)]
pub struct EntityGraph {
    entities: Vec<Entity>,
    by_name: HashMap<String, EntityId>,
    root: EntityId,
    delim: String,
}

impl EntityGraph {
    pub fn root(&self) -> EntityId {
        self.root
    }

    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id.index()]
    }

    pub fn get(&self, name: &str) -> Option<EntityId> {
        self.by_name.get(name).copied()
    }

    /// Separator used in diagram tags; absent from the source DOT text.
    pub fn delim(&self) -> &str {
        &self.delim
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        (0..self.entities.len() as u32).map(EntityId)
    }

    /// The directories containing this entity: dirnames collected along
    /// the parent chain from the entity itself up to and including the
    /// root. Used to test "is X an ancestor package of Y".
    pub fn lineage(&self, id: EntityId) -> BTreeSet<&str> {
        let mut ret = BTreeSet::new();
        let mut node = self.entity(id);
        loop {
            ret.insert(node.dirname.as_str());
            match node.parent {
                Some(parent) => node = self.entity(parent),
                None => break,
            }
        }
        ret
    }

    /// Tag used when this entity is an arrow's destination: the dotted
    /// name with dots replaced by the collision-free delimiter.
    pub fn dst_tag(&self, id: EntityId) -> String {
        self.entity(id).name.replace('.', &self.delim)
    }

    /// Tag used when this entity is an arrow's source. A package acts
    /// through its directory tag; a leaf file through its name tag.
    pub fn src_tag(&self, id: EntityId) -> String {
        let entity = self.entity(id);
        if !entity.is_index() {
            return self.dst_tag(id);
        }
        entity.dirname.replace('.', &self.delim)
    }
}

/// Pick a tag delimiter guaranteed absent from the original DOT text:
/// start from a single underscore and lengthen until it no longer
/// occurs. Terminates because the text is finite.
pub fn choose_delim(data: &str) -> String {
    let mut delim = String::from("_");
    while data.contains(&delim) {
        delim.push('_');
    }
    delim
}

/// Convert the mutable working tree into an immutable [`EntityGraph`].
///
/// Walks every node reachable from `root` via children and requires
/// edges. A reachable node without a resolved directory is a
/// bookkeeping invariant violation and fails the conversion.
pub fn freeze(arena: &NodeArena, root: NodeId, delim: String) -> Result<EntityGraph> {
    let reachable = reachable_from(arena, root);

    for &id in &reachable {
        if arena.node(id).dirname.is_none() {
            return Err(Error::invalid_structure(
                "cannot freeze a node with an unresolved directory",
            )
            .with_operation("entity::freeze")
            .with_context("node", arena.node(id).name.clone()));
        }
    }

    let ids: BTreeMap<NodeId, EntityId> = reachable
        .iter()
        .enumerate()
        .map(|(i, &id)| (id, EntityId(i as u32)))
        .collect();

    let mut entities = Vec::with_capacity(reachable.len());
    let mut by_name = HashMap::with_capacity(reachable.len());
    for &id in &reachable {
        let node = arena.node(id);
        let entity = Entity {
            name: node.name.clone(),
            dirname: node.dirname.clone().expect("checked above"),
            parent: node.parent.map(|p| ids[&p]),
            requires: node.requires.iter().map(|r| ids[r]).collect(),
            children: node.children.iter().map(|c| ids[c]).collect(),
        };
        by_name.insert(entity.name.clone(), ids[&id]);
        entities.push(entity);
    }

    Ok(EntityGraph {
        entities,
        by_name,
        root: ids[&root],
        delim,
    })
}

/// All nodes reachable from `start` via children and requires edges,
/// including `start` itself.
fn reachable_from(arena: &NodeArena, start: NodeId) -> BTreeSet<NodeId> {
    let mut seen = BTreeSet::new();
    let mut stack = vec![start];
    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        let node = arena.node(id);
        stack.extend(node.children.iter().copied());
        stack.extend(node.requires.iter().copied());
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::build_hierarchy;
    use depuml_error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn sample_graph() -> EntityGraph {
        let mut arena = NodeArena::new();
        let main = arena.get_or_create("app.main");
        let helpers = arena.get_or_create("app.util.helpers");
        arena.get_or_create("app");
        arena.get_or_create("app.util");
        arena.add_dependency(main, helpers);
        let root = build_hierarchy(&mut arena).unwrap();
        freeze(&arena, root, "__".to_string()).unwrap()
    }

    #[test]
    fn test_choose_delim_absent_from_text() {
        let data = "app_main -> app_util_helpers";
        let delim = choose_delim(data);
        assert_eq!(delim, "__");
        assert!(!data.contains(&delim));

        let nasty = "a __ b ___ c";
        let delim = choose_delim(nasty);
        assert!(!nasty.contains(&delim));
    }

    #[test]
    fn test_freeze_preserves_structure() {
        let graph = sample_graph();
        assert_eq!(graph.len(), 4);

        let root = graph.root();
        assert_eq!(graph.entity(root).name(), "app._init_");
        assert!(graph.entity(root).parent().is_none());
        assert_eq!(graph.entity(root).children().len(), 2);

        let main = graph.get("app.main").unwrap();
        let helpers = graph.get("app.util.helpers").unwrap();
        assert!(graph.entity(main).requires().contains(&helpers));
        assert_eq!(graph.entity(main).parent(), Some(root));
    }

    #[test]
    fn test_is_index() {
        let graph = sample_graph();
        assert!(graph.entity(graph.root()).is_index());
        assert!(!graph.entity(graph.get("app.main").unwrap()).is_index());
    }

    #[test]
    fn test_lineage_reaches_root() {
        let graph = sample_graph();
        let helpers = graph.get("app.util.helpers").unwrap();
        let lineage = graph.lineage(helpers);
        assert!(lineage.contains("app.util"));
        assert!(lineage.contains("app"));

        let main = graph.get("app.main").unwrap();
        assert_eq!(graph.lineage(main), BTreeSet::from(["app"]));
    }

    #[test]
    fn test_tags() {
        let graph = sample_graph();
        let main = graph.get("app.main").unwrap();
        assert_eq!(graph.dst_tag(main), "app__main");
        assert_eq!(graph.src_tag(main), "app__main");

        let util = graph.get("app.util._init_").unwrap();
        assert_eq!(graph.dst_tag(util), "app__util___init_");
        assert_eq!(graph.src_tag(util), "app__util");
    }

    #[test]
    fn test_freeze_rejects_missing_dirname() {
        let mut arena = NodeArena::new();
        let root = arena.get_or_create("app");
        let child = arena.get_or_create("app.main");
        arena.node_mut(child).parent = Some(root);
        arena.node_mut(root).children.insert(child);
        // No dirname pass has run.
        let err = freeze(&arena, root, "_".to_string()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidStructure);
    }
}
