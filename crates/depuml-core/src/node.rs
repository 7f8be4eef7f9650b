//! Mutable build-phase nodes and the name-keyed arena that owns them.

use std::collections::{BTreeSet, HashMap};

/// The reserved token naming a package's own aggregate file.
///
/// Double underscores are avoided because PlantUML interprets them as
/// markup inside element names.
pub const INDEX_FILE: &str = "_init_";

/// Identifier for a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate file or package while the hierarchy is being inferred.
///
/// Identity is the dotted `name` alone; all relations are [`NodeId`]s
/// into the owning arena so that a name is never represented twice.
#[derive(Debug, Clone)]
pub struct Node {
    /// Fully dotted identifier, e.g. `app.util.helpers`.
    pub name: String,
    /// Dotted name of the directory owning this node; `None` until the
    /// directory-assignment pass has run.
    pub dirname: Option<String>,
    /// Nearest enclosing node, set at most once during parent inference.
    pub parent: Option<NodeId>,
    /// Nodes this node's code depends on.
    pub requires: BTreeSet<NodeId>,
    /// Nodes whose parent is this node (derived, not independently set).
    pub children: BTreeSet<NodeId>,
}

impl Node {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dirname: None,
            parent: None,
            requires: BTreeSet::new(),
            children: BTreeSet::new(),
        }
    }
}

/// Name-keyed arena of build-phase nodes.
///
/// Lookups that materialize missing entries go through the explicit
/// [`NodeArena::get_or_create`] so the insertion side effect is visible
/// at call sites.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
    by_name: HashMap<String, NodeId>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `name`, creating a fresh node on first reference.
    pub fn get_or_create(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(Node::new(name));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Look up `name` without materializing it.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Record that `needer` depends on `needed`.
    pub fn add_dependency(&mut self, needer: NodeId, needed: NodeId) {
        self.nodes[needer.index()].requires.insert(needed);
    }

    /// Rename a node, keeping the name index consistent.
    pub fn rename(&mut self, id: NodeId, name: String) {
        let old = std::mem::replace(&mut self.nodes[id.index()].name, name.clone());
        self.by_name.remove(&old);
        self.by_name.insert(name, id);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId::new)
    }
}
