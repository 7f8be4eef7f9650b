//! # depuml-core
//!
//! The package hierarchy model behind depuml.
//!
//! The model is deliberately two-phase:
//!
//! - [`node`]: the mutable build phase. Nodes are materialized on demand
//!   in a name-keyed arena while dependency edges are scanned, then three
//!   passes ([`hierarchy`]) infer parents, children and directories.
//! - [`entity`]: the frozen result phase. The whole reachable node set is
//!   converted once into an immutable [`EntityGraph`] that rendering
//!   cannot mutate (private fields, read-only accessors).

pub mod entity;
pub mod hierarchy;
pub mod node;

pub use depuml_error::{Error, ErrorKind, Result};
pub use entity::{Entity, EntityGraph, EntityId, choose_delim, freeze};
pub use hierarchy::build_hierarchy;
pub use node::{INDEX_FILE, Node, NodeArena, NodeId};
