//! # depuml-dot
//!
//! Turns pydeps-style Graphviz DOT text into a frozen
//! [`EntityGraph`](depuml_core::EntityGraph).
//!
//! The parser is tolerant only of the specific shape produced by Python
//! dependency-graph generators: a package-level definition, a block of
//! node label definitions, and `id1 -> id2 [fill...];` edge statements.
//! Arbitrary DOT is out of scope.
//!
//! # Module Structure
//!
//! - [`label`]: internal-id to dotted-name resolution by whole-text substitution
//! - [`edge`]: arrow-line extraction and edge splitting
//! - [`classes`]: class-to-module collapse heuristic with deduplicated diagnostics

pub mod classes;
pub mod edge;
pub mod label;

use tracing::debug;

use depuml_core::{EntityGraph, NodeArena, Result, build_hierarchy, choose_delim, freeze};

pub use classes::collapse_class;
pub use edge::{extract_edges, split_edge};
pub use label::resolve_labels;

/// Parse DOT text into a frozen entity graph.
///
/// This is the front half of the conversion pipeline: resolve labels,
/// extract edges, collapse class references, materialize nodes on
/// demand, infer the package hierarchy and freeze it.
pub fn load(data: &str) -> Result<EntityGraph> {
    let resolved = resolve_labels(data)?;
    let arrows = extract_edges(&resolved);
    debug!(edges = arrows.len(), "extracted edge lines");

    let mut arena = NodeArena::new();
    for line in &arrows {
        let (dependency, dependent) = split_edge(line)?;
        let dependency = collapse_class(&dependency);
        let dependent = collapse_class(&dependent);
        // An edge that collapses onto itself carries no information.
        if dependency == dependent {
            continue;
        }
        let needed = arena.get_or_create(&dependency);
        let needer = arena.get_or_create(&dependent);
        arena.add_dependency(needer, needed);
    }

    let root = build_hierarchy(&mut arena)?;
    // The delimiter must be absent from the ORIGINAL text, not the
    // substituted one.
    let delim = choose_delim(data);
    freeze(&arena, root, delim)
}
