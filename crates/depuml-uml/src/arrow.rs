//! Dependency-arrow classification.
//!
//! Every requires edge falls into exactly one of three visual classes,
//! decided by the structural relationship between the endpoints'
//! directories.

use depuml_core::{EntityGraph, EntityId};

/// Visual class of a dependency arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKind {
    /// Both endpoints live in the same directory (blue).
    Intra,
    /// The needer's directory is an ancestor package of the needed
    /// entity (green).
    Package,
    /// Unrelated external dependency (red).
    External,
}

impl ArrowKind {
    /// Classify the edge from `needer` to `needed`.
    ///
    /// The package test is directionally asymmetric: it is keyed off the
    /// needed entity's lineage, reflecting "the needed file lives
    /// underneath the needer's package".
    pub fn classify(graph: &EntityGraph, needer: EntityId, needed: EntityId) -> Self {
        let dirname = graph.entity(needer).dirname();
        if dirname == graph.entity(needed).dirname() {
            return ArrowKind::Intra;
        }
        if graph.lineage(needed).contains(dirname) {
            ArrowKind::Package
        } else {
            ArrowKind::External
        }
    }

    /// The PlantUML arrow glyph for this class.
    pub fn glyph(&self) -> &'static str {
        match self {
            ArrowKind::Intra => "-down[#blue]->",
            ArrowKind::Package => "--down[#green]-->",
            ArrowKind::External => "---down[#red]--->",
        }
    }
}
