//! # depuml-uml
//!
//! Serializes a frozen [`EntityGraph`](depuml_core::EntityGraph) into a
//! PlantUML component diagram: nested `package { file ... }` blocks plus
//! a sorted, deduplicated list of dependency arrows color-coded by scope.
//!
//! # Module Structure
//!
//! - [`arrow`]: dependency-scope classification and arrow glyphs
//! - [`render`]: recursive package rendering and document assembly

pub mod arrow;
pub mod render;

pub use arrow::ArrowKind;
pub use render::{arrows, render, render_package};
