//! PlantUML rendering: nested package/file declarations and the sorted
//! arrow list.

use std::collections::BTreeSet;

use tracing::debug;

use depuml_core::{EntityGraph, EntityId, INDEX_FILE, Result};
use depuml_error::Error;

use crate::arrow::ArrowKind;

/// Render the whole diagram document.
pub fn render(graph: &EntityGraph) -> Result<String> {
    let package = render_package(graph, graph.root())?;
    let arrows = arrows(graph);
    debug!(entities = graph.len(), arrows = arrows.len(), "rendered diagram");
    Ok(format!(
        "@startuml\n{package}\n\n{}\n@enduml",
        arrows.join("\n")
    ))
}

/// Render `id` as a top-level package block.
///
/// Only the root may be rendered without a parent; asking for any other
/// entity is a usage error.
pub fn render_package(graph: &EntityGraph, id: EntityId) -> Result<String> {
    if graph.entity(id).parent().is_some() {
        return Err(Error::invalid_argument(
            "only the root can be rendered as a top-level package",
        )
        .with_operation("uml::render_package")
        .with_context("entity", graph.entity(id).name()));
    }
    Ok(render_entity(graph, id))
}

fn render_entity(graph: &EntityGraph, id: EntityId) -> String {
    let entity = graph.entity(id);
    if !entity.is_index() {
        let name = entity.name().rsplit('.').next().unwrap_or(entity.name());
        return format!("file \"{name}\" as {}", graph.src_tag(id));
    }

    let mut items: Vec<String> = entity
        .children()
        .iter()
        .map(|&child| render_entity(graph, child))
        .collect();
    items.push(format!("file \"{INDEX_FILE}\" as {}", graph.src_tag(id)));
    items.sort();

    let name = entity.dirname().rsplit('.').next().unwrap_or(entity.dirname());
    format!(
        "package \"{name}\" as {} {{\n{}\n}}",
        graph.dst_tag(id),
        items.join("\n")
    )
}

/// One arrow line per requires edge, deduplicated and sorted for
/// deterministic diagram text.
pub fn arrows(graph: &EntityGraph) -> Vec<String> {
    let mut lines = BTreeSet::new();
    for id in graph.ids() {
        let src = graph.src_tag(id);
        for &needed in graph.entity(id).requires() {
            let kind = ArrowKind::classify(graph, id, needed);
            lines.insert(format!(
                "{src} {} {}",
                kind.glyph(),
                graph.dst_tag(needed)
            ));
        }
    }
    lines.into_iter().collect()
}
