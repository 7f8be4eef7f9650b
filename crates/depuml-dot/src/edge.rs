//! Edge extraction: isolate the resolved text down to its directed
//! edge statements.

use depuml_error::{Error, Result};

/// All lines of `data` containing an arrow marker, trimmed, in file
/// order. Duplicates are permitted; later stages deduplicate through
/// set semantics.
pub fn extract_edges(data: &str) -> Vec<String> {
    data.lines()
        .filter(|line| line.contains("->"))
        .map(|line| line.trim().to_string())
        .collect()
}

/// Split an edge line into `(dependency, dependent)` names, stripping
/// the trailing rendering attributes (` [fill...];`).
///
/// Note the direction: in pydeps output `a -> b` means `b` imports `a`.
pub fn split_edge(line: &str) -> Result<(String, String)> {
    let stripped = line.split(" [fill").next().unwrap_or(line);
    let stripped = stripped.trim_end().trim_end_matches(';').trim_end();
    let (dependency, dependent) = stripped.split_once(" -> ").ok_or_else(|| {
        Error::parse_failed("malformed edge line")
            .with_operation("dot::split_edge")
            .with_context("line", line)
    })?;
    Ok((dependency.trim().to_string(), dependent.trim().to_string()))
}
