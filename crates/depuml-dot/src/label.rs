//! Label resolution: substitute internal DOT node identifiers with the
//! real dotted names carried in their `label="..."` attributes.

use std::sync::LazyLock;

use regex::Regex;

use depuml_error::{Error, Result};

static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"label="(.*)""#).expect("valid label regex"));

/// Resolve every internal identifier in `data` to its labelled name.
///
/// The label block is bounded by the first and last occurrence of the
/// `label` keyword; the line immediately before it is the package-level
/// definition whose first token is the root package's own identifier
/// (mapped to itself). Pairs are substituted longest-identifier-first so
/// a shorter identifier that is a prefix of a longer one never clobbers
/// it; this ordering is correctness-critical. Beyond that ordering, the
/// whole-text substitution intentionally does not defend against a
/// resolved name matching unrelated text.
pub fn resolve_labels(data: &str) -> Result<String> {
    let first = data
        .find("label")
        .ok_or_else(|| no_labels("no label definitions found"))?;
    let sect = data[..first]
        .rfind('\n')
        .ok_or_else(|| no_labels("label block starts on the first line"))?;

    // Package-level definition: the line just before the label block.
    let pkg_line = match data[..sect].rfind('\n') {
        Some(i) => &data[i..sect],
        None => &data[..sect],
    };
    let pkg = pkg_line
        .trim()
        .split(' ')
        .next()
        .filter(|tok| !tok.is_empty())
        .ok_or_else(|| no_labels("package definition line is empty"))?;

    let last = data.rfind("label").expect("find succeeded above");
    let end = data[last..]
        .find('\n')
        .map(|i| last + i)
        .unwrap_or(data.len());

    let mut pairs: Vec<(String, String)> = Vec::new();
    for line in data[sect..end].trim().split('\n') {
        // pydeps wraps long dotted names across lines as `\.\n`.
        let line = line.trim().replace("\\.\\n", ".");
        let Some(id) = line.split(' ').next().filter(|tok| !tok.is_empty()) else {
            continue;
        };
        let Some(caps) = LABEL_RE.captures(&line) else {
            continue;
        };
        pairs.push((id.to_string(), caps[1].to_string()));
    }
    pairs.push((pkg.to_string(), pkg.to_string()));

    // Longest identifiers first; stable for equal lengths.
    pairs.sort_by_key(|(id, _)| std::cmp::Reverse(id.len()));

    let mut resolved = data.to_string();
    for (id, name) in &pairs {
        resolved = resolved.replace(id.as_str(), name);
    }
    Ok(resolved)
}

fn no_labels(message: &str) -> Error {
    Error::parse_failed(message).with_operation("dot::resolve_labels")
}
