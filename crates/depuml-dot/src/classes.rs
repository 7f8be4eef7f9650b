//! Class collapsing: fold class-level node names into their enclosing
//! module, since the diagram models files and packages, not classes.

use std::collections::BTreeSet;

use parking_lot::Mutex;
use tracing::warn;

static SEEN_WARNINGS: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

/// Print `msg` to stderr, at most once per distinct message per process
/// run. Returns whether the message was actually printed.
pub fn warn_once(msg: &str) -> bool {
    let mut seen = SEEN_WARNINGS.lock();
    if !seen.insert(msg.to_string()) {
        return false;
    }
    warn!("{msg}");
    eprintln!("{msg}");
    true
}

/// Collapse a class reference into its enclosing module name.
///
/// Any uppercase character marks the name as a class reference (a
/// heuristic riding on the naming convention of Python dependency
/// graphers): the result is everything before the last dot preceding
/// the first uppercase character. Names with no enclosing dot are left
/// untouched. Each collapse emits a deduplicated stderr diagnostic so
/// the accuracy loss is visible.
pub fn collapse_class(name: &str) -> String {
    let Some(cap) = name.find(|c: char| c.is_uppercase()) else {
        return name.to_string();
    };
    let Some(dot) = name[..cap].rfind('.') else {
        return name.to_string();
    };
    let module = &name[..dot];
    warn_once(&format!("Replacing class {name} with parent {module}"));
    module.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lowercase_name_is_untouched() {
        assert_eq!(collapse_class("app.util.helpers"), "app.util.helpers");
    }

    #[test]
    fn test_class_collapses_to_module() {
        assert_eq!(collapse_class("app.util.Helper"), "app.util");
    }

    #[test]
    fn test_class_attribute_collapses_to_module() {
        // The collapse point is the dot before the first uppercase run,
        // not the last dot of the whole name.
        assert_eq!(
            collapse_class("app.util.helpers.Helper.process"),
            "app.util.helpers"
        );
    }

    #[test]
    fn test_no_enclosing_dot_is_untouched() {
        assert_eq!(collapse_class("Helper"), "Helper");
    }

    #[test]
    fn test_warn_once_deduplicates() {
        assert!(warn_once("depuml-test: first occurrence"));
        assert!(!warn_once("depuml-test: first occurrence"));
        assert!(warn_once("depuml-test: second message"));
    }
}
