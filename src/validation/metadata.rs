use tracing::debug;

use super::findings::FindingSet;
use crate::catalog::RuleCatalog;
use crate::models::{SaveFile, SceneObject};

/// Separator expected between the save title and its timestamp
const TIMESTAMP_SEPARATOR: &str = " - ";

/// How far from the end of the name a timestamp digit may appear
const TIMESTAMP_WINDOW: usize = 20;

/// Check the save name and object list.
///
/// Returns the object list when it exists; a missing `ObjectStates` is an
/// error and stops every later check.
pub fn check<'a>(
    save: &'a SaveFile,
    catalog: &RuleCatalog,
    findings: &mut FindingSet,
) -> Option<&'a [SceneObject]> {
    match save.save_name.as_deref().filter(|name| !name.is_empty()) {
        None => findings.error("✗ Missing SaveName field"),
        Some(name) if !has_timestamp(name) => {
            findings.warning("⚠ SaveName may be missing timestamp")
        }
        Some(name) => findings.info(format!("✓ SaveName: {name}")),
    }

    let Some(objects) = save.object_states.as_deref() else {
        findings.error("✗ Missing ObjectStates array");
        return None;
    };

    let count = objects.len();
    debug!("Save holds {count} top-level objects");
    findings.info(format!("✓ Total objects: {count}"));

    if count < catalog.min_object_count {
        findings.warning(format!("⚠ Low object count: {count} (expected 40+)"));
    }

    Some(objects)
}

/// Heuristic: a separator token plus a digit near the end of the name
pub fn has_timestamp(name: &str) -> bool {
    name.contains(TIMESTAMP_SEPARATOR)
        && name
            .chars()
            .rev()
            .take(TIMESTAMP_WINDOW)
            .any(|c| c.is_ascii_digit())
}
