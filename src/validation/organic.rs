use super::findings::FindingSet;
use super::walk::SceneWalk;
use crate::catalog::RuleCatalog;

/// Count bagged area-terrain pieces. Informational only; never an error.
pub fn check(walk: SceneWalk<'_>, catalog: &RuleCatalog, findings: &mut FindingSet) {
    let rules = &catalog.organic;
    let count = walk
        .nested()
        .filter(|obj| {
            let nickname = obj.nickname_lower();
            rules.keywords.iter().any(|k| nickname.contains(k.as_str()))
        })
        .count();

    findings.info(format!("✓ Area terrain pieces: {count}"));

    if count >= rules.expected {
        findings.info(format!(
            "✓ All {} area terrain pieces present (should have organic polygons)",
            rules.expected
        ));
    } else {
        findings.warning(format!(
            "⚠ Expected {} area terrain pieces, found {count}",
            rules.expected
        ));
    }
}
