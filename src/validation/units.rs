use super::findings::{FindingSet, Severity};
use super::walk::{SceneWalk, nickname_has};
use crate::catalog::RuleCatalog;

/// Every non-terrain bundle is a miniature on a 40mm base and shares one scale
pub fn check(walk: SceneWalk<'_>, catalog: &RuleCatalog, findings: &mut FindingSet) {
    let expected = catalog.units.scale;
    let mut correct = 0usize;
    let mut incorrect: Vec<(&str, f64)> = Vec::new();

    for obj in walk
        .top_level_bundles()
        .filter(|obj| !nickname_has(obj, "terrain"))
    {
        let scale = obj.transform.uniform_scale();
        if (scale - expected).abs() > catalog.units.tolerance {
            incorrect.push((obj.nickname(), scale));
        } else {
            correct += 1;
        }
    }

    findings.info(format!("✓ Correctly scaled units: {correct}"));

    if !incorrect.is_empty() {
        findings.push_with_details(
            Severity::Error,
            format!("✗ Incorrectly scaled units: {}", incorrect.len()),
            incorrect
                .iter()
                .map(|(name, scale)| format!("  - {name}: {scale:.4} (expected {expected})")),
            catalog.detail_limit,
        );
    }
}
