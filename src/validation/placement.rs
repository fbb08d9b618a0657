use super::findings::{FindingSet, Severity};
use super::walk::{SceneWalk, nickname_has};
use crate::catalog::RuleCatalog;
use crate::models::{SceneObject, Vec3};

/// Bundles with these words in their nickname are not units
const NON_UNIT_WORDS: [&str; 2] = ["terrain", "tool"];

pub fn is_unit_candidate(obj: &SceneObject) -> bool {
    !NON_UNIT_WORDS.iter().any(|word| nickname_has(obj, word))
}

/// Units should stand on the right-hand table. Bag contents are not checked.
pub fn check(walk: SceneWalk<'_>, catalog: &RuleCatalog, findings: &mut FindingSet) {
    let bounds = &catalog.placement;
    let mut on_table = 0usize;
    let mut off_table: Vec<(&str, Vec3)> = Vec::new();

    for obj in walk.top_level_bundles().filter(|obj| is_unit_candidate(obj)) {
        let position = obj.transform.position();
        if bounds.contains(&position) {
            on_table += 1;
        } else {
            off_table.push((obj.nickname(), position));
        }
    }

    findings.info(format!("✓ Units on right table: {on_table}"));

    if !off_table.is_empty() {
        findings.push_with_details(
            Severity::Warning,
            format!("⚠ Units off table or falling: {}", off_table.len()),
            off_table
                .iter()
                .map(|(name, p)| format!("  - {name} at ({:.1}, {:.1}, {:.1})", p.x, p.y, p.z)),
            catalog.detail_limit,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DEFAULT_CATALOG;
    use serde_json::{Value, json};

    fn bundle(nickname: &str, x: f64, y: f64, z: f64) -> Value {
        json!({
            "Name": "Custom_AssetBundle",
            "Nickname": nickname,
            "Transform": {"posX": x, "posY": y, "posZ": z, "scaleX": 0.039}
        })
    }

    fn run(objects: Vec<Value>) -> FindingSet {
        let objects: Vec<SceneObject> = serde_json::from_value(Value::Array(objects)).unwrap();
        let mut findings = FindingSet::new();
        check(SceneWalk::new(&objects), &DEFAULT_CATALOG, &mut findings);
        findings
    }

    #[test]
    fn test_units_on_table() {
        let findings = run(vec![bundle("Spearmen", 35.0, 2.1, 10.0), bundle("Archers", 50.0, 1.6, -25.0)]);
        assert_eq!(findings.info, vec!["✓ Units on right table: 2"]);
        assert!(findings.warnings.is_empty());
        assert!(findings.errors.is_empty());
    }

    #[test]
    fn test_off_table_lists_first_five() {
        let objects = (0..7).map(|i| bundle(&format!("Unit {i}"), 0.0, 1.3, f64::from(i))).collect();
        let findings = run(objects);
        assert_eq!(findings.warnings.len(), 6);
        assert_eq!(findings.warnings[0], "⚠ Units off table or falling: 7");
        assert_eq!(findings.warnings[1], "  - Unit 0 at (0.0, 1.3, 0.0)");
        assert_eq!(findings.warnings[5], "  - Unit 4 at (0.0, 1.3, 4.0)");
    }

    #[test]
    fn test_falling_unit_is_off_table() {
        let findings = run(vec![bundle("Cavalry", 40.0, 5.0, 0.0)]);
        assert_eq!(findings.warnings[0], "⚠ Units off table or falling: 1");
    }

    #[test]
    fn test_terrain_tools_and_bags_ignored() {
        let findings = run(vec![
            bundle("Hill Terrain", 0.0, 0.0, 0.0),
            bundle("Measuring TOOL", 0.0, 0.0, 0.0),
            json!({"Name": "Bag", "ContainedObjects": [bundle("Lost Unit", 0.0, 0.0, 0.0)]}),
            json!({"Name": "Custom_Model", "Nickname": "Main Table"}),
        ]);
        assert_eq!(findings.info, vec!["✓ Units on right table: 0"]);
        assert!(findings.warnings.is_empty());
    }
}
