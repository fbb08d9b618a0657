//! Terrain sizing by physical size in feet.
//!
//! Piece types are inferred from free-text nicknames: the name is
//! normalized, then the catalog's size bands are tried in declaration order
//! and the first band whose key tokens all appear in the name wins. Names
//! that mention a waterway marker are always treated as waterways.

use tracing::debug;

use super::findings::{FindingSet, Severity};
use super::walk::{SceneWalk, nickname_has};
use crate::catalog::{RuleCatalog, TerrainRule};
use crate::models::SceneObject;

/// Lowercase and drop spaces and the word "terrain"
pub fn normalize(nickname: &str) -> String {
    nickname.to_lowercase().replace(' ', "").replace("terrain", "")
}

/// A resolved terrain type together with the base size used to measure it
#[derive(Debug, Clone, Copy)]
pub struct Classification<'c> {
    pub rule: &'c TerrainRule,
    pub base_size: f64,
}

/// Pick the size band for a normalized name
pub fn classify<'c>(normalized: &str, catalog: &'c RuleCatalog) -> Option<Classification<'c>> {
    let terrain = &catalog.terrain;

    let is_waterway = terrain
        .waterway_markers
        .iter()
        .any(|marker| normalized.contains(marker.as_str()));
    if is_waterway {
        return catalog
            .terrain_rule(&terrain.waterway_key)
            .map(|rule| Classification {
                rule,
                base_size: terrain.base_sizes.waterway,
            });
    }

    terrain
        .sizes
        .iter()
        .find(|rule| rule.matches(normalized))
        .map(|rule| Classification {
            rule,
            base_size: terrain.base_sizes.default,
        })
}

/// Size in feet of a piece with the given scale and base size
pub fn physical_size(scale: f64, base_size: f64, catalog: &RuleCatalog) -> f64 {
    scale * base_size / catalog.terrain.units_per_foot
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sizing {
    Correct,
    TooSmall { min: f64 },
    TooLarge { max: f64 },
    /// Unknown type outside the generic sanity range
    Unusual,
}

#[derive(Debug, Clone)]
pub struct TerrainPiece<'a> {
    pub name: &'a str,
    pub scale: f64,
    pub size: f64,
    pub key: Option<&'a str>,
    pub sizing: Sizing,
}

pub fn assess<'a>(obj: &'a SceneObject, catalog: &'a RuleCatalog) -> TerrainPiece<'a> {
    let name = obj.nickname();
    let scale = obj.transform.uniform_scale();
    let normalized = normalize(name);

    match classify(&normalized, catalog) {
        Some(Classification { rule, base_size }) => {
            let size = physical_size(scale, base_size, catalog);
            debug!("'{name}' classified as {} ({size:.2}ft)", rule.key);
            let sizing = if size < rule.min {
                Sizing::TooSmall { min: rule.min }
            } else if size > rule.max {
                Sizing::TooLarge { max: rule.max }
            } else {
                Sizing::Correct
            };
            TerrainPiece {
                name,
                scale,
                size,
                key: Some(rule.key.as_str()),
                sizing,
            }
        }
        None => {
            let size = physical_size(scale, catalog.terrain.base_sizes.default, catalog);
            debug!("'{name}' matches no terrain type ({size:.2}ft)");
            let sizing = if catalog.terrain.generic_range.contains(size) {
                Sizing::Correct
            } else {
                Sizing::Unusual
            };
            TerrainPiece {
                name,
                scale,
                size,
                key: None,
                sizing,
            }
        }
    }
}

pub fn check(walk: SceneWalk<'_>, catalog: &RuleCatalog, findings: &mut FindingSet) {
    let is_terrain = |obj: &&SceneObject| nickname_has(obj, "terrain");
    let candidates: Vec<&SceneObject> = walk
        .top_level_bundles()
        .filter(is_terrain)
        .chain(walk.nested_bundles().filter(is_terrain))
        .collect();

    let mut correct = 0usize;
    let mut too_small = Vec::new();
    let mut too_large = Vec::new();

    for obj in &candidates {
        let piece = assess(obj, catalog);
        match piece.sizing {
            Sizing::Correct => correct += 1,
            Sizing::TooSmall { min } => too_small.push(format!(
                "  - {}: {:.2}ft (scale {:.3}) < min {min:.2}ft",
                piece.name, piece.size, piece.scale
            )),
            Sizing::TooLarge { max } => too_large.push(format!(
                "  - {}: {:.2}ft (scale {:.3}) > max {max:.2}ft",
                piece.name, piece.size, piece.scale
            )),
            Sizing::Unusual => findings.warning(format!(
                "⚠ {}: unusual size {:.2} feet (scale {:.3})",
                piece.name, piece.size, piece.scale
            )),
        }
    }

    findings.info(format!("✓ Total terrain pieces: {}", candidates.len()));
    findings.info(format!("✓ Correctly sized terrain: {correct}"));

    if !too_small.is_empty() {
        findings.push_with_details(
            Severity::Error,
            format!("✗ Terrain pieces TOO SMALL for DBR: {}", too_small.len()),
            too_small,
            catalog.detail_limit,
        );
    }

    if !too_large.is_empty() {
        findings.push_with_details(
            Severity::Error,
            format!("✗ Terrain pieces TOO LARGE for DBR: {}", too_large.len()),
            too_large,
            catalog.detail_limit,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TerrainRule;
    use crate::defaults::DEFAULT_CATALOG;
    use serde_json::{Value, json};

    fn terrain(nickname: &str, scale: f64) -> Value {
        json!({
            "Name": "Custom_AssetBundle",
            "Nickname": nickname,
            "Transform": {"posX": 0.0, "posY": 1.0, "posZ": 0.0, "scaleX": scale}
        })
    }

    fn run(objects: Vec<Value>) -> FindingSet {
        let objects: Vec<SceneObject> = serde_json::from_value(Value::Array(objects)).unwrap();
        let mut findings = FindingSet::new();
        check(SceneWalk::new(&objects), &DEFAULT_CATALOG, &mut findings);
        findings
    }

    fn key_for(nickname: &str) -> Option<String> {
        classify(&normalize(nickname), &DEFAULT_CATALOG).map(|c| c.rule.key.clone())
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Wood_Large_Terrain"), "wood_large_");
        assert_eq!(normalize("Gentle Hill Small TERRAIN 2"), "gentlehillsmall2");
    }

    #[test]
    fn test_token_order_within_name_is_irrelevant() {
        assert_eq!(key_for("Small Gentle Hill Terrain").as_deref(), Some("hill_gentle_small"));
        assert_eq!(key_for("Hill_Small_Gentle Terrain").as_deref(), Some("hill_gentle_small"));
        assert_eq!(key_for("Large Rocky Ground").as_deref(), Some("rockyground_large"));
    }

    #[test]
    fn test_first_declared_key_wins() {
        // Matches both bua_small and wood_small; bua is declared first
        assert_eq!(key_for("BUA Wood Small Terrain").as_deref(), Some("bua_small"));

        let mut catalog = DEFAULT_CATALOG.clone();
        catalog.terrain.sizes.insert(
            0,
            TerrainRule {
                key: "wood".to_string(),
                min: 0.1,
                max: 0.2,
                typical: 0.15,
            },
        );
        let classified = classify(&normalize("Wood Small Terrain"), &catalog).unwrap();
        assert_eq!(classified.rule.key, "wood");
    }

    #[test]
    fn test_waterway_override() {
        assert_eq!(key_for("Coastline Hill Gentle Small Terrain").as_deref(), Some("waterway"));
        assert_eq!(key_for("Waterway Terrain").as_deref(), Some("waterway"));
        let classified = classify("coastline", &DEFAULT_CATALOG).unwrap();
        assert_eq!(classified.base_size, DEFAULT_CATALOG.terrain.base_sizes.waterway);
    }

    #[test]
    fn test_unknown_name_unclassified() {
        assert_eq!(key_for("Mystery Terrain"), None);
    }

    #[test]
    fn test_wood_large_too_small() {
        let findings = run(vec![terrain("Wood_Large_Terrain", 0.10)]);
        assert_eq!(
            findings.errors,
            vec![
                "✗ Terrain pieces TOO SMALL for DBR: 1",
                "  - Wood_Large_Terrain: 0.10ft (scale 0.100) < min 1.00ft"
            ]
        );
        assert_eq!(
            findings.info,
            vec!["✓ Total terrain pieces: 1", "✓ Correctly sized terrain: 0"]
        );
    }

    #[test]
    fn test_too_large_and_correct() {
        let findings = run(vec![
            terrain("Pond Terrain", 2.0),
            terrain("Road Terrain", 0.25),
        ]);
        assert_eq!(
            findings.errors,
            vec![
                "✗ Terrain pieces TOO LARGE for DBR: 1",
                "  - Pond Terrain: 2.00ft (scale 2.000) > max 1.50ft"
            ]
        );
        assert_eq!(findings.info[1], "✓ Correctly sized terrain: 1");
    }

    #[test]
    fn test_coastline_sized_as_waterway() {
        let findings = run(vec![terrain("Coastline Terrain", 4.0)]);
        assert!(findings.errors.is_empty());
        assert_eq!(findings.info[1], "✓ Correctly sized terrain: 1");
    }

    #[test]
    fn test_unknown_terrain_generic_range() {
        let findings = run(vec![
            terrain("Mystery Terrain", 0.5),
            terrain("Giant Terrain", 5.0),
        ]);
        assert!(findings.errors.is_empty());
        assert_eq!(
            findings.warnings,
            vec!["⚠ Giant Terrain: unusual size 5.00 feet (scale 5.000)"]
        );
        assert_eq!(findings.info[1], "✓ Correctly sized terrain: 1");
    }

    #[test]
    fn test_bagged_terrain_is_collected() {
        let findings = run(vec![
            terrain("Lake Terrain", 2.0),
            json!({"Name": "Bag", "ContainedObjects": [
                terrain("Marsh Medium Terrain", 1.0),
                terrain("Not a piece", 9.0),
                {"Name": "Custom_Model", "Nickname": "Ford Terrain"}
            ]}),
        ]);
        assert_eq!(findings.info[0], "✓ Total terrain pieces: 2");
        assert_eq!(findings.info[1], "✓ Correctly sized terrain: 2");
    }

    #[test]
    fn test_details_capped_at_five() {
        let objects = (0..6).map(|i| terrain(&format!("Lake {i} Terrain"), 0.1)).collect();
        let findings = run(objects);
        assert_eq!(findings.errors.len(), 6);
        assert_eq!(findings.errors[0], "✗ Terrain pieces TOO SMALL for DBR: 6");
    }
}
