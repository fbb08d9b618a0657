//! Rule catalog: the fixed expectations a save is checked against

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::Vec3;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read rule catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rule catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid rule catalog: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleCatalog {
    /// Fewer top-level objects than this looks like an incomplete save
    pub min_object_count: usize,

    /// Maximum number of individual lines listed under an aggregate finding
    pub detail_limit: usize,

    pub tables: TableRules,
    pub placement: PlacementBounds,
    pub units: UnitRules,
    pub terrain: TerrainRules,
    pub organic: OrganicRules,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRules {
    /// Per-axis absolute tolerance for both position and scale
    pub tolerance: f64,
    pub main: TableSpec,
    pub left: TableSpec,
    pub right: TableSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    pub position: Vec3,
    pub scale: Vec3,
    #[serde(default)]
    pub must_be_locked: bool,
}

/// Axis-aligned box on the right-hand table where units should stand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub z_min: f64,
    pub z_max: f64,
    pub surface_y: f64,
    pub vertical_tolerance: f64,
}

impl PlacementBounds {
    /// X and Z are inclusive; height must be strictly within tolerance of the surface
    pub fn contains(&self, position: &Vec3) -> bool {
        (self.x_min..=self.x_max).contains(&position.x)
            && (self.z_min..=self.z_max).contains(&position.z)
            && (position.y - self.surface_y).abs() < self.vertical_tolerance
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitRules {
    pub scale: f64,
    pub tolerance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainRules {
    pub units_per_foot: f64,
    pub base_sizes: BaseSizes,
    /// Category forced onto any piece whose name carries a waterway marker
    pub waterway_key: String,
    pub waterway_markers: Vec<String>,
    /// Sanity range for pieces that match no known type
    pub generic_range: SizeRange,
    /// Ordered; the first matching entry wins
    pub sizes: Vec<TerrainRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseSizes {
    pub default: f64,
    pub waterway: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl SizeRange {
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainRule {
    /// Underscore-joined tokens, e.g. `hill_gentle_small`
    pub key: String,
    pub min: f64,
    pub max: f64,
    pub typical: f64,
}

impl TerrainRule {
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.key.split('_').filter(|token| !token.is_empty())
    }

    /// True when every token of the key appears somewhere in `normalized`
    pub fn matches(&self, normalized: &str) -> bool {
        self.tokens().all(|token| normalized.contains(token))
    }

    pub fn range(&self) -> SizeRange {
        SizeRange {
            min: self.min,
            max: self.max,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganicRules {
    pub keywords: Vec<String>,
    pub expected: usize,
}

impl RuleCatalog {
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let catalog: RuleCatalog = serde_yaml::from_str(source)?;
        catalog.check()?;
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    pub fn terrain_rule(&self, key: &str) -> Option<&TerrainRule> {
        self.terrain.sizes.iter().find(|rule| rule.key == key)
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.terrain.units_per_foot <= 0.0 {
            return Err(CatalogError::Invalid(
                "terrain.units_per_foot must be positive".to_string(),
            ));
        }

        if self.terrain_rule(&self.terrain.waterway_key).is_none() {
            return Err(CatalogError::Invalid(format!(
                "terrain.sizes has no entry for waterway key '{}'",
                self.terrain.waterway_key
            )));
        }

        for rule in &self.terrain.sizes {
            if rule.tokens().next().is_none() {
                return Err(CatalogError::Invalid(format!(
                    "terrain size key '{}' has no tokens",
                    rule.key
                )));
            }
            if rule.min > rule.max {
                return Err(CatalogError::Invalid(format!(
                    "terrain size '{}' has min {} above max {}",
                    rule.key, rule.min, rule.max
                )));
            }
        }

        for (name, tolerance) in [
            ("tables.tolerance", self.tables.tolerance),
            ("units.tolerance", self.units.tolerance),
            ("placement.vertical_tolerance", self.placement.vertical_tolerance),
        ] {
            if tolerance < 0.0 {
                return Err(CatalogError::Invalid(format!("{name} must not be negative")));
            }
        }

        Ok(())
    }
}
