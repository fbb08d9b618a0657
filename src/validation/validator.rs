use std::fmt;
use std::path::Path;
use tracing::debug;

use super::findings::FindingSet;
use super::walk::SceneWalk;
use super::{metadata, organic, placement, provenance, tables, terrain, units};
use crate::catalog::RuleCatalog;
use crate::defaults::DEFAULT_CATALOG;
use crate::error::LoadError;
use crate::loader;
use crate::models::SaveFile;

/// The checks, in the order they always run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Metadata,
    Tables,
    Placement,
    Units,
    Terrain,
    Provenance,
    Organic,
}

impl Check {
    pub const ORDER: [Check; 7] = [
        Check::Metadata,
        Check::Tables,
        Check::Placement,
        Check::Units,
        Check::Terrain,
        Check::Provenance,
        Check::Organic,
    ];

    pub fn number(self) -> usize {
        Self::ORDER
            .iter()
            .position(|check| *check == self)
            .map_or(0, |index| index + 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            Check::Metadata => "Save File Metadata",
            Check::Tables => "Table Configuration",
            Check::Placement => "Asset Placement",
            Check::Units => "Unit Scaling",
            Check::Terrain => "Terrain Scaling (Physical Size)",
            Check::Provenance => "GitHub URLs",
            Check::Organic => "Organic Terrain Boundaries",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Test {}: {}", self.number(), self.title())
    }
}

/// Result of validating one file
#[derive(Debug)]
pub struct ValidationOutcome {
    pub findings: FindingSet,
    /// Set when the file could not be read or parsed
    pub load_error: Option<LoadError>,
}

impl ValidationOutcome {
    pub fn loaded(&self) -> bool {
        self.load_error.is_none()
    }

    pub fn passed(&self) -> bool {
        self.loaded() && self.findings.passed()
    }
}

pub struct Validator {
    catalog: RuleCatalog,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG.clone())
    }
}

impl Validator {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Load a save file and run every check against it.
    ///
    /// `on_check` is called as each check starts. A load failure is recorded
    /// as an error and no checks run.
    pub fn validate_path(&self, path: &Path, on_check: impl FnMut(Check)) -> ValidationOutcome {
        let mut findings = FindingSet::new();

        match loader::load_save(path) {
            Ok(loaded) => {
                findings.info(format!("✓ Loaded save file: {}", loaded.file_name()));
                self.validate_save(&loaded.save, &mut findings, on_check);
                ValidationOutcome {
                    findings,
                    load_error: None,
                }
            }
            Err(e) => {
                debug!("Load failed: {e}");
                findings.error(e.finding());
                ValidationOutcome {
                    findings,
                    load_error: Some(e),
                }
            }
        }
    }

    /// Run the checks in order against an already-parsed save
    pub fn validate_save(
        &self,
        save: &SaveFile,
        findings: &mut FindingSet,
        mut on_check: impl FnMut(Check),
    ) {
        let catalog = &self.catalog;

        on_check(Check::Metadata);
        let Some(objects) = metadata::check(save, catalog, findings) else {
            debug!("No object list; skipping remaining checks");
            return;
        };
        let walk = SceneWalk::new(objects);

        let checks: [(Check, fn(SceneWalk<'_>, &RuleCatalog, &mut FindingSet)); 6] = [
            (Check::Tables, tables::check),
            (Check::Placement, placement::check),
            (Check::Units, units::check),
            (Check::Terrain, terrain::check),
            (Check::Provenance, provenance::check),
            (Check::Organic, organic::check),
        ];

        for (check, run) in checks {
            debug!("Running {check}");
            on_check(check);
            run(walk, catalog, findings);
        }
    }

    /// Convenience wrapper returning a fresh finding set
    pub fn findings_for(&self, save: &SaveFile) -> FindingSet {
        let mut findings = FindingSet::new();
        self.validate_save(save, &mut findings, |_| {});
        findings
    }
}
