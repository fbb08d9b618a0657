use std::fmt;
use tracing::debug;

use super::findings::FindingSet;
use super::walk::SceneWalk;
use crate::catalog::{RuleCatalog, TableSpec};
use crate::models::SceneObject;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSide {
    Main,
    Left,
    Right,
}

impl TableSide {
    pub const ALL: [TableSide; 3] = [TableSide::Main, TableSide::Left, TableSide::Right];

    /// Nickname token that, together with "table", identifies this table
    pub fn keyword(self) -> &'static str {
        match self {
            TableSide::Main => "main",
            TableSide::Left => "left",
            TableSide::Right => "right",
        }
    }

    fn missing_message(self) -> &'static str {
        match self {
            TableSide::Main => "✗ Main table not found",
            TableSide::Left => "✗ Left side table not found",
            TableSide::Right => "✗ Right side table not found",
        }
    }

    pub fn spec(self, catalog: &RuleCatalog) -> &TableSpec {
        match self {
            TableSide::Main => &catalog.tables.main,
            TableSide::Left => &catalog.tables.left,
            TableSide::Right => &catalog.tables.right,
        }
    }

    /// Which table a nickname names, if any. Main wins over left, left over right.
    pub fn classify(nickname: &str) -> Option<TableSide> {
        let lower = nickname.to_lowercase();
        if !lower.contains("table") {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|side| lower.contains(side.keyword()))
    }
}

impl fmt::Display for TableSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TableSide::Main => "Main",
            TableSide::Left => "Left",
            TableSide::Right => "Right",
        };
        f.write_str(label)
    }
}

/// The three tables found in a save; a later match replaces an earlier one
#[derive(Debug, Default)]
pub struct TableSet<'a> {
    pub main: Option<&'a SceneObject>,
    pub left: Option<&'a SceneObject>,
    pub right: Option<&'a SceneObject>,
}

impl<'a> TableSet<'a> {
    pub fn find(walk: SceneWalk<'a>) -> Self {
        let mut tables = TableSet::default();
        for obj in walk.top_level() {
            match TableSide::classify(obj.nickname()) {
                Some(TableSide::Main) => tables.main = Some(obj),
                Some(TableSide::Left) => tables.left = Some(obj),
                Some(TableSide::Right) => tables.right = Some(obj),
                None => {}
            }
        }
        tables
    }

    pub fn get(&self, side: TableSide) -> Option<&'a SceneObject> {
        match side {
            TableSide::Main => self.main,
            TableSide::Left => self.left,
            TableSide::Right => self.right,
        }
    }
}

pub fn check(walk: SceneWalk<'_>, catalog: &RuleCatalog, findings: &mut FindingSet) {
    let tables = TableSet::find(walk);

    for side in TableSide::ALL {
        match tables.get(side) {
            Some(table) => validate_table(table, side, catalog, findings),
            None => findings.error(side.missing_message()),
        }
    }
}

fn validate_table(
    table: &SceneObject,
    side: TableSide,
    catalog: &RuleCatalog,
    findings: &mut FindingSet,
) {
    let expected = side.spec(catalog);
    let tolerance = catalog.tables.tolerance;
    debug!("Checking {side} table '{}'", table.nickname());

    let position = table.transform.position();
    if position.within(&expected.position, tolerance) {
        findings.info(format!("✓ {side} table position correct"));
    } else {
        findings.error(format!(
            "✗ {side} table position incorrect: {position} != {}",
            expected.position
        ));
    }

    let scale = table.transform.scale_or(1.0);
    if scale.within(&expected.scale, tolerance) {
        findings.info(format!("✓ {side} table scale correct"));
    } else {
        findings.error(format!(
            "✗ {side} table scale incorrect: {scale} != {}",
            expected.scale
        ));
    }

    if expected.must_be_locked && !table.is_locked() {
        findings.warning(format!("⚠ {side} table should be locked"));
    }
}
