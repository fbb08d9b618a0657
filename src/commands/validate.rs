use anyhow::{Context, Result};
use miette::Report;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use savecheck::catalog::RuleCatalog;
use savecheck::defaults::DEFAULT_CATALOG;
use savecheck::loader::display_name;
use savecheck::report;
use savecheck::validation::{FindingSet, Validator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    passed: bool,
    #[serde(flatten)]
    findings: &'a FindingSet,
}

/// Validate one save file and print the report. Returns the verdict.
pub fn validate_command(
    save_file: &Path,
    catalog_path: Option<&Path>,
    format: OutputFormat,
) -> Result<bool> {
    let catalog = match catalog_path {
        Some(path) => {
            info!("Using rule catalog {path:?}");
            RuleCatalog::from_path(path)
                .with_context(|| format!("Failed to load rule catalog: {path:?}"))?
        }
        None => DEFAULT_CATALOG.clone(),
    };
    let validator = Validator::new(catalog);
    let file_name = display_name(save_file);

    let mut outcome = match format {
        OutputFormat::Text => {
            println!("{}", report::header(&file_name, chrono::Local::now()));
            validator.validate_path(save_file, |check| println!("{}", report::progress(check)))
        }
        OutputFormat::Json => validator.validate_path(save_file, |_| {}),
    };

    let passed = outcome.passed();
    if let Some(err) = outcome.load_error.take() {
        debug!("Load failed before any checks ran");
        if format == OutputFormat::Text {
            eprintln!("{:?}", Report::new(err));
        }
    }

    match format {
        OutputFormat::Text => println!("{}", report::results(&outcome.findings)),
        OutputFormat::Json => {
            let json = JsonReport {
                file: &file_name,
                passed,
                findings: &outcome.findings,
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(passed)
}
