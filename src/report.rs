//! Terminal report rendering

use chrono::{DateTime, Local};
use colored::{ColoredString, Colorize};

use crate::validation::{Check, FindingSet, Severity};

const RULE_WIDTH: usize = 70;

fn rule() -> ColoredString {
    "=".repeat(RULE_WIDTH).bold()
}

pub fn header(file_name: &str, now: DateTime<Local>) -> String {
    [
        String::new(),
        rule().to_string(),
        "DBR TTS SAVE FILE TEST FRAMEWORK".bold().to_string(),
        rule().to_string(),
        format!("Save File: {file_name}"),
        format!("Test Time: {}", now.format("%Y-%m-%d %H:%M:%S")),
    ]
    .join("\n")
}

pub fn progress(check: Check) -> String {
    format!("\n{}", check.to_string().bold())
}

fn paint(text: &str, severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => text.red(),
        Severity::Warning => text.yellow(),
        Severity::Info => text.green(),
    }
}

fn section(findings: &FindingSet, severity: Severity, title: &str) -> Vec<String> {
    let lines = findings.get(severity);
    if lines.is_empty() {
        return Vec::new();
    }

    let mut out = vec![
        String::new(),
        paint(&format!("{title} ({}):", lines.len()), severity)
            .bold()
            .to_string(),
    ];
    out.extend(lines.iter().map(|line| paint(line, severity).to_string()));
    out
}

/// Errors, then warnings, then info, followed by the pass/fail banner
pub fn results(findings: &FindingSet) -> String {
    let mut out = vec![
        String::new(),
        rule().to_string(),
        "TEST RESULTS".bold().to_string(),
        rule().to_string(),
    ];

    out.extend(section(findings, Severity::Error, "ERRORS"));
    out.extend(section(findings, Severity::Warning, "WARNINGS"));
    out.extend(section(findings, Severity::Info, "INFO"));

    out.push(String::new());
    out.push(rule().to_string());
    out.extend(banner(findings));
    out.push(rule().to_string());
    out.push(String::new());

    out.join("\n")
}

fn banner(findings: &FindingSet) -> Vec<String> {
    let warnings = findings.warnings.len();
    if findings.passed() {
        let mut lines = vec!["✓ ALL TESTS PASSED".green().bold().to_string()];
        if warnings > 0 {
            lines.push(format!("  ({warnings} warnings)").yellow().to_string());
        }
        lines
    } else {
        vec![
            "✗ TESTS FAILED".red().bold().to_string(),
            format!("  {} errors, {warnings} warnings", findings.errors.len())
                .red()
                .to_string(),
        ]
    }
}
