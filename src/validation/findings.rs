use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Append-only record of everything the checks observed.
///
/// Nothing is ever removed, sorted or deduplicated; the report prints each
/// list in the order findings were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FindingSet {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl FindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        match severity {
            Severity::Error => self.errors.push(message),
            Severity::Warning => self.warnings.push(message),
            Severity::Info => self.info.push(message),
        }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message);
    }

    /// Push a headline followed by at most `limit` detail lines
    pub fn push_with_details<I>(
        &mut self,
        severity: Severity,
        headline: String,
        details: I,
        limit: usize,
    ) where
        I: IntoIterator<Item = String>,
    {
        self.push(severity, headline);
        for line in details.into_iter().take(limit) {
            self.push(severity, line);
        }
    }

    pub fn get(&self, severity: Severity) -> &[String] {
        match severity {
            Severity::Error => &self.errors,
            Severity::Warning => &self.warnings,
            Severity::Info => &self.info,
        }
    }

    /// The verdict depends on errors alone
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}
