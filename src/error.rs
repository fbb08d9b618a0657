//! Load-phase errors. Rule violations are findings, not errors.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum LoadError {
    #[error("Save file not found: {path}")]
    #[diagnostic(code(savecheck::not_found))]
    NotFound { path: String },

    #[error("Failed to read save file {path}: {source}")]
    #[diagnostic(code(savecheck::unreadable))]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {message}")]
    #[diagnostic(code(savecheck::malformed))]
    Malformed {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
        message: String,
    },
}

impl LoadError {
    pub fn malformed(path: &Path, content: String, error: &serde_json::Error) -> Self {
        let span = crate::error_utils::span_at(&content, error.line(), error.column());
        Self::Malformed {
            src: crate::error_utils::create_named_source(path, content),
            span,
            message: error.to_string(),
        }
    }

    /// Text recorded in the error list when loading fails
    pub fn finding(&self) -> String {
        format!("✗ {self}")
    }
}
