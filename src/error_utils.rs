//! Shared error utilities

use miette::{NamedSource, SourceSpan};
use std::path::Path;

/// Toggle this to add spaces for iTerm2 clickability
const ADD_SPACES_FOR_ITERM: bool = true;

/// Format a file path for error display
///
/// When ADD_SPACES_FOR_ITERM is true, adds a space before the path
/// to make it clickable in iTerm2.
pub fn format_error_path(path: &Path) -> String {
    let path_str = path.display().to_string();

    if ADD_SPACES_FOR_ITERM {
        format!(" {path_str}")
    } else {
        path_str
    }
}

/// Create a NamedSource with proper formatting for error display
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    let formatted_path = format_error_path(path);
    NamedSource::new(formatted_path, content)
}

/// Convert a 1-based line/column pair (as reported by serde_json) into a
/// single-character span. Positions past the end clamp to the last byte.
pub fn span_at(content: &str, line: usize, column: usize) -> SourceSpan {
    let mut offset = 0;
    for (index, text) in content.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let within = column.saturating_sub(1).min(text.len());
            offset += within;
            break;
        }
        offset += text.len();
    }

    let offset = offset.min(content.len());
    let len = usize::from(offset < content.len());
    SourceSpan::new(offset.into(), len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_on_second_line() {
        let content = "{\n  \"a\": ,\n}";
        let span = span_at(content, 2, 8);
        assert_eq!(span.offset(), 2 + 7);
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn test_span_past_end_is_empty() {
        let content = "{";
        let span = span_at(content, 1, 2);
        assert_eq!(span.offset(), 1);
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_format_error_path() {
        assert_eq!(format_error_path(Path::new("save.json")), " save.json");
    }
}
