//! Record syntax diagnostics with source-annotated error messages

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Syntax or shape error in a record file, pointing at the offending location
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(cardiag::record::syntax))]
pub struct RecordSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    /// The underlying parser message
    message: String,
}

impl RecordSyntaxError {
    /// Create a syntax error from a serde_yml error
    pub fn from_yaml_error(err: &serde_yml::Error, source: &str, filename: &str) -> Self {
        let (line, column) = err
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((1, 1));

        Self::at_location(err.to_string(), source, filename, line, column)
    }

    /// Create a syntax error from a serde_json error
    pub fn from_json_error(err: &serde_json::Error, source: &str, filename: &str) -> Self {
        let line = err.line().max(1);
        let column = err.column().max(1);

        Self::at_location(err.to_string(), source, filename, line, column)
    }

    /// Create a syntax error at a specific 1-based line and column
    pub fn at_location(
        message: impl Into<String>,
        source: &str,
        filename: &str,
        line: usize,
        column: usize,
    ) -> Self {
        let message = message.into();
        let offset = line_col_to_offset(source, line, column);
        let help = generate_help(&message);

        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1)),
            help,
            message,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Suggested fix, if the parser message matched a known mistake
    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

/// Convert line/column to byte offset
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    let mut current_line = 1;

    for (i, ch) in source.char_indices() {
        if current_line == line {
            let line_start = i;
            let mut col = 1;
            for (j, c) in source[line_start..].char_indices() {
                if col == column {
                    return line_start + j;
                }
                if c == '\n' {
                    break;
                }
                col += 1;
            }
            return line_start + column.saturating_sub(1);
        }
        if ch == '\n' {
            current_line += 1;
        }
        offset = i;
    }

    offset
}

/// Generate helpful suggestions based on error message
fn generate_help(message: &str) -> Option<String> {
    let msg_lower = message.to_lowercase();

    if msg_lower.contains("parttype must not be null") {
        return Some("Every part needs a `type`, e.g. `type: TIRE`".to_string());
    }

    if msg_lower.contains("conditiontype must not be null") {
        return Some("Every part needs a `condition`, e.g. `condition: GOOD`".to_string());
    }

    if msg_lower.contains("tab") {
        return Some(
            "YAML requires spaces for indentation, not tabs. Replace tabs with spaces.".to_string(),
        );
    }

    if msg_lower.contains("duplicate key") || msg_lower.contains("duplicate field") {
        return Some("Each key can only appear once. Remove or rename the duplicate key.".to_string());
    }

    if msg_lower.contains("expected block end") {
        return Some("Check your indentation - it may be inconsistent.".to_string());
    }

    if msg_lower.contains("mapping values are not allowed") {
        return Some("You may be missing a space after ':' or have incorrect indentation.".to_string());
    }

    if msg_lower.contains("trailing comma") {
        return Some("JSON does not allow a comma after the last item.".to_string());
    }

    if msg_lower.contains("invalid type: map") && msg_lower.contains("sequence") {
        return Some("`parts` must be a list: start each part with `- type: ...`".to_string());
    }

    None
}
