//! Contract-violation errors raised at the boundary of the diagnostic core

use miette::Diagnostic;
use thiserror::Error;

/// Faults raised when malformed data is handed to the core
///
/// Diagnostic findings (missing fields, missing parts, damaged parts) are
/// never errors; they are returned as [`crate::engine::Outcome`] values.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DiagnosticError {
    #[error("invalid argument: {0}")]
    #[diagnostic(code(cardiag::invalid_argument))]
    InvalidArgument(String),
}

impl DiagnosticError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        DiagnosticError::InvalidArgument(message.into())
    }
}
