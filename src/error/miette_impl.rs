//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::PrintError;

/// A diagnostic wrapper for print errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct PrintDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<PrintError> for PrintDiagnostic {
    fn from(e: PrintError) -> Self {
        let (message, source, help) = match e {
            PrintError::InvalidArgument(msg) => (
                format!("Invalid argument: {msg}"),
                None,
                Some("Check the sink name or table shape passed to the router".into()),
            ),
            PrintError::Formatting { value, source } => (
                format!("Could not render value '{value}'"),
                Some(source),
                Some("The value survived none of the render channels, including string fallback".into()),
            ),
            PrintError::Sink(source) => (
                "A sink rejected the print call".into(),
                Some(source),
                None,
            ),
            PrintError::Io(source) => (
                "I/O error while writing to a surface".into(),
                Some(Box::new(source) as Box<dyn std::error::Error + Send + Sync>),
                None,
            ),
        };
        PrintDiagnostic {
            message,
            source,
            help,
            severity: Severity::Error,
        }
    }
}

impl From<PrintError> for miette::Report {
    fn from(e: PrintError) -> Self {
        miette::Report::new(PrintDiagnostic::from(e))
    }
}
