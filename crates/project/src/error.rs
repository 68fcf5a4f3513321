//! Error types for the project model

use miette::Diagnostic;
use thiserror::Error;

/// Error type for project model operations
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A target label failed validation
    #[error("Invalid target label '{label}': {reason}")]
    #[diagnostic(
        code(buildview::project::invalid_label),
        help("Labels are workspace-absolute, e.g. //java/com/example:lib")
    )]
    InvalidLabel {
        /// The rejected label
        label: String,
        /// Why it was rejected
        reason: String,
    },
}

impl Error {
    /// Create an invalid label error
    #[must_use]
    pub fn invalid_label(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLabel {
            label: label.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for project model operations
pub type Result<T> = std::result::Result<T, Error>;
