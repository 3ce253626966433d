//! Error types for stackenv.
//!
//! Uses thiserror for derive macros. Structural problems (duplicate keys,
//! unknown fields) and I/O failures are errors; bad user input in a document
//! is never an error and is reported as validation issues instead.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for stackenv operations.
#[derive(Error, Debug)]
pub enum EnvError {
    /// A field key was registered twice in the same section.
    #[error("duplicate field '{key}' in section '{section}'")]
    DuplicateKey { section: String, key: String },

    /// A section name was added twice to the catalog.
    #[error("duplicate section '{0}'")]
    DuplicateSection(String),

    /// A field descriptor violates its own invariants.
    #[error("invalid field '{key}': {reason}")]
    InvalidField { key: String, reason: String },

    /// A field key is not present in the section it was looked up in.
    #[error("unknown field '{key}' in section '{section}'")]
    UnknownField { section: String, key: String },

    /// A section name is not present in the catalog.
    #[error("unknown section '{0}'")]
    UnknownSection(String),

    /// A file could not be read or written.
    #[error("failed to {action} '{}': {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structured data could not be parsed or produced.
    #[error("{0}")]
    Format(String),

    /// User provided invalid arguments or asked for something refused.
    #[error("{0}")]
    UserError(String),

    /// The document has validation issues.
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl EnvError {
    /// Build an I/O error for `action` on `path`.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EnvError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            EnvError::DuplicateKey { .. }
            | EnvError::DuplicateSection(_)
            | EnvError::InvalidField { .. } => exit_codes::SCHEMA_FAILURE,
            EnvError::UnknownField { .. }
            | EnvError::UnknownSection(_)
            | EnvError::Format(_)
            | EnvError::UserError(_) => exit_codes::USER_ERROR,
            EnvError::Io { .. } => exit_codes::IO_FAILURE,
            EnvError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for stackenv operations.
pub type Result<T> = std::result::Result<T, EnvError>;
