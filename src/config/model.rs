//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Configuration for stackenv.
///
/// This struct represents the contents of `stackenv.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Document settings
    // =========================================================================
    /// Path of the `.env` document, relative to the working directory.
    #[serde(default = "default_env_file")]
    pub env_file: String,

    /// Write each field's description as a comment above it.
    #[serde(default)]
    pub write_descriptions: bool,

    // =========================================================================
    // Validation settings
    // =========================================================================
    /// Check that file-path values point into existing directories.
    #[serde(default)]
    pub check_paths: bool,

    /// Sections to work with, in order. Empty means every section.
    #[serde(default)]
    pub sections: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env_file: default_env_file(),
            write_descriptions: false,
            check_paths: false,
            sections: Vec::new(),
        }
    }
}
