//! Structured-data export of a Config Document.
//!
//! Both formats nest one map per section under its name and keep section
//! and key order.

use crate::document::ConfigDocument;
use crate::error::{EnvError, Result};
use crate::fs::atomic_write_file;
use clap::ValueEnum;
use log::info;
use std::fmt;
use std::path::Path;

/// Output format for `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Pretty JSON with two-space indentation.
pub fn to_json(document: &ConfigDocument) -> Result<String> {
    serde_json::to_string_pretty(document)
        .map_err(|e| EnvError::Format(format!("failed to serialize JSON: {}", e)))
}

pub fn to_yaml(document: &ConfigDocument) -> Result<String> {
    serde_yaml::to_string(document)
        .map_err(|e| EnvError::Format(format!("failed to serialize YAML: {}", e)))
}

/// Render `document` in `format`. The result always ends with a newline.
pub fn render(document: &ConfigDocument, format: ExportFormat) -> Result<String> {
    let mut text = match format {
        ExportFormat::Json => to_json(document)?,
        ExportFormat::Yaml => to_yaml(document)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Render `document` and write it atomically to `path`.
pub fn export_to_file(document: &ConfigDocument, format: ExportFormat, path: &Path) -> Result<()> {
    let text = render(document, format)?;
    atomic_write_file(path, &text)?;
    info!("exported {} to {}", format, path.display());
    Ok(())
}
