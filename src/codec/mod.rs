//! Sectioned `.env` codec.
//!
//! The file is a flat list of `KEY=value` lines grouped under comment
//! headers:
//!
//! ```text
//! ############################################################################################
//! # Section: Host
//! ############################################################################################
//!
//! HOST_PORT=8080
//! DOCKER_ARCH=linux/amd64
//!
//! ```
//!
//! Decoding is lenient: anything that is not a header or a `KEY=value` line
//! inside a section is skipped, so hand-edited files still load.


use crate::document::{ConfigDocument, FieldValues};
use crate::error::{EnvError, Result};
use crate::fs::atomic_write_file;
use crate::registry::Catalog;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Width of the `#` rule framing each section header.
pub const HEADER_RULE_WIDTH: usize = 92;

/// Marker that turns a comment line into a section header.
const SECTION_MARKER: &str = "Section";

/// Encode `document` as sectioned `.env` text.
///
/// Fails with `Format` if a section name, key or value would read back as
/// something else.
pub fn encode(document: &ConfigDocument) -> Result<String> {
    encode_with(document, None)
}

/// Encode `document`, preceding each known key with a `# description` line
/// taken from `catalog`.
pub fn encode_annotated(document: &ConfigDocument, catalog: &Catalog) -> Result<String> {
    encode_with(document, Some(catalog))
}

fn encode_with(document: &ConfigDocument, catalog: Option<&Catalog>) -> Result<String> {
    check_encodable(document)?;

    let rule = "#".repeat(HEADER_RULE_WIDTH);
    let mut out = String::new();

    for (name, values) in document.iter() {
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("# {}: {}\n", SECTION_MARKER, name));
        out.push_str(&rule);
        out.push_str("\n\n");

        let section = catalog.and_then(|c| c.get(name));
        for (key, value) in values.iter() {
            if let Some(description) = section
                .and_then(|s| s.get(key))
                .map(|f| f.description())
                .filter(|d| !d.is_empty())
            {
                out.push_str(&format!("# {}\n", comment_text(description)));
            }
            out.push_str(&format!("{}={}\n", key, value));
        }
        out.push('\n');
    }

    Ok(out)
}

/// Check that every entry of `document` survives a decode of its encoding.
///
/// - section names are non-blank and hold no `:` or line break
/// - keys are non-blank, hold no `=` or line break and do not start with `#`
/// - values hold no line break
fn check_encodable(document: &ConfigDocument) -> Result<()> {
    for (name, values) in document.iter() {
        if name.trim().is_empty() || name.contains(':') || has_line_break(name) {
            return Err(EnvError::Format(format!(
                "section name '{}' cannot be written to a .env file",
                name.escape_debug()
            )));
        }

        for (key, value) in values.iter() {
            if key.trim().is_empty()
                || key.contains('=')
                || key.trim_start().starts_with('#')
                || has_line_break(key)
            {
                return Err(EnvError::Format(format!(
                    "key '{}' in section '{}' cannot be written to a .env file",
                    key.escape_debug(),
                    name
                )));
            }
            if has_line_break(value) {
                return Err(EnvError::Format(format!(
                    "value of {}.{} contains a line break",
                    name, key
                )));
            }
        }
    }
    Ok(())
}

pub(crate) fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r'])
}

/// Flatten a description into one comment line that decode will not
/// mistake for a section header.
fn comment_text(description: &str) -> String {
    description
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(SECTION_MARKER, "section")
}

/// Decode sectioned `.env` text.
///
/// - Lines are trimmed before they are looked at.
/// - A `#` line containing `Section` starts a section named by the text
///   after its last `:`. Repeating a header starts that section over.
/// - Other `#` lines are comments.
/// - `KEY=value` lines split on the first `=`; key and value are trimmed.
///   A later line for the same key replaces the earlier value.
/// - Lines before the first header, blank keys and anything else are skipped.
pub fn decode(text: &str) -> ConfigDocument {
    let mut document = ConfigDocument::new();
    let mut current: Option<String> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let line_no = index + 1;

        if line.starts_with('#') {
            if line.contains(SECTION_MARKER) {
                let name = line.rsplit(':').next().unwrap_or(line).trim();
                if name.is_empty() {
                    debug!("line {}: section header without a name", line_no);
                    current = None;
                } else {
                    document.insert_section(name, FieldValues::new());
                    current = Some(name.to_string());
                }
            }
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            if !line.is_empty() {
                debug!("line {}: ignoring '{}'", line_no, line);
            }
            continue;
        };

        let Some(section) = current.as_deref() else {
            debug!("line {}: ignoring '{}' outside of any section", line_no, line);
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            debug!("line {}: ignoring entry without a key", line_no);
            continue;
        }

        document.set(section, key, value.trim());
    }

    document
}

/// Read and decode the document at `path`.
pub fn read_document(path: &Path) -> Result<ConfigDocument> {
    let text = fs::read_to_string(path).map_err(|e| EnvError::io("read", path, e))?;
    let document = decode(&text);
    debug!(
        "loaded {} section(s) from {}",
        document.len(),
        path.display()
    );
    Ok(document)
}

/// Encode `document` and write it atomically to `path`.
///
/// With a catalog, each known key gets its description as a comment.
/// Nothing is written when the document cannot be encoded.
pub fn write_document(
    path: &Path,
    document: &ConfigDocument,
    descriptions: Option<&Catalog>,
) -> Result<()> {
    let text = match descriptions {
        Some(catalog) => encode_annotated(document, catalog)?,
        None => encode(document)?,
    };
    atomic_write_file(path, &text)?;
    info!("wrote {} section(s) to {}", document.len(), path.display());
    Ok(())
}
