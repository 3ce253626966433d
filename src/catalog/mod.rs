//! Built-in section tables for the Broadsea stack.
//!
//! Each submodule declares one section as a table of field descriptors
//! plus the section's cross-field rules. `builtin()` assembles them in the
//! order they appear in the `.env` file.

mod atlas;
mod build;
mod datasource;
mod host;
mod monitoring;
mod security;
mod webapi;


use crate::error::Result;
use crate::registry::Catalog;

/// Build the catalog of every built-in section.
///
/// Fails only if one of the tables breaks a descriptor invariant, which is
/// a programming error caught by the tests.
pub fn builtin() -> Result<Catalog> {
    let mut catalog = Catalog::new();
    catalog.push(host::section()?)?;
    catalog.push(atlas::section()?)?;
    catalog.push(webapi::section()?)?;
    catalog.push(security::section()?)?;
    catalog.push(datasource::section()?)?;
    catalog.push(build::section()?)?;
    catalog.push(monitoring::section()?)?;
    Ok(catalog)
}

/// Options shared by the logging-level fields of several services.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// `http://` or `https://` followed by anything without whitespace.
const HTTP_URL: &str = r"https?://\S+";
