//! Config loading, validation, and catalog selection.

use super::model::Config;
use crate::error::{EnvError, Result};
use crate::registry::Catalog;
use std::collections::HashSet;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(EnvError::UserError)` - The file could not be read
    /// * `Err(EnvError::Format)` - The file is not valid config YAML
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            EnvError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| EnvError::Format(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `env_file` must be non-empty
    /// - `sections` entries must be non-blank and unique
    pub fn validate(&self) -> Result<()> {
        if self.env_file.trim().is_empty() {
            return Err(EnvError::UserError(
                "config validation failed: env_file must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.sections {
            if name.trim().is_empty() {
                return Err(EnvError::UserError(
                    "config validation failed: sections entries must be non-empty".to_string(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(EnvError::UserError(format!(
                    "config validation failed: section '{}' is listed more than once",
                    name
                )));
            }
        }

        Ok(())
    }

    /// The part of `catalog` this config selects.
    ///
    /// Fails with `UnknownSection` if `sections` names a section the catalog
    /// does not have.
    pub fn select(&self, catalog: &Catalog) -> Result<Catalog> {
        catalog.restrict(&self.sections)
    }
}
