//! The ordered set of sections that make up a document.

use super::section::Section;
use crate::document::ConfigDocument;
use crate::error::{EnvError, Result};
use log::warn;
use std::collections::BTreeMap;

/// A key registered in more than one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    pub key: String,
    pub sections: Vec<String>,
}

/// Result of loading a document over catalog defaults.
#[derive(Debug, Clone)]
pub struct Overlay {
    /// Defaults with every known value from the loaded document applied.
    pub document: ConfigDocument,
    /// Entries of the loaded document that the catalog does not know,
    /// as `Section` or `Section.KEY`.
    pub dropped: Vec<String>,
}

/// Ordered collection of sections with unique names.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section; fails with `DuplicateSection` on a repeated name.
    pub fn push(&mut self, section: Section) -> Result<()> {
        if self.get(section.name()).is_some() {
            return Err(EnvError::DuplicateSection(section.name().to_string()));
        }
        self.sections.push(section);
        Ok(())
    }

    /// Section called `name`.
    pub fn section(&self, name: &str) -> Result<&Section> {
        self.get(name)
            .ok_or_else(|| EnvError::UnknownSection(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name() == name)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name())
    }

    /// A new catalog holding only `names`, in that order.
    ///
    /// An empty list keeps every section.
    pub fn restrict(&self, names: &[String]) -> Result<Catalog> {
        if names.is_empty() {
            return Ok(self.clone());
        }

        let mut restricted = Catalog::new();
        for name in names {
            restricted.push(self.section(name)?.clone())?;
        }
        Ok(restricted)
    }

    /// A document holding every section's defaults, in catalog order.
    pub fn defaults(&self) -> ConfigDocument {
        let mut doc = ConfigDocument::new();
        for section in &self.sections {
            doc.insert_section(section.name(), section.defaults());
        }
        doc
    }

    /// Keys that appear in more than one section, sorted by key.
    pub fn key_collisions(&self) -> Vec<KeyCollision> {
        let mut owners: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for section in &self.sections {
            for field in section.fields() {
                owners
                    .entry(field.key())
                    .or_default()
                    .push(section.name().to_string());
            }
        }

        owners
            .into_iter()
            .filter(|(_, sections)| sections.len() > 1)
            .map(|(key, sections)| KeyCollision {
                key: key.to_string(),
                sections,
            })
            .collect()
    }

    /// Start from defaults and apply every known value of `loaded`.
    ///
    /// Sections and keys the catalog does not define are dropped and
    /// reported in `Overlay::dropped`.
    pub fn overlay(&self, loaded: &ConfigDocument) -> Overlay {
        let mut document = self.defaults();
        let mut dropped = Vec::new();

        for (name, values) in loaded.iter() {
            let Some(section) = self.get(name) else {
                warn!("ignoring unknown section '{}'", name);
                dropped.push(name.to_string());
                continue;
            };

            let target = document.section_entry(name);
            for (key, value) in values.iter() {
                if section.get(key).is_some() {
                    target.set(key, value);
                } else {
                    warn!("ignoring unknown field '{}' in section '{}'", key, name);
                    dropped.push(format!("{}.{}", name, key));
                }
            }
        }

        Overlay { document, dropped }
    }
}
