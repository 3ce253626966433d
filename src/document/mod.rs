//! The in-memory Config Document.
//!
//! A document maps section names to the values of that section, and each
//! section maps field keys to string values. Both levels keep insertion
//! order so that encoding writes sections and keys in the order they were
//! created or loaded. Replacing an existing entry keeps its position.


use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered key -> value map for one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    entries: Vec<(String, String)>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value of `key` trimmed, or `""` when absent.
    pub fn resolved(&self, key: &str) -> &str {
        self.get(key).map(str::trim).unwrap_or("")
    }

    /// Insert or replace `key`. Replacing keeps the original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FieldValues::new();
        for (k, v) in iter {
            values.set(k, v);
        }
        values
    }
}

impl Serialize for FieldValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Ordered section name -> `FieldValues` map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: Vec<(String, FieldValues)>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values of section `name`, if present.
    pub fn section(&self, name: &str) -> Option<&FieldValues> {
        self.sections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values)
    }

    /// Values of section `name`, appending an empty section if absent.
    pub fn section_entry(&mut self, name: &str) -> &mut FieldValues {
        let index = match self.sections.iter().position(|(n, _)| n == name) {
            Some(index) => index,
            None => {
                self.sections.push((name.to_string(), FieldValues::new()));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index].1
    }

    /// Insert or replace a whole section. Replacing keeps the position.
    pub fn insert_section(&mut self, name: impl Into<String>, values: FieldValues) {
        let name = name.into();
        match self.sections.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = values,
            None => self.sections.push((name, values)),
        }
    }

    /// Value of `key` in `section`, if both exist.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|values| values.get(key))
    }

    /// Set `key` in `section`, creating the section when needed.
    pub fn set(&mut self, section: &str, key: impl Into<String>, value: impl Into<String>) {
        self.section_entry(section).set(key, value);
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValues)> {
        self.sections.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for ConfigDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, values) in &self.sections {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}
