//! A single named section and its field registry.

use crate::document::FieldValues;
use crate::error::{EnvError, Result};
use crate::field::FieldDescriptor;
use std::fmt;

/// Signature of a cross-field rule: full section values in, issues out.
pub type RuleFn = fn(&FieldValues) -> Vec<String>;

/// A named predicate over all values of a section.
#[derive(Clone)]
pub struct CrossFieldRule {
    name: &'static str,
    check: RuleFn,
}

impl CrossFieldRule {
    pub fn new(name: &'static str, check: RuleFn) -> Self {
        Self { name, check }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the rule against `values`.
    pub fn apply(&self, values: &FieldValues) -> Vec<String> {
        (self.check)(values)
    }
}

impl fmt::Debug for CrossFieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossFieldRule")
            .field("name", &self.name)
            .finish()
    }
}

/// Named, ordered collection of field descriptors.
#[derive(Debug, Clone)]
pub struct Section {
    name: String,
    title: String,
    description: String,
    fields: Vec<FieldDescriptor>,
    rules: Vec<CrossFieldRule>,
}

impl Section {
    /// Create an empty section. The title defaults to the name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            name,
            description: String::new(),
            fields: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Set the display title and description.
    pub fn titled(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.title = title.into();
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn rules(&self) -> &[CrossFieldRule] {
        &self.rules
    }

    /// Append a field descriptor.
    ///
    /// # Errors
    ///
    /// * `InvalidField` - the descriptor breaks its own invariants
    /// * `DuplicateKey` - the key is already registered here
    /// * `UnknownField` - `depends_on` names a field not registered before it
    pub fn register(&mut self, field: FieldDescriptor) -> Result<()> {
        field.check()?;

        if self.get(field.key()).is_some() {
            return Err(EnvError::DuplicateKey {
                section: self.name.clone(),
                key: field.key().to_string(),
            });
        }

        if let Some(dep) = field.dependency()
            && self.get(&dep.key).is_none()
        {
            return Err(EnvError::UnknownField {
                section: self.name.clone(),
                key: dep.key.clone(),
            });
        }

        self.fields.push(field);
        Ok(())
    }

    /// Register several fields in order, stopping at the first error.
    pub fn register_all(&mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Result<()> {
        for field in fields {
            self.register(field)?;
        }
        Ok(())
    }

    /// Attach a cross-field rule. Rules run in attachment order.
    pub fn add_rule(&mut self, name: &'static str, check: RuleFn) {
        self.rules.push(CrossFieldRule::new(name, check));
    }

    /// Each field key mapped to its default, in declaration order.
    pub fn defaults(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|f| (f.key(), f.default_value()))
            .collect()
    }

    /// Descriptor for `key`.
    pub fn find(&self, key: &str) -> Result<&FieldDescriptor> {
        self.get(key).ok_or_else(|| EnvError::UnknownField {
            section: self.name.clone(),
            key: key.to_string(),
        })
    }

    /// Descriptor for `key`, if registered.
    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key() == key)
    }
}
