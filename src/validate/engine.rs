//! The validation engine.

use super::paths::check_file_paths;
use super::report::{DocumentReport, SectionReport};
use crate::document::{ConfigDocument, FieldValues};
use crate::field::{FieldDescriptor, FieldKind, NumericBounds};
use crate::registry::{Catalog, Section};
use std::path::Path;

/// Validate the values of one section.
///
/// Fields are checked in declaration order:
/// 1. Required: a required, non-secret field with an empty value
/// 2. Dependency gating: an inactive field skips checks 3-5
/// 3. Domain: enum and boolean values must be one of the options
/// 4. Range: numeric values must parse and lie within the bounds
/// 5. Format: the pattern must match the whole value; JSON fields must parse
///
/// Checks 3-5 only look at non-empty values. The section's cross-field rules
/// run afterwards, in attachment order. `values` is never modified and each
/// field is checked in isolation, so one bad value never hides another.
pub fn validate_section(section: &Section, values: &FieldValues) -> Vec<String> {
    let mut issues = Vec::new();

    for field in section.fields() {
        check_field(field, values, &mut issues);
    }

    for rule in section.rules() {
        issues.extend(rule.apply(values));
    }

    issues
}

/// Validate every catalog section of `document`.
///
/// A section missing from the document is validated as if all its values
/// were empty. When `path_base` is given, file-path fields are also checked
/// against the filesystem relative to it.
pub fn validate_document(
    catalog: &Catalog,
    document: &ConfigDocument,
    path_base: Option<&Path>,
) -> DocumentReport {
    let empty = FieldValues::new();
    let mut sections = Vec::with_capacity(catalog.sections().len());

    for section in catalog.sections() {
        let values = document.section(section.name()).unwrap_or(&empty);
        let mut issues = validate_section(section, values);
        if let Some(base) = path_base {
            issues.extend(check_file_paths(section, values, base));
        }
        sections.push(SectionReport::new(section.name(), issues));
    }

    DocumentReport::new(sections)
}

/// Whether the field's dependency (if any) holds for `values`.
pub(crate) fn is_active(field: &FieldDescriptor, values: &FieldValues) -> bool {
    match field.dependency() {
        Some(dep) => dep.is_satisfied_by(values.resolved(&dep.key)),
        None => true,
    }
}

fn check_field(field: &FieldDescriptor, values: &FieldValues, issues: &mut Vec<String>) {
    let key = field.key();
    let value = values.resolved(key);

    if value.is_empty() {
        if field.is_required() && !field.is_secret() {
            issues.push(format!("{} is required", key));
        }
        return;
    }

    if !is_active(field, values) {
        return;
    }

    if let Some(issue) = check_domain(field, value) {
        issues.push(issue);
    }

    if let Some(bounds) = field.bounds()
        && let Some(issue) = check_range(key, bounds, value)
    {
        issues.push(issue);
    }

    if let Some(pattern) = field.pattern_rule()
        && !pattern.is_full_match(value)
    {
        issues.push(format!("{} has invalid format", key));
    }

    if field.kind() == FieldKind::Json && serde_json::from_str::<serde_json::Value>(value).is_err()
    {
        issues.push(format!("{} must be valid JSON", key));
    }
}

fn check_domain(field: &FieldDescriptor, value: &str) -> Option<String> {
    if !matches!(field.kind(), FieldKind::Enum | FieldKind::Boolean) {
        return None;
    }
    if field.accepts_option(value) {
        return None;
    }
    Some(format!(
        "{} must be one of: {}",
        field.key(),
        field.options().join(", ")
    ))
}

fn check_range(key: &str, bounds: &NumericBounds, value: &str) -> Option<String> {
    let parsed = if bounds.allow_fraction {
        value.parse::<f64>().ok().filter(|n| n.is_finite())
    } else {
        value.parse::<i64>().ok().map(|n| n as f64)
    };

    match parsed {
        None => Some(format!("{} must be a number", key)),
        Some(n) if !bounds.contains(n) => {
            Some(format!("{} must be {}", key, bounds.describe_range()))
        }
        Some(_) => None,
    }
}
