//! Filesystem checks for file-path fields.
//!
//! These depend on the machine the check runs on, so they are opt-in
//! (`check_paths` in the tool config) and kept out of the pure engine.

use super::engine::is_active;
use crate::document::FieldValues;
use crate::field::FieldKind;
use crate::registry::Section;
use std::path::Path;

/// Check that every active, non-empty file-path value points into an
/// existing directory. Relative paths resolve against `base`.
pub fn check_file_paths(section: &Section, values: &FieldValues, base: &Path) -> Vec<String> {
    let mut issues = Vec::new();

    for field in section.fields() {
        if field.kind() != FieldKind::FilePath {
            continue;
        }

        let value = values.resolved(field.key());
        if value.is_empty() || !is_active(field, values) {
            continue;
        }

        let parent = match Path::new(value).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => continue,
        };

        if !base.join(parent).is_dir() {
            issues.push(format!(
                "Directory for {} does not exist: {}",
                field.key(),
                parent.display()
            ));
        }
    }

    issues
}
