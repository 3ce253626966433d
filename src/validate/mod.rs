//! Validation module for stackenv.
//!
//! Validation never fails: every problem with user-supplied values is
//! collected as a human-readable issue string so that the caller can show
//! the full list at once.
//! - Engine: per-field required, domain, range, pattern and JSON checks plus
//!   the section's cross-field rules
//! - Rules: helpers for writing cross-field predicates
//! - Paths: optional check that file-path values point into existing directories
//! - Report: whole-document results grouped by section

pub mod engine;
pub mod paths;
pub mod report;
pub mod rules;

#[cfg(test)]
mod tests;

pub use engine::{validate_document, validate_section};
pub use paths::check_file_paths;
pub use report::{DocumentReport, SectionReport};
