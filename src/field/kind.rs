//! Value domains and dependency conditions for field descriptors.

use serde::Serialize;
use std::fmt;

/// The value domain of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Free-form text.
    Text,
    /// Password or token; never required.
    Secret,
    /// `true` or `false`.
    Boolean,
    /// One of a fixed set of options.
    Enum,
    /// Number within inclusive bounds.
    NumericRange,
    /// Filesystem path.
    FilePath,
    /// JSON payload.
    Json,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "text",
            FieldKind::Secret => "secret",
            FieldKind::Boolean => "boolean",
            FieldKind::Enum => "enum",
            FieldKind::NumericRange => "numeric-range",
            FieldKind::FilePath => "file-path",
            FieldKind::Json => "json",
        };
        f.write_str(name)
    }
}

/// Inclusive numeric bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericBounds {
    pub min: f64,
    pub max: f64,
    /// Accept values with a fractional part (rates, ratios).
    pub allow_fraction: bool,
    /// Unit appended to range messages.
    pub unit: Option<String>,
}

impl NumericBounds {
    pub fn integer(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            allow_fraction: false,
            unit: None,
        }
    }

    pub fn decimal(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            allow_fraction: true,
            unit: None,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Render a bound the way range messages show it.
    ///
    /// Integer bounds print without a fractional part; fractional bounds
    /// always show at least one decimal (`0.0`, `0.25`).
    pub fn format_bound(&self, bound: f64) -> String {
        if !self.allow_fraction {
            format!("{}", bound as i64)
        } else if bound.fract() == 0.0 {
            format!("{:.1}", bound)
        } else {
            format!("{}", bound)
        }
    }

    /// `between <min> and <max>[ <unit>]`
    pub fn describe_range(&self) -> String {
        let mut text = format!(
            "between {} and {}",
            self.format_bound(self.min),
            self.format_bound(self.max)
        );
        if let Some(unit) = &self.unit {
            text.push(' ');
            text.push_str(unit);
        }
        text
    }
}

/// Activation condition: the field is checked only while `key` equals `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub key: String,
    pub value: String,
}

impl Dependency {
    /// Whether the condition holds for `current`.
    ///
    /// Values are compared as string literals after trimming, ignoring ASCII
    /// case so that `TRUE` activates a `true` dependency like the boolean
    /// domain check accepts it.
    pub fn is_satisfied_by(&self, current: &str) -> bool {
        current.trim().eq_ignore_ascii_case(self.value.trim())
    }
}
