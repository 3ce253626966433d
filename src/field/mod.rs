//! Field descriptors.
//!
//! A `FieldDescriptor` is the immutable metadata for one configuration key:
//! its default, whether it is required, its value domain, an optional format
//! pattern and an optional dependency on another field of the same section.
//! Descriptors are built with a constructor per kind plus chained modifiers:
//!
//! ```ignore
//! let port = FieldDescriptor::port("HOST_PORT", "8080").describe("Host port");
//! let url = FieldDescriptor::text("SECURITY_LDAP_URL", "ldap://ldap:1389")
//!     .pattern(r"ldaps?://[\w\-\.]+:\d+")?
//!     .depends_on("SECURITY_AUTH_LDAP_ENABLED", "true");
//! ```
//!
//! Invariants are checked when the descriptor is registered in a section
//! (see [`FieldDescriptor::check`]), not at construction time.

mod kind;


pub use kind::{Dependency, FieldKind, NumericBounds};

use crate::error::{EnvError, Result};
use regex::Regex;

/// The options every boolean field accepts.
pub const BOOLEAN_OPTIONS: [&str; 2] = ["true", "false"];

/// Highest valid TCP/UDP port.
pub const MAX_PORT: f64 = 65535.0;

/// A compiled validation pattern that must match the whole value.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    source: String,
    regex: Regex,
}

impl FieldPattern {
    /// Compile `source` anchored at both ends.
    fn compile(key: &str, source: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{})$", source)).map_err(|e| EnvError::InvalidField {
            key: key.to_string(),
            reason: format!("invalid pattern '{}': {}", source, e),
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The pattern as written in the section table.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether `value` matches the pattern in full.
    pub fn is_full_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl PartialEq for FieldPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// Immutable metadata for one configuration key.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    key: String,
    default: String,
    description: String,
    required: bool,
    kind: FieldKind,
    options: Vec<String>,
    case_insensitive: bool,
    bounds: Option<NumericBounds>,
    pattern: Option<FieldPattern>,
    depends_on: Option<Dependency>,
    secret: bool,
}

impl FieldDescriptor {
    fn new(key: impl Into<String>, default: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            default: default.into(),
            description: String::new(),
            required: true,
            kind,
            options: Vec::new(),
            case_insensitive: false,
            bounds: None,
            pattern: None,
            depends_on: None,
            secret: false,
        }
    }

    /// Free-form text field.
    pub fn text(key: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(key, default, FieldKind::Text)
    }

    /// Secret value (password, token). Exempt from the required check.
    pub fn secret(key: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(key, default, FieldKind::Secret)
    }

    /// `true`/`false` flag, matched case-insensitively.
    pub fn boolean(key: impl Into<String>, default: impl Into<String>) -> Self {
        let mut field = Self::new(key, default, FieldKind::Boolean);
        field.options = BOOLEAN_OPTIONS.iter().map(|s| s.to_string()).collect();
        field.case_insensitive = true;
        field
    }

    /// One value out of a fixed, ordered set of options.
    pub fn choice(key: impl Into<String>, default: impl Into<String>, options: &[&str]) -> Self {
        let mut field = Self::new(key, default, FieldKind::Enum);
        field.options = options.iter().map(|s| s.to_string()).collect();
        field
    }

    /// Whole number within `[min, max]`.
    pub fn integer(key: impl Into<String>, default: impl Into<String>, min: i64, max: i64) -> Self {
        let mut field = Self::new(key, default, FieldKind::NumericRange);
        field.bounds = Some(NumericBounds::integer(min as f64, max as f64));
        field
    }

    /// Number with an optional fractional part within `[min, max]`.
    pub fn decimal(key: impl Into<String>, default: impl Into<String>, min: f64, max: f64) -> Self {
        let mut field = Self::new(key, default, FieldKind::NumericRange);
        field.bounds = Some(NumericBounds::decimal(min, max));
        field
    }

    /// Port number within `[0, 65535]`.
    pub fn port(key: impl Into<String>, default: impl Into<String>) -> Self {
        Self::integer(key, default, 0, MAX_PORT as i64)
    }

    /// Percentage within `[0, 100]`.
    pub fn percentage(key: impl Into<String>, default: impl Into<String>) -> Self {
        Self::integer(key, default, 0, 100).unit("percent")
    }

    /// Filesystem path.
    pub fn file_path(key: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(key, default, FieldKind::FilePath)
    }

    /// Structured JSON payload stored as a single line.
    pub fn json(key: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(key, default, FieldKind::Json)
    }

    /// Set the human-readable description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Allow the value to be left empty.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Mark the value as secret without changing its kind.
    pub fn secret_value(mut self) -> Self {
        self.secret = true;
        self
    }

    /// Compare options ignoring ASCII case.
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Unit appended to range messages (`days`, `seconds`, ...).
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        if let Some(bounds) = self.bounds.as_mut() {
            bounds.unit = Some(unit.into());
        }
        self
    }

    /// Activate checks only while `key` holds `value`.
    pub fn depends_on(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.depends_on = Some(Dependency {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Require the whole value to match `source`.
    ///
    /// Fails with `InvalidField` if the pattern does not compile.
    pub fn pattern(mut self, source: &str) -> Result<Self> {
        self.pattern = Some(FieldPattern::compile(&self.key, source)?);
        Ok(self)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn bounds(&self) -> Option<&NumericBounds> {
        self.bounds.as_ref()
    }

    pub fn pattern_rule(&self) -> Option<&FieldPattern> {
        self.pattern.as_ref()
    }

    pub fn dependency(&self) -> Option<&Dependency> {
        self.depends_on.as_ref()
    }

    /// Secret kind or an explicitly secret value of another kind.
    pub fn is_secret(&self) -> bool {
        self.secret || self.kind == FieldKind::Secret
    }

    /// Whether `value` is one of this field's options.
    pub fn accepts_option(&self, value: &str) -> bool {
        self.options.iter().any(|option| {
            if self.case_insensitive {
                option.eq_ignore_ascii_case(value)
            } else {
                option == value
            }
        })
    }

    /// Check the descriptor invariants.
    ///
    /// - the key is non-empty and contains no `=` or whitespace
    /// - option-based kinds have options and a default among them
    /// - numeric kinds have finite bounds with `min <= max`
    pub fn check(&self) -> Result<()> {
        let invalid = |reason: String| EnvError::InvalidField {
            key: self.key.clone(),
            reason,
        };

        if self.key.is_empty() {
            return Err(invalid("key must not be empty".to_string()));
        }
        if self.key.contains('=') || self.key.chars().any(char::is_whitespace) {
            return Err(invalid(
                "key must not contain '=' or whitespace".to_string(),
            ));
        }

        if matches!(self.kind, FieldKind::Enum | FieldKind::Boolean) {
            if self.options.is_empty() {
                return Err(invalid("options must not be empty".to_string()));
            }
            if !self.accepts_option(&self.default) {
                return Err(invalid(format!(
                    "default '{}' is not one of: {}",
                    self.default,
                    self.options.join(", ")
                )));
            }
        }

        if self.kind == FieldKind::NumericRange {
            let Some(bounds) = &self.bounds else {
                return Err(invalid("numeric range has no bounds".to_string()));
            };
            if !bounds.min.is_finite() || !bounds.max.is_finite() || bounds.min > bounds.max {
                return Err(invalid(format!(
                    "invalid bounds [{}, {}]",
                    bounds.min, bounds.max
                )));
            }
        }

        if let Some(dep) = &self.depends_on
            && dep.key == self.key
        {
            return Err(invalid("field cannot depend on itself".to_string()));
        }

        Ok(())
    }
}
