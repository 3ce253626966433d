//! Validation results for whole documents.

/// Issues found in one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub section: String,
    pub issues: Vec<String>,
}

impl SectionReport {
    pub fn new(section: impl Into<String>, issues: Vec<String>) -> Self {
        Self {
            section: section.into(),
            issues,
        }
    }

    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Issues found in every validated section, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    pub sections: Vec<SectionReport>,
}

impl DocumentReport {
    pub fn new(sections: Vec<SectionReport>) -> Self {
        Self { sections }
    }

    /// Whether the document is acceptable for persistence.
    pub fn passed(&self) -> bool {
        self.sections.iter().all(SectionReport::passed)
    }

    pub fn issue_count(&self) -> usize {
        self.sections.iter().map(|s| s.issues.len()).sum()
    }

    /// Every issue prefixed with its section name (`Host: HOST_PORT ...`).
    pub fn issues(&self) -> Vec<String> {
        self.sections
            .iter()
            .flat_map(|s| s.issues.iter().map(move |i| format!("{}: {}", s.section, i)))
            .collect()
    }

    /// Format the report as a user-facing message.
    ///
    /// ```text
    /// The following issues were found:
    ///
    ///   Host: HOST_PORT must be between 0 and 65535
    ///   Security: SECURITY_OAUTH_CLIENT_ID is required when using OAuth
    /// ```
    pub fn format_error(&self) -> String {
        if self.passed() {
            return String::new();
        }

        let mut msg = String::from("The following issues were found:\n\n");
        for issue in self.issues() {
            msg.push_str("  ");
            msg.push_str(&issue);
            msg.push('\n');
        }
        msg
    }
}
