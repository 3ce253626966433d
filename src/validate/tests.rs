//! Tests for the validation engine.

use super::rules::{equals, is_enabled, require_all};
use super::*;
use crate::document::{ConfigDocument, FieldValues};
use crate::field::FieldDescriptor;
use crate::registry::{Catalog, Section};
use tempfile::TempDir;

fn section_with(fields: Vec<FieldDescriptor>) -> Section {
    let mut section = Section::new("Test");
    section.register_all(fields).unwrap();
    section
}

fn values(pairs: &[(&str, &str)]) -> FieldValues {
    pairs.iter().copied().collect()
}

// ============================================================================
// Required check
// ============================================================================

#[test]
fn test_empty_required_field_reports_exactly_one_issue() {
    let section = section_with(vec![FieldDescriptor::port("HOST_PORT", "8080")]);

    let issues = validate_section(&section, &values(&[("HOST_PORT", "")]));

    assert_eq!(issues, vec!["HOST_PORT is required"]);
}

#[test]
fn test_missing_key_counts_as_empty() {
    let section = section_with(vec![FieldDescriptor::text("BROADSEA_HOST", "127.0.0.1")]);

    let issues = validate_section(&section, &FieldValues::new());

    assert_eq!(issues, vec!["BROADSEA_HOST is required"]);
}

#[test]
fn test_whitespace_only_value_counts_as_empty() {
    let section = section_with(vec![FieldDescriptor::text("BROADSEA_HOST", "127.0.0.1")]);

    let issues = validate_section(&section, &values(&[("BROADSEA_HOST", "   ")]));

    assert_eq!(issues, vec!["BROADSEA_HOST is required"]);
}

#[test]
fn test_optional_field_may_be_empty() {
    let section = section_with(vec![FieldDescriptor::text("CDM_SCHEMA", "").optional()]);

    assert!(validate_section(&section, &values(&[("CDM_SCHEMA", "")])).is_empty());
}

#[test]
fn test_secret_fields_are_exempt_from_required() {
    let section = section_with(vec![
        FieldDescriptor::secret("WEBAPI_DATASOURCE_PASSWORD", ""),
        FieldDescriptor::file_path("GITHUB_PAT_SECRET_FILE", "").secret_value(),
    ]);

    assert!(validate_section(&section, &FieldValues::new()).is_empty());
}

// ============================================================================
// Range check
// ============================================================================

#[test]
fn test_port_out_of_range() {
    let section = section_with(vec![FieldDescriptor::port("HOST_PORT", "8080")]);

    let issues = validate_section(&section, &values(&[("HOST_PORT", "70000")]));

    assert_eq!(issues, vec!["HOST_PORT must be between 0 and 65535"]);
}

#[test]
fn test_range_bounds_are_inclusive() {
    let section = section_with(vec![FieldDescriptor::integer("RETRIES", "3", 1, 10)]);

    for (value, ok) in [("0", false), ("1", true), ("10", true), ("11", false)] {
        let issues = validate_section(&section, &values(&[("RETRIES", value)]));
        assert_eq!(issues.is_empty(), ok, "value {}", value);
        if !ok {
            assert_eq!(issues, vec!["RETRIES must be between 1 and 10"]);
        }
    }
}

#[test]
fn test_range_not_a_number() {
    let section = section_with(vec![FieldDescriptor::port("HOST_PORT", "8080")]);

    for value in ["abc", "80.5", "1e3"] {
        let issues = validate_section(&section, &values(&[("HOST_PORT", value)]));
        assert_eq!(issues, vec!["HOST_PORT must be a number"], "value {}", value);
    }
}

#[test]
fn test_range_message_includes_unit() {
    let section = section_with(vec![
        FieldDescriptor::integer("RETENTION", "30", 1, 365).unit("days"),
    ]);

    let issues = validate_section(&section, &values(&[("RETENTION", "400")]));

    assert_eq!(issues, vec!["RETENTION must be between 1 and 365 days"]);
}

#[test]
fn test_decimal_range_accepts_fractions() {
    let section = section_with(vec![FieldDescriptor::decimal("THRESHOLD", "0.5", 0.0, 1.0)]);

    assert!(validate_section(&section, &values(&[("THRESHOLD", "0.75")])).is_empty());

    let issues = validate_section(&section, &values(&[("THRESHOLD", "1.5")]));
    assert_eq!(issues, vec!["THRESHOLD must be between 0.0 and 1.0"]);

    let issues = validate_section(&section, &values(&[("THRESHOLD", "NaN")]));
    assert_eq!(issues, vec!["THRESHOLD must be a number"]);
}

#[test]
fn test_range_value_is_trimmed() {
    let section = section_with(vec![FieldDescriptor::port("HOST_PORT", "8080")]);

    assert!(validate_section(&section, &values(&[("HOST_PORT", " 443 ")])).is_empty());
}

// ============================================================================
// Domain check
// ============================================================================

#[test]
fn test_enum_rejects_value_outside_options() {
    let section = section_with(vec![FieldDescriptor::choice(
        "HTTP_TYPE",
        "http",
        &["http", "https"],
    )]);

    let issues = validate_section(&section, &values(&[("HTTP_TYPE", "ftp")]));

    assert_eq!(issues, vec!["HTTP_TYPE must be one of: http, https"]);
}

#[test]
fn test_enum_accepts_every_option() {
    let options = ["none", "ldap", "oauth"];
    let section = section_with(vec![FieldDescriptor::choice("PROVIDER", "none", &options)]);

    for option in options {
        assert!(validate_section(&section, &values(&[("PROVIDER", option)])).is_empty());
    }
}

#[test]
fn test_enum_is_case_sensitive_by_default() {
    let section = section_with(vec![FieldDescriptor::choice(
        "HTTP_TYPE",
        "http",
        &["http", "https"],
    )]);

    assert_eq!(
        validate_section(&section, &values(&[("HTTP_TYPE", "HTTPS")])).len(),
        1
    );
}

#[test]
fn test_case_insensitive_enum() {
    let section = section_with(vec![
        FieldDescriptor::choice("HTTP_TYPE", "http", &["http", "https"]).case_insensitive(),
    ]);

    assert!(validate_section(&section, &values(&[("HTTP_TYPE", "HTTPS")])).is_empty());
}

#[test]
fn test_boolean_is_case_insensitive() {
    let section = section_with(vec![FieldDescriptor::boolean("SECURITY_SSL_ENABLED", "false")]);

    assert!(validate_section(&section, &values(&[("SECURITY_SSL_ENABLED", "TRUE")])).is_empty());

    let issues = validate_section(&section, &values(&[("SECURITY_SSL_ENABLED", "yes")]));
    assert_eq!(issues, vec!["SECURITY_SSL_ENABLED must be one of: true, false"]);
}

// ============================================================================
// Format checks
// ============================================================================

#[test]
fn test_pattern_must_match_whole_value() {
    let section = section_with(vec![
        FieldDescriptor::text("DATASOURCE_KEY", "my_cdm")
            .pattern(r"[A-Za-z0-9_]+")
            .unwrap(),
    ]);

    assert!(validate_section(&section, &values(&[("DATASOURCE_KEY", "my_cdm")])).is_empty());

    let issues = validate_section(&section, &values(&[("DATASOURCE_KEY", "my cdm!")]));
    assert_eq!(issues, vec!["DATASOURCE_KEY has invalid format"]);
}

#[test]
fn test_pattern_skipped_for_empty_optional_value() {
    let section = section_with(vec![
        FieldDescriptor::text("SOLR_VOCAB_ENDPOINT", "")
            .optional()
            .pattern(r"https?://\S+")
            .unwrap(),
    ]);

    assert!(validate_section(&section, &FieldValues::new()).is_empty());
}

#[test]
fn test_json_field_must_parse() {
    let section = section_with(vec![FieldDescriptor::json("CUSTOM_CONFIG", "{}")]);

    assert!(
        validate_section(&section, &values(&[("CUSTOM_CONFIG", r#"{"a": [1, 2]}"#)])).is_empty()
    );

    let issues = validate_section(&section, &values(&[("CUSTOM_CONFIG", "{a: 1")]));
    assert_eq!(issues, vec!["CUSTOM_CONFIG must be valid JSON"]);
}

// ============================================================================
// Dependency gating
// ============================================================================

fn ldap_section() -> Section {
    section_with(vec![
        FieldDescriptor::boolean("SECURITY_AUTH_LDAP_ENABLED", "false"),
        FieldDescriptor::text("SECURITY_LDAP_URL", "ldap://ldap:389")
            .pattern(r"ldaps?://[\w\-\.]+:\d+")
            .unwrap()
            .depends_on("SECURITY_AUTH_LDAP_ENABLED", "true"),
        FieldDescriptor::port("SECURITY_LDAP_PORT", "389")
            .depends_on("SECURITY_AUTH_LDAP_ENABLED", "true"),
    ])
}

#[test]
fn test_inactive_field_skips_format_checks() {
    let section = ldap_section();
    let vals = values(&[
        ("SECURITY_AUTH_LDAP_ENABLED", "false"),
        ("SECURITY_LDAP_URL", "not a url"),
        ("SECURITY_LDAP_PORT", "99999"),
    ]);

    assert!(validate_section(&section, &vals).is_empty());
}

#[test]
fn test_active_field_is_checked() {
    let section = ldap_section();
    let vals = values(&[
        ("SECURITY_AUTH_LDAP_ENABLED", "true"),
        ("SECURITY_LDAP_URL", "not a url"),
        ("SECURITY_LDAP_PORT", "99999"),
    ]);

    assert_eq!(
        validate_section(&section, &vals),
        vec![
            "SECURITY_LDAP_URL has invalid format",
            "SECURITY_LDAP_PORT must be between 0 and 65535",
        ]
    );
}

#[test]
fn test_dependency_match_ignores_case() {
    let section = ldap_section();
    let vals = values(&[
        ("SECURITY_AUTH_LDAP_ENABLED", "True"),
        ("SECURITY_LDAP_URL", "bad"),
        ("SECURITY_LDAP_PORT", "389"),
    ]);

    assert_eq!(
        validate_section(&section, &vals),
        vec!["SECURITY_LDAP_URL has invalid format"]
    );
}

#[test]
fn test_required_check_ignores_dependency() {
    let section = ldap_section();
    let vals = values(&[("SECURITY_AUTH_LDAP_ENABLED", "false")]);

    assert_eq!(
        validate_section(&section, &vals),
        vec!["SECURITY_LDAP_URL is required", "SECURITY_LDAP_PORT is required"]
    );
}

// ============================================================================
// Cross-field rules
// ============================================================================

fn oauth_rule(values: &FieldValues) -> Vec<String> {
    if !equals(values, "AUTH_PROVIDER", "oauth") {
        return Vec::new();
    }
    require_all(values, &["CLIENT_ID", "CLIENT_SECRET"], "when using OAuth")
}

fn oauth_section() -> Section {
    let mut section = section_with(vec![
        FieldDescriptor::choice("AUTH_PROVIDER", "none", &["none", "oauth"]),
        FieldDescriptor::text("CLIENT_ID", "").optional(),
        FieldDescriptor::secret("CLIENT_SECRET", ""),
    ]);
    section.add_rule("oauth-credentials", oauth_rule);
    section
}

#[test]
fn test_rule_reports_missing_oauth_client_id() {
    let section = oauth_section();
    let vals = values(&[
        ("AUTH_PROVIDER", "oauth"),
        ("CLIENT_ID", ""),
        ("CLIENT_SECRET", "s3cret"),
    ]);

    assert_eq!(
        validate_section(&section, &vals),
        vec!["CLIENT_ID is required when using OAuth"]
    );
}

#[test]
fn test_rule_silent_when_condition_off() {
    let section = oauth_section();

    assert!(validate_section(&section, &values(&[("AUTH_PROVIDER", "none")])).is_empty());
}

#[test]
fn test_rule_issues_follow_field_issues_in_order() {
    let mut section = oauth_section();
    section.add_rule("always", |_| vec!["second rule".to_string()]);
    let vals = values(&[("AUTH_PROVIDER", "saml")]);

    assert_eq!(
        validate_section(&section, &vals),
        vec![
            "AUTH_PROVIDER must be one of: none, oauth",
            "second rule",
        ]
    );
}

#[test]
fn test_rule_helpers() {
    let vals = values(&[("FLAG", " TRUE "), ("MODE", "OAuth")]);

    assert!(is_enabled(&vals, "FLAG"));
    assert!(!is_enabled(&vals, "MISSING"));
    assert!(equals(&vals, "MODE", "oauth"));
    assert_eq!(
        require_all(&vals, &["FLAG", "A", "B"], "when X"),
        vec!["A is required when X", "B is required when X"]
    );
}

// ============================================================================
// Isolation and purity
// ============================================================================

#[test]
fn test_each_field_reports_independently() {
    let section = section_with(vec![
        FieldDescriptor::port("HOST_PORT", "8080"),
        FieldDescriptor::choice("HTTP_TYPE", "http", &["http", "https"]),
        FieldDescriptor::text("BROADSEA_HOST", "127.0.0.1"),
    ]);
    let vals = values(&[("HOST_PORT", "x"), ("HTTP_TYPE", "ftp")]);

    assert_eq!(
        validate_section(&section, &vals),
        vec![
            "HOST_PORT must be a number",
            "HTTP_TYPE must be one of: http, https",
            "BROADSEA_HOST is required",
        ]
    );
}

#[test]
fn test_validation_is_deterministic_and_pure() {
    let section = oauth_section();
    let vals = values(&[("AUTH_PROVIDER", "oauth")]);
    let before = vals.clone();

    let first = validate_section(&section, &vals);
    let second = validate_section(&section, &vals);

    assert_eq!(first, second);
    assert_eq!(vals, before);
}

#[test]
fn test_defaults_pass_for_valid_descriptors() {
    let section = ldap_section();

    assert!(validate_section(&section, &section.defaults()).is_empty());
}

// ============================================================================
// Document reports
// ============================================================================

fn two_section_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    let mut host = Section::new("Host");
    host.register(FieldDescriptor::port("HOST_PORT", "8080")).unwrap();
    catalog.push(host).unwrap();
    catalog.push(oauth_section()).unwrap();
    catalog
}

#[test]
fn test_document_report_groups_by_section() {
    let catalog = two_section_catalog();
    let mut doc = catalog.defaults();
    doc.set("Host", "HOST_PORT", "70000");
    doc.set("Test", "AUTH_PROVIDER", "oauth");

    let report = validate_document(&catalog, &doc, None);

    assert!(!report.passed());
    assert_eq!(report.issue_count(), 3);
    assert_eq!(
        report.issues(),
        vec![
            "Host: HOST_PORT must be between 0 and 65535",
            "Test: CLIENT_ID is required when using OAuth",
            "Test: CLIENT_SECRET is required when using OAuth",
        ]
    );
    assert!(report.format_error().starts_with("The following issues were found:"));
    assert!(report.format_error().contains("  Host: HOST_PORT"));
}

#[test]
fn test_document_missing_section_validates_as_empty() {
    let catalog = two_section_catalog();

    let report = validate_document(&catalog, &ConfigDocument::new(), None);

    assert_eq!(report.sections.len(), 2);
    assert_eq!(report.sections[0].issues, vec!["HOST_PORT is required"]);
}

#[test]
fn test_document_defaults_pass() {
    let catalog = two_section_catalog();

    let report = validate_document(&catalog, &catalog.defaults(), None);

    assert!(report.passed());
    assert_eq!(report.format_error(), "");
}

// ============================================================================
// File path checks
// ============================================================================

fn path_section() -> Section {
    section_with(vec![
        FieldDescriptor::choice("HTTP_TYPE", "http", &["http", "https"]),
        FieldDescriptor::file_path("BROADSEA_CERTS_FOLDER", "./certs/ca.crt")
            .depends_on("HTTP_TYPE", "https"),
        FieldDescriptor::file_path("GITHUB_PAT_SECRET_FILE", "").secret_value(),
    ])
}

#[test]
fn test_file_path_parent_must_exist() {
    let temp = TempDir::new().unwrap();
    let section = path_section();
    let vals = values(&[
        ("HTTP_TYPE", "https"),
        ("BROADSEA_CERTS_FOLDER", "./certs/ca.crt"),
        ("GITHUB_PAT_SECRET_FILE", "secrets/pat.txt"),
    ]);

    let issues = check_file_paths(&section, &vals, temp.path());

    assert_eq!(
        issues,
        vec![
            "Directory for BROADSEA_CERTS_FOLDER does not exist: ./certs",
            "Directory for GITHUB_PAT_SECRET_FILE does not exist: secrets",
        ]
    );

    std::fs::create_dir_all(temp.path().join("certs")).unwrap();
    std::fs::create_dir_all(temp.path().join("secrets")).unwrap();
    assert!(check_file_paths(&section, &vals, temp.path()).is_empty());
}

#[test]
fn test_file_path_check_skips_inactive_and_bare_names() {
    let temp = TempDir::new().unwrap();
    let section = path_section();
    let vals = values(&[
        ("HTTP_TYPE", "http"),
        ("BROADSEA_CERTS_FOLDER", "./missing/ca.crt"),
        ("GITHUB_PAT_SECRET_FILE", "pat.txt"),
    ]);

    assert!(check_file_paths(&section, &vals, temp.path()).is_empty());
}

#[test]
fn test_document_report_includes_path_issues_when_requested() {
    let temp = TempDir::new().unwrap();
    let mut catalog = Catalog::new();
    catalog.push(path_section()).unwrap();
    let mut doc = catalog.defaults();
    doc.set("Test", "HTTP_TYPE", "https");

    assert!(validate_document(&catalog, &doc, None).passed());

    let report = validate_document(&catalog, &doc, Some(temp.path()));
    assert_eq!(
        report.issues(),
        vec!["Test: Directory for BROADSEA_CERTS_FOLDER does not exist: ./certs"]
    );
}
