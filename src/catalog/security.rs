//! Authentication providers for Atlas and WebAPI.
//!
//! Exactly one provider is selected with `ATLAS_SECURITY_PROVIDER_TYPE`.
//! Each provider has its own `SECURITY_AUTH_<P>_ENABLED` switch and a few
//! settings that must be filled in once it is switched on.

use crate::document::FieldValues;
use crate::error::Result;
use crate::field::FieldDescriptor;
use crate::registry::Section;
use crate::validate::rules::{equals, is_enabled, require_all};

const PROVIDERS: [&str; 9] = [
    "none", "ad", "ldap", "kerberos", "openid", "cas", "oauth", "iap", "db",
];

/// Provider -> (enable switch, settings required while enabled).
const PROVIDER_SETTINGS: [(&str, &str, &[&str]); 8] = [
    ("db", "SECURITY_AUTH_JDBC_ENABLED", &["SECURITY_DB_DATASOURCE_SCHEMA"]),
    ("ldap", "SECURITY_AUTH_LDAP_ENABLED", &["SECURITY_LDAP_URL"]),
    ("ad", "SECURITY_AUTH_AD_ENABLED", &["SECURITY_AD_URL"]),
    ("oauth", "SECURITY_AUTH_OAUTH_ENABLED", &["SECURITY_OAUTH_CALLBACK_UI"]),
    ("openid", "SECURITY_AUTH_OPENID_ENABLED", &[]),
    ("kerberos", "SECURITY_AUTH_KERBEROS_ENABLED", &[]),
    ("cas", "SECURITY_AUTH_CAS_ENABLED", &[]),
    ("iap", "SECURITY_AUTH_GOOGLEIAP_ENABLED", &[]),
];

const OAUTH_CREDENTIALS: [&str; 3] = [
    "SECURITY_OAUTH_CLIENT_ID",
    "SECURITY_OAUTH_CLIENT_SECRET",
    "SECURITY_OAUTH_CALLBACK_UI",
];

const SSL_SETTINGS: [&str; 2] = ["SECURITY_SSL_KEYSTORE", "SECURITY_SSL_KEYSTORE_PASSWORD"];

pub(super) fn section() -> Result<Section> {
    let mut section = Section::new("Security").titled(
        "Security Configuration",
        "Authentication and authorization settings",
    );

    section.register_all([
        FieldDescriptor::choice("ATLAS_SECURITY_PROVIDER_TYPE", "none", &PROVIDERS)
            .describe("Security provider type")
            .case_insensitive(),
        FieldDescriptor::text("ATLAS_SECURITY_PROVIDER_NAME", "none")
            .describe("Provider name shown in Atlas"),
        FieldDescriptor::text("ATLAS_SECURITY_ICON", "fa-cubes")
            .describe("Font Awesome icon for the provider"),
        FieldDescriptor::boolean("ATLAS_SECURITY_USE_FORM", "false")
            .describe("Use form-based login"),
        FieldDescriptor::choice(
            "WEBAPI_SECURITY_PROVIDER",
            "DisabledSecurity",
            &["DisabledSecurity", "AtlasRegularSecurity"],
        )
        .describe("WebAPI security provider"),
        FieldDescriptor::integer("SECURITY_TOKEN_EXPIRATION", "28800", 60, 2_592_000)
            .unit("seconds")
            .describe("Security token lifetime"),
        // Database
        FieldDescriptor::boolean("SECURITY_AUTH_JDBC_ENABLED", "false")
            .describe("Enable database authentication"),
        FieldDescriptor::text("SECURITY_DB_DATASOURCE_SCHEMA", "webapi_security")
            .describe("Security database schema")
            .depends_on("SECURITY_AUTH_JDBC_ENABLED", "true"),
        // LDAP
        FieldDescriptor::boolean("SECURITY_AUTH_LDAP_ENABLED", "false")
            .describe("Enable LDAP authentication"),
        FieldDescriptor::text("SECURITY_LDAP_URL", "ldap://broadsea-openldap:1389")
            .describe("LDAP server URL")
            .pattern(r"ldaps?://[\w\-.]+:\d+")?
            .depends_on("SECURITY_AUTH_LDAP_ENABLED", "true"),
        // Active Directory
        FieldDescriptor::boolean("SECURITY_AUTH_AD_ENABLED", "false")
            .describe("Enable Active Directory authentication"),
        FieldDescriptor::text("SECURITY_AD_URL", "")
            .describe("Active Directory server URL")
            .optional()
            .pattern(r"ldaps?://[\w\-.]+(:\d+)?")?
            .depends_on("SECURITY_AUTH_AD_ENABLED", "true"),
        // OAuth
        FieldDescriptor::boolean("SECURITY_AUTH_OAUTH_ENABLED", "false")
            .describe("Enable OAuth authentication"),
        FieldDescriptor::text("SECURITY_OAUTH_CLIENT_ID", "")
            .describe("OAuth client id")
            .optional(),
        FieldDescriptor::secret("SECURITY_OAUTH_CLIENT_SECRET", "")
            .describe("OAuth client secret"),
        FieldDescriptor::text("SECURITY_OAUTH_CALLBACK_UI", "http://localhost/Atlas/#/welcome")
            .describe("OAuth callback URL of the Atlas UI")
            .optional()
            .pattern(r"https?://[\w\-.]+(:\d+)?/\S*")?,
        // Other providers
        FieldDescriptor::boolean("SECURITY_AUTH_OPENID_ENABLED", "false")
            .describe("Enable OpenID authentication"),
        FieldDescriptor::boolean("SECURITY_AUTH_KERBEROS_ENABLED", "false")
            .describe("Enable Kerberos authentication"),
        FieldDescriptor::boolean("SECURITY_AUTH_CAS_ENABLED", "false")
            .describe("Enable CAS authentication"),
        FieldDescriptor::boolean("SECURITY_AUTH_GOOGLEIAP_ENABLED", "false")
            .describe("Enable Google Identity-Aware Proxy"),
        // SSL
        FieldDescriptor::boolean("SECURITY_SSL_ENABLED", "false").describe("Serve WebAPI over SSL"),
        FieldDescriptor::file_path("SECURITY_SSL_KEYSTORE", "")
            .describe("Keystore holding the SSL certificate")
            .optional()
            .depends_on("SECURITY_SSL_ENABLED", "true"),
        FieldDescriptor::secret("SECURITY_SSL_KEYSTORE_PASSWORD", "")
            .describe("Keystore password"),
    ])?;

    section.add_rule("oauth-credentials", oauth_credentials);
    section.add_rule("provider-settings", provider_settings);
    section.add_rule("ssl-keystore", ssl_keystore);
    Ok(section)
}

fn oauth_credentials(values: &FieldValues) -> Vec<String> {
    if !equals(values, "ATLAS_SECURITY_PROVIDER_TYPE", "oauth") {
        return Vec::new();
    }
    require_all(values, &OAUTH_CREDENTIALS, "when using OAuth")
}

/// The selected provider's settings, once its switch is on.
fn provider_settings(values: &FieldValues) -> Vec<String> {
    let provider = values.resolved("ATLAS_SECURITY_PROVIDER_TYPE").to_ascii_lowercase();

    PROVIDER_SETTINGS
        .iter()
        .filter(|(name, switch, _)| *name == provider && is_enabled(values, switch))
        .flat_map(|(name, _, keys)| {
            require_all(values, keys, &format!("when {} is enabled", name))
        })
        .collect()
}

fn ssl_keystore(values: &FieldValues) -> Vec<String> {
    if !is_enabled(values, "SECURITY_SSL_ENABLED") {
        return Vec::new();
    }
    require_all(values, &SSL_SETTINGS, "when SSL is enabled")
}
