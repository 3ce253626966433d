use super::HTTP_URL;
use crate::document::FieldValues;
use crate::error::Result;
use crate::field::FieldDescriptor;
use crate::registry::Section;
use crate::validate::rules::{is_enabled, require_all};

const GITHUB_URL: &str = r"https://github\.com/[\w\-]+/[\w\-]+(\.git)?(#[\w.\-]+)?";

pub(super) fn section() -> Result<Section> {
    let mut section = Section::new("Build").titled(
        "Build and Deployment Configuration",
        "Building Atlas and WebAPI from Git instead of published images",
    );

    section.register_all([
        FieldDescriptor::boolean("ATLAS_BUILD_FROM_GIT", "false")
            .describe("Build Atlas from Git instead of the Docker Hub image"),
        FieldDescriptor::text("ATLAS_GITHUB_URL", "https://github.com/OHDSI/Atlas.git#master")
            .describe("Atlas repository URL with branch, tag or commit")
            .pattern(GITHUB_URL)?
            .depends_on("ATLAS_BUILD_FROM_GIT", "true"),
        FieldDescriptor::boolean("WEBAPI_BUILD_FROM_GIT", "false")
            .describe("Build WebAPI from Git instead of the Docker Hub image"),
        FieldDescriptor::text("WEBAPI_GITHUB_URL", "https://github.com/OHDSI/WebAPI.git#master")
            .describe("WebAPI repository URL with branch, tag or commit")
            .pattern(GITHUB_URL)?
            .depends_on("WEBAPI_BUILD_FROM_GIT", "true"),
        FieldDescriptor::choice(
            "WEBAPI_MAVEN_PROFILE",
            "webapi-docker",
            &["webapi-docker", "webapi-docker,webapi-solr"],
        )
        .describe("Maven profile for the WebAPI build"),
        FieldDescriptor::choice("DOCKER_COMPOSE_VERSION", "3.8", &["3.7", "3.8", "3.9"])
            .describe("Docker Compose file format version"),
        FieldDescriptor::text("SOLR_VOCAB_ENDPOINT", "")
            .describe("SOLR vocabulary endpoint, blank when SOLR is not used")
            .optional()
            .pattern(HTTP_URL)?,
        FieldDescriptor::text("SOLR_VOCAB_VERSION", "v5.0_23-JAN-23")
            .describe("SOLR vocabulary version (underscores instead of spaces)")
            .pattern(r"\S+")?,
        FieldDescriptor::choice(
            "BUILD_ENV",
            "production",
            &["development", "staging", "production"],
        )
        .describe("Build environment"),
        FieldDescriptor::boolean("ENABLE_DEBUG", "false").describe("Enable debug mode"),
    ])?;

    section.add_rule("git-https", git_https);
    section.add_rule("solr-endpoint", solr_endpoint);
    Ok(section)
}

/// Building from Git needs an `https://` repository URL.
fn git_https(values: &FieldValues) -> Vec<String> {
    [
        ("ATLAS_BUILD_FROM_GIT", "ATLAS_GITHUB_URL", "Atlas"),
        ("WEBAPI_BUILD_FROM_GIT", "WEBAPI_GITHUB_URL", "WebAPI"),
    ]
    .into_iter()
    .filter(|(switch, url, _)| {
        is_enabled(values, switch) && !values.resolved(url).starts_with("https://")
    })
    .map(|(_, url, service)| {
        format!("{} must be an https:// URL when building {} from Git", url, service)
    })
    .collect()
}

fn solr_endpoint(values: &FieldValues) -> Vec<String> {
    let profile = values.resolved("WEBAPI_MAVEN_PROFILE").to_ascii_lowercase();
    if !profile.contains("solr") {
        return Vec::new();
    }
    require_all(
        values,
        &["SOLR_VOCAB_ENDPOINT"],
        "when using the SOLR Maven profile",
    )
}
