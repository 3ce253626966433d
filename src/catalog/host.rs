use crate::document::FieldValues;
use crate::error::Result;
use crate::field::FieldDescriptor;
use crate::registry::Section;
use crate::validate::rules::{equals, require_all};

pub(super) fn section() -> Result<Section> {
    let mut section = Section::new("Host").titled(
        "Broadsea Host Configuration",
        "Basic host settings for the Broadsea proxy",
    );

    section.register_all([
        FieldDescriptor::choice("DOCKER_ARCH", "linux/amd64", &["linux/amd64", "linux/arm64"])
            .describe("Docker architecture (linux/arm64 for Mac Silicon)"),
        FieldDescriptor::text("BROADSEA_HOST", "127.0.0.1")
            .describe("Host name or address without the protocol"),
        FieldDescriptor::port("HOST_PORT", "8080").describe("Port the proxy listens on"),
        FieldDescriptor::choice("HTTP_TYPE", "http", &["http", "https"])
            .describe("Protocol served by the proxy")
            .case_insensitive(),
        FieldDescriptor::file_path("BROADSEA_CERTS_FOLDER", "./certs")
            .describe("Folder holding the TLS certificate and key")
            .optional()
            .depends_on("HTTP_TYPE", "https"),
        FieldDescriptor::file_path("GITHUB_PAT_SECRET_FILE", "./secrets/github_pat")
            .describe("File holding the GitHub personal access token")
            .secret_value(),
    ])?;

    section.add_rule("https-certificates", https_certificates);
    Ok(section)
}

fn https_certificates(values: &FieldValues) -> Vec<String> {
    if !equals(values, "HTTP_TYPE", "https") {
        return Vec::new();
    }
    require_all(values, &["BROADSEA_CERTS_FOLDER"], "when using https")
}
