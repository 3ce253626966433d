use super::HTTP_URL;
use crate::error::Result;
use crate::field::FieldDescriptor;
use crate::registry::Section;

const LOCALES: [&str; 10] = ["en", "fr", "de", "es", "nl", "kr", "cn", "ru", "it", "ja"];

pub(super) fn section() -> Result<Section> {
    let mut section = Section::new("Atlas").titled(
        "Atlas GUI Configuration",
        "Feature flags and presentation settings of the Atlas web client",
    );

    section.register_all([
        FieldDescriptor::text("ATLAS_INSTANCE_NAME", "Broadsea")
            .describe("Name of the Atlas instance"),
        FieldDescriptor::boolean("ATLAS_COHORT_COMPARISON_RESULTS_ENABLED", "false")
            .describe("Enable cohort comparison results"),
        FieldDescriptor::boolean("ATLAS_USER_AUTH_ENABLED", "false")
            .describe("Enable user authentication (fill in the Security section too)"),
        FieldDescriptor::boolean("ATLAS_PLP_RESULTS_ENABLED", "false")
            .describe("Enable Patient Level Prediction results"),
        FieldDescriptor::boolean("ATLAS_USE_EXECUTION_ENGINE", "false")
            .describe("Enable the execution engine for the Estimation module"),
        FieldDescriptor::boolean("ATLAS_DISABLE_BROWSER_CHECK", "false")
            .describe("Disable the browser compatibility warning"),
        FieldDescriptor::boolean("ATLAS_ENABLE_TAGGING_SECTION", "false")
            .describe("Show the Tagging module in navigation"),
        FieldDescriptor::boolean("ATLAS_CACHE_SOURCES", "false").describe("Enable source caching"),
        FieldDescriptor::integer("ATLAS_POLL_INTERVAL", "60000", 1000, 3_600_000)
            .unit("milliseconds")
            .describe("Polling interval"),
        FieldDescriptor::boolean("ATLAS_ENABLE_SKIP_LOGIN", "false")
            .describe("Enable the skip login option"),
        FieldDescriptor::boolean("ATLAS_VIEW_PROFILE_DATES", "false")
            .describe("Show dates in person profiles"),
        FieldDescriptor::boolean("ATLAS_ENABLE_COSTS", "false")
            .describe("Enable cost analysis features"),
        FieldDescriptor::text("ATLAS_SUPPORT_URL", "https://github.com/ohdsi/atlas/issues")
            .describe("Support URL")
            .pattern(HTTP_URL)?,
        FieldDescriptor::text("ATLAS_SUPPORT_MAIL", "atlasadmin@your.org")
            .describe("Support email address")
            .pattern(r"[^@\s]+@[^@\s]+\.[^@\s]+")?,
        FieldDescriptor::choice("ATLAS_DEFAULT_LOCALE", "en", &LOCALES)
            .describe("Default language"),
        FieldDescriptor::boolean("ATLAS_ENABLE_PERSON_COUNT", "true")
            .describe("Show person counts"),
        FieldDescriptor::boolean("ATLAS_ENABLE_TERMS_AND_CONDITIONS", "true")
            .describe("Ask users to accept terms and conditions"),
        FieldDescriptor::json("ATLAS_CONFIG", "{}")
            .describe("Extra client settings as a JSON object"),
    ])?;

    Ok(section)
}
