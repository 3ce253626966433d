use super::LOG_LEVELS;
use crate::error::Result;
use crate::field::FieldDescriptor;
use crate::registry::Section;

pub(super) fn section() -> Result<Section> {
    let mut section = Section::new("WebAPI").titled(
        "WebAPI Configuration",
        "Database connection, logging and caching of the WebAPI service",
    );

    section.register_all([
        FieldDescriptor::boolean("FLYWAY_BASELINE_ON_MIGRATE", "true")
            .describe("Baseline Flyway migrations on a pre-filled WebAPI schema"),
        FieldDescriptor::choice("WEBAPI_LOGGING_LEVEL_ROOT", "info", &LOG_LEVELS)
            .describe("Root logging level"),
        FieldDescriptor::choice("WEBAPI_LOGGING_LEVEL_ORG_OHDSI", "info", &LOG_LEVELS)
            .describe("Logging level for OHDSI libraries"),
        FieldDescriptor::choice("WEBAPI_LOGGING_LEVEL_ORG_APACHE_SHIRO", "warn", &LOG_LEVELS)
            .describe("Logging level for the Shiro authentication library"),
        FieldDescriptor::text(
            "WEBAPI_DATASOURCE_URL",
            "jdbc:postgresql://broadsea-atlasdb:5432/postgres",
        )
        .describe("JDBC URL of the WebAPI database")
        .pattern(r"jdbc:(postgresql|mysql|sqlserver|oracle)://[\w\-.]+:\d+/[\w\-]+\S*")?,
        FieldDescriptor::text("WEBAPI_DATASOURCE_USERNAME", "postgres")
            .describe("Database username"),
        FieldDescriptor::file_path(
            "WEBAPI_DATASOURCE_PASSWORD_FILE",
            "./secrets/webapi/WEBAPI_DATASOURCE_PASSWORD",
        )
        .describe("File holding the database password")
        .secret_value(),
        FieldDescriptor::text("WEBAPI_DATASOURCE_OHDSI_SCHEMA", "webapi")
            .describe("OHDSI schema name"),
        FieldDescriptor::file_path("WEBAPI_ADDITIONAL_JDBC_FILE_PATH", "../jdbc/none.jar")
            .describe("Additional JDBC driver jar")
            .optional(),
        FieldDescriptor::file_path("WEBAPI_CACERTS_FILE", "../cacerts")
            .describe("Custom Java keystore")
            .optional(),
        FieldDescriptor::integer("CACHE_GENERATION_INVALIDAFTERDAYS", "30", -1, 3650)
            .unit("days")
            .describe("Days until cohort caches are invalidated (-1 disables)"),
        FieldDescriptor::integer("CACHE_GENERATION_CLEANUPINTERVAL", "3600000", 1000, 86_400_000)
            .unit("milliseconds")
            .describe("Cache cleanup interval"),
        FieldDescriptor::boolean("I18N_ENABLED", "true").describe("Enable multiple languages"),
        FieldDescriptor::text(
            "EXECUTIONENGINE_URL",
            "http://broadsea-arachne-execution-engine:8888/api/v1",
        )
        .describe("Arachne execution engine URL")
        .pattern(r"https?://[\w\-.]+:\d+/\S*")?,
        FieldDescriptor::json("WEBAPI_DATASOURCES_JSON", "[]")
            .describe("Additional data sources as a JSON array"),
        FieldDescriptor::file_path(
            "WEBAPI_CDM_SNOWFLAKE_PRIVATE_KEY_FILE",
            "./secrets/webapi/CDM_SNOWFLAKE_PRIVATE_KEY",
        )
        .describe("Snowflake private key file")
        .secret_value(),
    ])?;

    Ok(section)
}
