use crate::document::FieldValues;
use crate::error::Result;
use crate::field::FieldDescriptor;
use crate::registry::Section;

pub(super) fn section() -> Result<Section> {
    let mut section = Section::new("DataSource").titled(
        "Data Source Configuration",
        "OMOP CDM connection, schemas and vocabulary loading",
    );

    section.register_all([
        FieldDescriptor::text("DATASOURCE_KEY", "OHDSI")
            .describe("Source key used in WebAPI URLs"),
        FieldDescriptor::text("CDM_SOURCE_NAME", "OHDSI CDM Source")
            .describe("Name of the CDM source"),
        FieldDescriptor::choice("CDM_VERSION", "5.3", &["5.3", "5.4"]).describe("CDM version"),
        FieldDescriptor::choice(
            "CDM_CONNECTIONDETAILS_DBMS",
            "postgresql",
            &["postgresql", "oracle", "sqlserver", "redshift", "snowflake"],
        )
        .describe("Database management system"),
        FieldDescriptor::text("CDM_CONNECTIONDETAILS_SERVER", "broadsea-atlasdb/postgres")
            .describe("Database server, as host/database"),
        FieldDescriptor::integer("CDM_CONNECTIONDETAILS_PORT", "5432", 1, 65535)
            .describe("Database port"),
        FieldDescriptor::text("CDM_CONNECTIONDETAILS_USER", "postgres")
            .describe("Database username"),
        FieldDescriptor::file_path(
            "CDM_CONNECTIONDETAILS_PASSWORD_FILE",
            "./secrets/cdm/CDM_PASSWORD",
        )
        .describe("File holding the database password")
        .secret_value(),
        FieldDescriptor::text("CDM_DATABASE_SCHEMA", "demo_cdm").describe("CDM schema"),
        FieldDescriptor::text("RESULTS_DATABASE_SCHEMA", "demo_cdm_results")
            .describe("Results schema"),
        FieldDescriptor::text("TEMP_DATABASE_SCHEMA", "temp").describe("Scratch schema"),
        FieldDescriptor::text("VOCAB_DATABASE_SCHEMA", "demo_cdm").describe("Vocabulary schema"),
        FieldDescriptor::json("DATASOURCE_ADVANCED_OPTIONS", "{}")
            .describe("Extra connection options as a JSON object"),
        FieldDescriptor::text("VOCAB_PG_HOST", "broadsea-atlasdb")
            .describe("Vocabulary database host, without the database name"),
        FieldDescriptor::text("VOCAB_PG_DATABASE", "postgres").describe("Vocabulary database"),
        FieldDescriptor::text("VOCAB_PG_SCHEMA", "omop_vocab").describe("Vocabulary load schema"),
        FieldDescriptor::text("VOCAB_PG_USER", "postgres")
            .describe("Vocabulary database username"),
        FieldDescriptor::file_path(
            "VOCAB_PG_PASSWORD_FILE",
            "./secrets/omop_vocab/VOCAB_PG_PASSWORD",
        )
        .describe("File holding the vocabulary database password")
        .secret_value(),
        FieldDescriptor::file_path("VOCAB_PG_FILES_PATH", "./omop_vocab/files")
            .describe("Folder with the vocabulary files downloaded from Athena"),
        FieldDescriptor::file_path("UMLS_API_KEY_FILE", "./secrets/omop_vocab/UMLS_API_KEY")
            .describe("UMLS API key file, needed for CPT4 conversion")
            .secret_value(),
    ])?;

    section.add_rule("datasource-key", datasource_key);
    Ok(section)
}

fn datasource_key(values: &FieldValues) -> Vec<String> {
    let key = values.resolved("DATASOURCE_KEY");
    if key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Vec::new();
    }
    vec!["DATASOURCE_KEY must contain only letters, numbers, and underscores".to_string()]
}
