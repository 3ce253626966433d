use crate::document::FieldValues;
use crate::error::Result;
use crate::field::FieldDescriptor;
use crate::registry::Section;

pub(super) fn section() -> Result<Section> {
    let mut section = Section::new("Monitoring").titled(
        "Monitoring and Logging Configuration",
        "Logging, metrics, tracing and usage analytics",
    );

    section.register_all([
        FieldDescriptor::choice("LOG_LEVEL", "INFO", &["DEBUG", "INFO", "WARN", "ERROR"])
            .case_insensitive()
            .describe("Application-wide logging level"),
        FieldDescriptor::choice("LOG_FORMAT", "json", &["json", "text", "csv"])
            .describe("Log output format"),
        FieldDescriptor::file_path("LOG_PATH", "./logs").describe("Folder for log files"),
        FieldDescriptor::integer("LOG_RETENTION_DAYS", "30", 1, 365)
            .unit("days")
            .describe("How long to keep logs"),
        FieldDescriptor::integer("LOG_MAX_SIZE", "100", 1, 1000)
            .unit("MB")
            .describe("Maximum size of one log file"),
        FieldDescriptor::boolean("ENABLE_METRICS", "true").describe("Expose Prometheus metrics"),
        FieldDescriptor::integer("METRICS_PORT", "9090", 1024, 65535)
            .describe("Prometheus metrics port")
            .depends_on("ENABLE_METRICS", "true"),
        FieldDescriptor::boolean("ENABLE_HEALTH_CHECK", "true")
            .describe("Expose a health check endpoint"),
        FieldDescriptor::text("HEALTH_CHECK_PATH", "/health")
            .describe("Health check endpoint path")
            .pattern(r"/\S*")?
            .depends_on("ENABLE_HEALTH_CHECK", "true"),
        FieldDescriptor::boolean("ENABLE_TRACING", "false")
            .describe("Enable distributed tracing"),
        FieldDescriptor::decimal("TRACING_SAMPLE_RATE", "0.1", 0.0, 1.0)
            .describe("Fraction of requests traced")
            .depends_on("ENABLE_TRACING", "true"),
        FieldDescriptor::boolean("ENABLE_USAGE_STATS", "true")
            .describe("Collect usage statistics"),
        FieldDescriptor::file_path("ANALYTICS_DB_PATH", "./analytics/db")
            .describe("Usage statistics database")
            .depends_on("ENABLE_USAGE_STATS", "true"),
        FieldDescriptor::integer("ANALYTICS_RETENTION_MONTHS", "12", 1, 60)
            .unit("months")
            .describe("How long to keep usage statistics"),
        FieldDescriptor::text("MONITORING_ALERT_EMAIL", "")
            .describe("Address that receives alerts")
            .optional(),
        FieldDescriptor::text("MONITORING_ALERT_SLACK", "")
            .describe("Slack webhook that receives alerts")
            .optional()
            .pattern(r"https://hooks\.slack\.com/\S+")?,
    ])?;

    section.add_rule("alert-email", alert_email);
    Ok(section)
}

fn alert_email(values: &FieldValues) -> Vec<String> {
    let email = values.resolved("MONITORING_ALERT_EMAIL");
    if email.is_empty() || (email.contains('@') && email.contains('.')) {
        return Vec::new();
    }
    vec!["MONITORING_ALERT_EMAIL must be a valid email address".to_string()]
}
