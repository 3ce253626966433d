//! Constants and serde default functions used by the Config struct.

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "stackenv.yaml";

/// Document path used when a command is not given one.
pub const DEFAULT_ENV_FILE: &str = ".env";

pub(crate) fn default_env_file() -> String {
    DEFAULT_ENV_FILE.to_string()
}
