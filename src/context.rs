//! Working-directory context resolution for stackenv.
//!
//! Every command starts by resolving a `StackContext`: the directory it runs
//! in, the tool config that applies there, and the catalog sections that
//! config selects. Relative document paths resolve against the working
//! directory.

use crate::catalog;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{EnvError, Result};
use crate::registry::Catalog;
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

/// Resolved paths and settings for one command invocation.
#[derive(Debug, Clone)]
pub struct StackContext {
    /// Absolute working directory.
    pub cwd: PathBuf,

    /// Config file that was loaded, if any.
    pub config_path: Option<PathBuf>,

    /// Effective tool config (defaults when no file was found).
    pub config: Config,

    /// Sections selected by the config, in order.
    pub catalog: Catalog,
}

impl StackContext {
    /// Resolve the context from the current working directory.
    ///
    /// `config_override` is the `--config` argument; when absent,
    /// `stackenv.yaml` in the working directory is used if it exists.
    pub fn resolve(config_override: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            EnvError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd, config_override)
    }

    /// Resolve the context for a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P, config_override: Option<&Path>) -> Result<Self> {
        let cwd = cwd.as_ref().to_path_buf();

        let config_path = match config_override {
            Some(path) => {
                let path = cwd.join(path);
                if !path.is_file() {
                    return Err(EnvError::UserError(format!(
                        "config file '{}' does not exist",
                        path.display()
                    )));
                }
                Some(path)
            }
            None => Some(cwd.join(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
        };

        let config = match &config_path {
            Some(path) => {
                debug!("using config {}", path.display());
                Config::load(path)?
            }
            None => Config::default(),
        };

        let catalog = config.select(&catalog::builtin()?)?;

        Ok(Self {
            cwd,
            config_path,
            config,
            catalog,
        })
    }

    /// Document path for a command: `file` if given, else the configured
    /// `env_file`, resolved against the working directory.
    pub fn document_path(&self, file: Option<&Path>) -> PathBuf {
        match file {
            Some(path) => self.cwd.join(path),
            None => self.cwd.join(&self.config.env_file),
        }
    }

    /// Base directory for file-path checks, if they are enabled.
    pub fn path_base(&self) -> Option<&Path> {
        self.config.check_paths.then_some(self.cwd.as_path())
    }
}
