//! CLI argument parsing for stackenv.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Stackenv: schema-driven editor and validator for sectioned `.env` files.
///
/// A deployment stack is configured through one `.env` file split into
/// sections (Host, Atlas, WebAPI, ...). Every key belongs to a typed field
/// with a default, and documents are validated against those fields.
#[derive(Parser, Debug)]
#[command(name = "stackenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Tool config file (default: ./stackenv.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for stackenv.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a document holding every default value.
    ///
    /// Refuses to overwrite an existing file unless `--force` is given.
    Init(InitArgs),

    /// Validate a document.
    ///
    /// The file is loaded over the defaults and every section is checked.
    /// Exits with status 2 when issues are found.
    Validate(ValidateArgs),

    /// Print a document.
    Show(ShowArgs),

    /// Set one value and save the document.
    ///
    /// Issues in the edited section are printed as warnings.
    Set(SetArgs),

    /// Reset a section (or every section) to its defaults.
    Reset(ResetArgs),

    /// Export a document as JSON or YAML.
    Export(ExportArgs),

    /// Describe the sections and fields of the catalog.
    Sections(SectionsArgs),
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Document to create (default: `env_file` from config).
    pub file: Option<PathBuf>,

    /// Overwrite an existing document.
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Document to validate (default: `env_file` from config).
    pub file: Option<PathBuf>,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Document to show (default: `env_file` from config).
    pub file: Option<PathBuf>,

    /// Only show this section.
    #[arg(short, long)]
    pub section: Option<String>,

    /// Only show values that differ from the defaults.
    #[arg(long)]
    pub changed: bool,
}

/// Arguments for the `set` command.
#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Section holding the field (e.g., Host).
    pub section: String,

    /// Field key (e.g., HOST_PORT).
    pub key: String,

    /// New value. May be empty.
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Document to edit (default: `env_file` from config).
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the `reset` command.
#[derive(Parser, Debug)]
pub struct ResetArgs {
    /// Document to edit (default: `env_file` from config).
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Only reset this section.
    #[arg(short, long)]
    pub section: Option<String>,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Document to export (default: `env_file` from config).
    pub file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `sections` command.
#[derive(Parser, Debug)]
pub struct SectionsArgs {
    /// Only describe this section.
    #[arg(short, long)]
    pub section: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
