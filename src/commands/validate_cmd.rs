//! Implementation of the `stackenv validate` command.
//!
//! Loads the document over the defaults and runs every field check and
//! cross-field rule of the selected sections. File-path fields are checked
//! against the filesystem when `check_paths` is enabled.

use super::load_over_defaults;
use crate::cli::ValidateArgs;
use crate::context::StackContext;
use crate::error::{EnvError, Result};
use crate::validate::validate_document;

/// Execute the `stackenv validate` command.
///
/// Returns `ValidationError` (exit code 2) listing every issue when the
/// document does not pass.
pub fn cmd_validate(ctx: &StackContext, args: ValidateArgs) -> Result<()> {
    let path = ctx.document_path(args.file.as_deref());
    let document = load_over_defaults(ctx, &path)?;

    let report = validate_document(&ctx.catalog, &document, ctx.path_base());

    if !report.passed() {
        return Err(EnvError::ValidationError(report.format_error()));
    }

    println!(
        "{}: no issues found ({} section(s) checked).",
        path.display(),
        report.sections.len()
    );
    Ok(())
}
