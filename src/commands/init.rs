//! Implementation of the `stackenv init` command.
//!
//! Writes a document holding every default of the selected sections.

use super::save;
use crate::cli::InitArgs;
use crate::context::StackContext;
use crate::error::{EnvError, Result};

/// Execute the `stackenv init` command.
///
/// An existing document is only overwritten with `--force`.
pub fn cmd_init(ctx: &StackContext, args: InitArgs) -> Result<()> {
    let path = ctx.document_path(args.file.as_deref());

    if path.exists() && !args.force {
        return Err(EnvError::UserError(format!(
            "'{}' already exists.\n\n\
             Use `stackenv init --force` to overwrite it with the defaults.",
            path.display()
        )));
    }

    let document = ctx.catalog.defaults();
    save(ctx, &path, &document)?;

    println!(
        "Created {} with defaults for {} section(s).",
        path.display(),
        document.len()
    );
    Ok(())
}
