//! Implementation of the `stackenv export` command.

use super::load_over_defaults;
use crate::cli::ExportArgs;
use crate::context::StackContext;
use crate::error::Result;
use crate::export::{export_to_file, render};

/// Execute the `stackenv export` command.
///
/// Writes to `--output` (relative to the working directory) or stdout.
pub fn cmd_export(ctx: &StackContext, args: ExportArgs) -> Result<()> {
    let path = ctx.document_path(args.file.as_deref());
    let document = load_over_defaults(ctx, &path)?;

    match &args.output {
        Some(output) => {
            let output = ctx.cwd.join(output);
            export_to_file(&document, args.format, &output)?;
            println!("Exported {} as {} to {}", path.display(), args.format, output.display());
        }
        None => print!("{}", render(&document, args.format)?),
    }

    Ok(())
}
