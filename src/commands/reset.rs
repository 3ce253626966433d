//! Implementation of the `stackenv reset` command.

use super::{load_or_defaults, report_dropped, save};
use crate::cli::ResetArgs;
use crate::context::StackContext;
use crate::error::Result;

/// Execute the `stackenv reset` command.
///
/// With `--section`, only that section goes back to its defaults and the
/// others keep their values. Without it the whole document is rewritten
/// from defaults.
pub fn cmd_reset(ctx: &StackContext, args: ResetArgs) -> Result<()> {
    let path = ctx.document_path(args.file.as_deref());

    match &args.section {
        Some(name) => {
            let section = ctx.catalog.section(name)?;
            let overlay = load_or_defaults(ctx, &path)?;
            let mut document = overlay.document;
            document.insert_section(section.name(), section.defaults());
            save(ctx, &path, &document)?;

            println!("Reset section {} in {}", section.name(), path.display());
            report_dropped(&path, &overlay.dropped);
        }
        None => {
            save(ctx, &path, &ctx.catalog.defaults())?;
            println!("Reset all sections in {}", path.display());
        }
    }

    Ok(())
}
