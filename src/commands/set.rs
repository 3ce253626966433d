//! Implementation of the `stackenv set` command.

use super::{load_or_defaults, report_dropped, save};
use crate::cli::SetArgs;
use crate::codec::has_line_break;
use crate::context::StackContext;
use crate::error::{EnvError, Result};
use crate::validate::{check_file_paths, validate_section};

/// Execute the `stackenv set` command.
///
/// The section and key must exist in the catalog, and the value must fit on
/// one line. The document is saved even when the new value is invalid; the
/// section's issues are then printed as warnings so they can be fixed with
/// another `set`.
pub fn cmd_set(ctx: &StackContext, args: SetArgs) -> Result<()> {
    let section = ctx.catalog.section(&args.section)?;
    let field = section.find(&args.key)?;

    if has_line_break(&args.value) {
        return Err(EnvError::UserError(format!(
            "value for {}.{} must not contain a line break",
            section.name(),
            field.key()
        )));
    }

    let path = ctx.document_path(args.file.as_deref());
    let overlay = load_or_defaults(ctx, &path)?;
    let mut document = overlay.document;

    document.set(section.name(), field.key(), args.value.as_str());
    save(ctx, &path, &document)?;

    println!("Set {}.{} in {}", section.name(), field.key(), path.display());
    report_dropped(&path, &overlay.dropped);

    let values = document.section(section.name()).cloned().unwrap_or_default();
    let mut issues = validate_section(section, &values);
    if let Some(base) = ctx.path_base() {
        issues.extend(check_file_paths(section, &values, base));
    }
    for issue in &issues {
        eprintln!("Warning: {}: {}", section.name(), issue);
    }

    Ok(())
}
