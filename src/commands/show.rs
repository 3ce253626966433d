//! Implementation of the `stackenv show` command.
//!
//! Prints the document in `.env` form, optionally narrowed to one section
//! or to the values that differ from the defaults.

use super::load_over_defaults;
use crate::cli::ShowArgs;
use crate::codec;
use crate::context::StackContext;
use crate::document::{ConfigDocument, FieldValues};
use crate::error::Result;

/// Execute the `stackenv show` command.
pub fn cmd_show(ctx: &StackContext, args: ShowArgs) -> Result<()> {
    let path = ctx.document_path(args.file.as_deref());
    let document = load_over_defaults(ctx, &path)?;

    let mut view = match &args.section {
        Some(name) => {
            let section = ctx.catalog.section(name)?;
            let mut single = ConfigDocument::new();
            if let Some(values) = document.section(section.name()) {
                single.insert_section(section.name(), values.clone());
            }
            single
        }
        None => document,
    };

    if args.changed {
        view = changed_values(&view, &ctx.catalog.defaults());
        if view.is_empty() {
            println!("No values differ from the defaults.");
            return Ok(());
        }
    }

    print!("{}", codec::encode(&view)?);
    Ok(())
}

/// Entries of `document` whose value differs from `defaults`.
///
/// Sections left without entries are omitted.
pub(crate) fn changed_values(document: &ConfigDocument, defaults: &ConfigDocument) -> ConfigDocument {
    let mut changed = ConfigDocument::new();

    for (name, values) in document.iter() {
        let differing: FieldValues = values
            .iter()
            .filter(|(key, value)| defaults.get(name, key) != Some(*value))
            .collect();
        if !differing.is_empty() {
            changed.insert_section(name, differing);
        }
    }

    changed
}
