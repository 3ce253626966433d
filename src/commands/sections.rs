//! Implementation of the `stackenv sections` command.
//!
//! Describes the selected sections: every field with its kind, default,
//! description and constraints, followed by any key that more than one
//! section registers.

use crate::cli::SectionsArgs;
use crate::context::StackContext;
use crate::error::Result;
use crate::field::FieldDescriptor;
use crate::registry::{Catalog, Section};

/// Execute the `stackenv sections` command.
pub fn cmd_sections(ctx: &StackContext, args: SectionsArgs) -> Result<()> {
    print!("{}", describe_catalog(&ctx.catalog, args.section.as_deref())?);
    Ok(())
}

/// Render the catalog, or only the section called `only`.
pub(crate) fn describe_catalog(catalog: &Catalog, only: Option<&str>) -> Result<String> {
    let mut out = String::new();

    match only {
        Some(name) => describe_section(&mut out, catalog.section(name)?),
        None => {
            for section in catalog.sections() {
                describe_section(&mut out, section);
            }

            let collisions = catalog.key_collisions();
            if collisions.is_empty() {
                out.push_str("No key collisions.\n");
            } else {
                out.push_str(&format!("Key collisions ({}):\n", collisions.len()));
                for collision in collisions {
                    out.push_str(&format!(
                        "  {}: {}\n",
                        collision.key,
                        collision.sections.join(", ")
                    ));
                }
            }
        }
    }

    Ok(out)
}

fn describe_section(out: &mut String, section: &Section) {
    if section.title() == section.name() {
        out.push_str(&format!("{}\n", section.name()));
    } else {
        out.push_str(&format!("{}: {}\n", section.name(), section.title()));
    }
    out.push_str(&"=".repeat(80));
    out.push('\n');
    if !section.description().is_empty() {
        out.push_str(&format!("{}\n", section.description()));
    }
    out.push('\n');

    for field in section.fields() {
        describe_field(out, field);
    }

    if !section.rules().is_empty() {
        let names: Vec<&str> = section.rules().iter().map(|r| r.name()).collect();
        out.push_str(&format!("  Rules: {}\n", names.join(", ")));
    }
    out.push('\n');
}

fn describe_field(out: &mut String, field: &FieldDescriptor) {
    out.push_str(&format!(
        "  {} ({}, default \"{}\")\n",
        field.key(),
        field.kind(),
        field.default_value()
    ));

    if !field.description().is_empty() {
        out.push_str(&format!("      {}\n", field.description()));
    }

    let mut notes = Vec::new();
    if !field.is_required() {
        notes.push("optional".to_string());
    }
    if field.is_secret() {
        notes.push("secret".to_string());
    }
    if !field.options().is_empty() {
        notes.push(format!("one of: {}", field.options().join(", ")));
    }
    if let Some(bounds) = field.bounds() {
        notes.push(bounds.describe_range());
    }
    if let Some(pattern) = field.pattern_rule() {
        notes.push(format!("pattern: {}", pattern.source()));
    }
    if let Some(dependency) = field.dependency() {
        notes.push(format!("when {}={}", dependency.key, dependency.value));
    }
    if !notes.is_empty() {
        out.push_str(&format!("      [{}]\n", notes.join("; ")));
    }
}
