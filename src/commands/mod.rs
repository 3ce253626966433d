//! Command implementations for stackenv.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the load/save steps every document command shares.

mod export;
mod init;
mod reset;
mod sections;
mod set;
mod show;
mod validate_cmd;


use crate::cli::Command;
use crate::codec;
use crate::context::StackContext;
use crate::document::ConfigDocument;
use crate::error::Result;
use crate::registry::Overlay;
use log::info;
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. The context is
/// resolved once from the working directory and `--config`.
pub fn dispatch(config: Option<&Path>, command: Command) -> Result<()> {
    let ctx = StackContext::resolve(config)?;

    match command {
        Command::Init(args) => init::cmd_init(&ctx, args),
        Command::Validate(args) => validate_cmd::cmd_validate(&ctx, args),
        Command::Show(args) => show::cmd_show(&ctx, args),
        Command::Set(args) => set::cmd_set(&ctx, args),
        Command::Reset(args) => reset::cmd_reset(&ctx, args),
        Command::Export(args) => export::cmd_export(&ctx, args),
        Command::Sections(args) => sections::cmd_sections(&ctx, args),
    }
}

// ============================================================================
// Shared document steps
// ============================================================================

/// Read `path` and load it over the catalog defaults.
///
/// Sections and keys the catalog does not define are dropped (and logged).
fn load_over_defaults(ctx: &StackContext, path: &Path) -> Result<ConfigDocument> {
    Ok(load_overlay(ctx, path)?.document)
}

fn load_overlay(ctx: &StackContext, path: &Path) -> Result<Overlay> {
    let loaded = codec::read_document(path)?;
    Ok(ctx.catalog.overlay(&loaded))
}

/// Like [`load_overlay`], but a missing file yields the defaults.
fn load_or_defaults(ctx: &StackContext, path: &Path) -> Result<Overlay> {
    if path.exists() {
        load_overlay(ctx, path)
    } else {
        info!("{} does not exist, starting from defaults", path.display());
        Ok(Overlay {
            document: ctx.catalog.defaults(),
            dropped: Vec::new(),
        })
    }
}

/// Tell the user which entries a rewrite of `path` left out.
fn report_dropped(path: &Path, dropped: &[String]) {
    if let Some(summary) = dropped_summary(dropped) {
        println!("Removed {} from {}", summary, path.display());
    }
}

/// `2 unknown entries: Host.LEGACY, Retired`, or `None` when nothing was dropped.
fn dropped_summary(dropped: &[String]) -> Option<String> {
    if dropped.is_empty() {
        return None;
    }
    Some(format!(
        "{} unknown entr{}: {}",
        dropped.len(),
        if dropped.len() == 1 { "y" } else { "ies" },
        dropped.join(", ")
    ))
}

/// Write `document` to `path`, with field descriptions when configured.
fn save(ctx: &StackContext, path: &Path, document: &ConfigDocument) -> Result<()> {
    let descriptions = ctx.config.write_descriptions.then_some(&ctx.catalog);
    codec::write_document(path, document, descriptions)
}
