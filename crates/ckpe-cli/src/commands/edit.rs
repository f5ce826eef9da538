//! Non-interactive `set` and `add` commands

use ckpe_core::Notifier;
use colored::Colorize;

use super::diff::{print_diff, save_and_report};
use crate::context::Context;
use crate::error::Result;

/// Run the set command
pub fn run_set(
    ctx: &Context,
    notifier: &dyn Notifier,
    section: &str,
    key: &str,
    value: &str,
    dry_run: bool,
) -> Result<()> {
    let mut session = ctx.open()?;
    let stored = session.set_value(section, key, value)?;
    tracing::debug!(section, key, %stored, "Value accepted");
    finish(&mut session, notifier, dry_run)
}

/// Run the add command
pub fn run_add(
    ctx: &Context,
    notifier: &dyn Notifier,
    section: &str,
    key: &str,
    value: &str,
    dry_run: bool,
) -> Result<()> {
    let mut session = ctx.open()?;
    if session
        .document()
        .and_then(|doc| doc.entry(section, key))
        .is_some()
    {
        println!(
            "{} [{}] already has '{}'; the new entry is written after it and '{}' edits the first",
            "NOTE".yellow().bold(),
            section,
            key,
            "ckpe set".cyan()
        );
    }
    session.add_entry(section, key, value)?;
    finish(&mut session, notifier, dry_run)
}

fn finish(
    session: &mut ckpe_core::EditorSession,
    notifier: &dyn Notifier,
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        print_diff(&session.preview()?);
        println!("{}", "[dry-run] No changes written.".dimmed());
        return Ok(());
    }

    if !session.is_modified() {
        println!("{}", "Value unchanged, nothing to save.".dimmed());
        return Ok(());
    }
    save_and_report(session, notifier)
}
