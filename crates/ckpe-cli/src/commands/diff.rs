//! Pending-change output shared by the editing commands

use ckpe_core::{EditorSession, Notifier, Outcome, SaveStatus};
use ckpe_ini::{ChangeKind, LineDiff};
use colored::Colorize;

use crate::error::Result;

/// Print the lines a save would change, with 1-based line numbers.
pub fn print_diff(diff: &LineDiff) {
    if diff.is_empty() {
        println!("{}", "No changes.".dimmed());
        return;
    }

    for change in &diff.changes {
        let line = format!("{:>5} {}", change.index + 1, change.line);
        match change.kind {
            ChangeKind::Removed => println!("{} {}", "-".red(), line.red()),
            ChangeKind::Added => println!("{} {}", "+".green(), line.green()),
        }
    }
}

/// Save the session and report the result.
pub fn save_and_report(session: &mut EditorSession, notifier: &dyn Notifier) -> Result<()> {
    match session.save()? {
        SaveStatus::Saved { path, lines } => notifier.notify(&Outcome::success(
            "Saved",
            format!("{path} ({lines} lines)"),
        )),
        SaveStatus::AlreadyInProgress => notifier.notify(&Outcome::failure(
            "Save Skipped",
            "another save is already in progress",
        )),
    }
    Ok(())
}
