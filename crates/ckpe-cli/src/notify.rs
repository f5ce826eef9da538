//! Terminal rendering of operation outcomes

use ckpe_core::{Notifier, Outcome, OutcomeStatus};
use colored::Colorize;

/// Prints outcomes: successes to stdout, problems to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, outcome: &Outcome) {
        match outcome.status {
            OutcomeStatus::Success => {
                println!("{} {}: {}", "OK".green().bold(), outcome.title, outcome.message)
            }
            OutcomeStatus::Invalid => {
                eprintln!("{} {}: {}", "WARN".yellow().bold(), outcome.title, outcome.message)
            }
            OutcomeStatus::Failure => {
                eprintln!("{} {}: {}", "ERROR".red().bold(), outcome.title, outcome.message)
            }
        }
    }
}
