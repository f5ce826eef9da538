//! CKPE Config Editor CLI
//!
//! Views and edits CreationKitPlatformExtended.ini while keeping its comments
//! and layout intact.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod notify;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, ConfigAction};
use context::Context;
use error::Result;
use notify::TerminalNotifier;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.file, cli.config_dir),
        None => {
            println!("{} CKPE Config Editor", "ckpe".green().bold());
            println!();
            println!("Run {} for available commands.", "ckpe --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, file: Option<PathBuf>, config_dir: Option<PathBuf>) -> Result<()> {
    let notifier = TerminalNotifier;
    // Settings are only resolved for commands that touch a file.
    let context = move || Context::new(file, config_dir);

    match cmd {
        Commands::Show { section, json } => commands::run_show(&context()?, section.as_deref(), json),
        Commands::Get { section, key, json } => commands::run_get(&context()?, &section, &key, json),
        Commands::Set {
            section,
            key,
            value,
            dry_run,
        } => commands::run_set(&context()?, &notifier, &section, &key, &value, dry_run),
        Commands::Add {
            section,
            key,
            value,
            dry_run,
        } => commands::run_add(&context()?, &notifier, &section, &key, &value, dry_run),
        Commands::Edit => interactive::run_edit(&context()?, &notifier),
        Commands::Choices { table } => {
            commands::run_choices(table);
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => commands::run_config_show(&context()?, json),
            ConfigAction::Set {
                default_file,
                line_ending,
            } => commands::run_config_set(
                &context()?,
                &notifier,
                default_file,
                line_ending.map(Into::into),
            ),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "ckpe", &mut std::io::stdout());
            Ok(())
        }
    }
}
