//! `config` command: the editor's own settings

use std::path::PathBuf;

use ckpe_core::{LineEndingSetting, Notifier, Outcome};
use colored::Colorize;
use serde_json::json;

use crate::context::Context;
use crate::error::Result;

/// Run `config show`
pub fn run_config_show(ctx: &Context, json: bool) -> Result<()> {
    let global = ctx.resolver.global_settings_path();
    let local = ctx.resolver.local_settings_path();

    if json {
        let output = json!({
            "settings": ctx.settings,
            "target_file": ctx.file.display().to_string(),
            "global_settings": global.as_ref().map(|p| p.to_string()),
            "local_settings": local.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let source = |exists: bool| {
        if exists {
            "loaded".green()
        } else {
            "not found".dimmed()
        }
    };

    println!("{}", "Settings".bold());
    println!();
    println!("{}: {}", "Expected file".dimmed(), ctx.settings.expected_file_name);
    println!("{}: {:?}", "Line ending".dimmed(), ctx.settings.line_ending);
    match &ctx.settings.default_file {
        Some(path) => println!("{}: {}", "Default file".dimmed(), path.display()),
        None => println!("{}: {}", "Default file".dimmed(), "(none)".dimmed()),
    }
    println!("{}: {}", "Target file".dimmed(), ctx.file.display().to_string().cyan());
    println!();
    if let Some(path) = &global {
        println!("{}: {} ({})", "Global".dimmed(), path, source(path.is_file()));
    }
    println!("{}: {} ({})", "Local".dimmed(), local, source(local.is_file()));
    Ok(())
}

/// Run `config set`, updating only the given fields of the global settings
pub fn run_config_set(
    ctx: &Context,
    notifier: &dyn Notifier,
    default_file: Option<PathBuf>,
    line_ending: Option<LineEndingSetting>,
) -> Result<()> {
    if default_file.is_none() && line_ending.is_none() {
        println!("{}", "Nothing to change.".dimmed());
        return Ok(());
    }

    let mut layer = ctx.resolver.global_layer()?;
    if let Some(file) = default_file {
        let file = if file.is_relative() {
            std::env::current_dir()?.join(file)
        } else {
            file
        };
        layer.default_file = Some(file);
    }
    if let Some(ending) = line_ending {
        layer.line_ending = Some(ending);
    }

    let path = ctx.resolver.save_global(&layer)?;
    notifier.notify(&Outcome::success("Settings saved", path.to_string()));
    Ok(())
}
