//! Interactive editing session
//!
//! Uses dialoguer to pick a section and entry, then prompts with the control
//! that fits the entry's value.

use ckpe_core::{EditorSession, Notifier, Outcome};
use ckpe_ini::{Choice, WidgetKind};
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use crate::commands::diff::{print_diff, save_and_report};
use crate::context::Context;
use crate::error::{CliError, Result};

const FINISH: &str = "Finish";
const BACK: &str = "Back";

/// Run the edit command
pub fn run_edit(ctx: &Context, notifier: &dyn Notifier) -> Result<()> {
    let mut session = ctx.open()?;
    println!("{} {}", "Editing".bold(), ctx.file.display().to_string().cyan());
    println!();

    while let Some(section) = pick_section(&session)? {
        while let Some((key, kind, value)) = pick_entry(&session, &section)? {
            let input = prompt_value(&key, &kind, &value)?;
            match session.set_value(&section, &key, &input) {
                Ok(stored) if stored != value => {
                    println!("  {} {} = {}", "+".green(), key.cyan(), stored)
                }
                Ok(_) => {}
                Err(e) if e.is_validation() => notifier.notify(&Outcome::from_error(&e)),
                Err(e) => return Err(e.into()),
            }
        }
    }

    if !session.is_modified() {
        println!("{}", "No changes.".dimmed());
        return Ok(());
    }

    println!();
    println!("{}", "Pending changes:".bold());
    print_diff(&session.preview()?);
    println!();

    let save = Confirm::new()
        .with_prompt(format!("Save changes to {}?", ctx.file.display()))
        .default(true)
        .interact()?;
    if save {
        save_and_report(&mut session, notifier)
    } else {
        println!("{}", "Changes discarded.".yellow());
        Ok(())
    }
}

fn pick_section(session: &EditorSession) -> Result<Option<String>> {
    let document = session
        .document()
        .ok_or_else(|| CliError::user("No document loaded"))?;
    let mut items: Vec<String> = document.sections().iter().map(|s| s.name.clone()).collect();
    items.push(FINISH.to_string());

    let idx = Select::new()
        .with_prompt("Section")
        .items(&items)
        .default(0)
        .interact()?;
    Ok((idx + 1 < items.len()).then(|| items.swap_remove(idx)))
}

fn pick_entry(session: &EditorSession, section: &str) -> Result<Option<(String, WidgetKind, String)>> {
    let document = session
        .document()
        .ok_or_else(|| CliError::user("No document loaded"))?;
    let Some(found) = document.section(section) else {
        return Ok(None);
    };

    let mut items: Vec<String> = found
        .entries
        .iter()
        .map(|e| format!("{} = {}", e.name, e.value))
        .collect();
    items.push(BACK.to_string());

    let idx = Select::new()
        .with_prompt(format!("[{section}] entry"))
        .items(&items)
        .default(0)
        .interact()?;
    let Some(entry) = found.entries.get(idx) else {
        return Ok(None);
    };

    if let Some(tooltip) = &entry.tooltip {
        for line in tooltip.lines() {
            println!("  {}", line.dimmed());
        }
    }
    let kind = session.widget(section, &entry.name)?;
    Ok(Some((entry.name.clone(), kind, entry.value.clone())))
}

/// Ask for a new value using the control for `kind`.
fn prompt_value(key: &str, kind: &WidgetKind, current: &str) -> Result<String> {
    let value = match kind {
        WidgetKind::Checkbox { checked } => Confirm::new()
            .with_prompt(key)
            .default(*checked)
            .interact()?
            .to_string(),
        WidgetKind::Dropdown { table, selected } => {
            let choices = table.choices();
            let idx = Select::new()
                .with_prompt(format!("{key} ({table})"))
                .items(&choice_labels(choices))
                .default(default_index(choices, *selected))
                .interact()?;
            choices[idx].code.to_string()
        }
        WidgetKind::Stepper { min, max, value } => Input::<String>::new()
            .with_prompt(format!("{key} ({min}..={max})"))
            .default(value.to_string())
            .validate_with(|input: &String| validate(kind, key, input))
            .interact_text()?,
        WidgetKind::Text => Input::<String>::new()
            .with_prompt(key)
            .default(current.to_string())
            .allow_empty(true)
            .validate_with(|input: &String| validate(kind, key, input))
            .interact_text()?,
    };
    Ok(value)
}

fn validate(kind: &WidgetKind, key: &str, input: &str) -> std::result::Result<(), String> {
    kind.normalize(key, input).map(|_| ()).map_err(|e| e.to_string())
}

fn choice_labels(choices: &[Choice]) -> Vec<String> {
    choices
        .iter()
        .map(|c| format!("{} ({})", c.name, c.code))
        .collect()
}

fn default_index(choices: &[Choice], selected: Option<Choice>) -> usize {
    selected
        .and_then(|s| choices.iter().position(|c| *c == s))
        .unwrap_or(0)
}
