//! Read-only `show` and `get` commands

use ckpe_ini::{Entry, IniDocument, Section, classify};
use colored::Colorize;
use serde_json::{Value, json};

use crate::context::Context;
use crate::error::{CliError, Result};

/// Run the show command
pub fn run_show(ctx: &Context, section: Option<&str>, json: bool) -> Result<()> {
    let session = ctx.open()?;
    let document = session
        .document()
        .ok_or_else(|| CliError::user("No document loaded"))?;
    let sections = select_sections(document, section)?;

    if json {
        let output = json!({
            "file": ctx.file.display().to_string(),
            "sections": sections.iter().map(|s| section_json(s)).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", "File:".dimmed(), ctx.file.display());
    for section in sections {
        println!();
        print_tooltip(section.tooltip.as_deref(), "");
        println!("{}", format!("[{}]", section.name).bold());
        if section.entries.is_empty() {
            println!("  {}", "(no entries)".dimmed());
        }
        for entry in &section.entries {
            print_tooltip(entry.tooltip.as_deref(), "  ");
            let kind = classify(&section.name, &entry.name, &entry.value);
            println!(
                "  {} = {}  {}",
                entry.name.cyan(),
                entry.value,
                format!("<{kind}>").dimmed()
            );
        }
    }
    Ok(())
}

/// Run the get command
pub fn run_get(ctx: &Context, section: &str, key: &str, json: bool) -> Result<()> {
    let session = ctx.open()?;
    let document = session
        .document()
        .ok_or_else(|| CliError::user("No document loaded"))?;
    let entry = document.entry(section, key).ok_or_else(|| {
        CliError::user(format!("Entry '{key}' not found in section [{section}]"))
    })?;

    if json {
        let mut output = entry_json(section, entry);
        output["section"] = json!(section);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", entry.value);
    }
    Ok(())
}

fn select_sections<'a>(document: &'a IniDocument, name: Option<&str>) -> Result<Vec<&'a Section>> {
    match name {
        Some(name) => document
            .section(name)
            .map(|s| vec![s])
            .ok_or_else(|| CliError::user(format!("Section [{name}] not found"))),
        None => Ok(document.sections().iter().collect()),
    }
}

fn print_tooltip(tooltip: Option<&str>, indent: &str) {
    if let Some(text) = tooltip {
        for line in text.lines() {
            println!("{indent}{}", format!("; {line}").dimmed());
        }
    }
}

fn section_json(section: &Section) -> Value {
    json!({
        "name": section.name,
        "tooltip": section.tooltip,
        "line": section.line_number,
        "entries": section
            .entries
            .iter()
            .map(|e| entry_json(&section.name, e))
            .collect::<Vec<_>>(),
    })
}

fn entry_json(section: &str, entry: &Entry) -> Value {
    json!({
        "name": entry.name,
        "value": entry.value,
        "tooltip": entry.tooltip,
        "inline_comment": entry.inline_comment,
        "line": entry.line_number,
        "widget": classify(section, &entry.name, &entry.value),
    })
}
