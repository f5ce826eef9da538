//! Line-oriented INI parser.
//!
//! A single forward pass over the lines of a file. Section headers look like
//! `[name]`, entries like `key = value ; inline comment`, and comment lines
//! start with `;`. Comment lines directly above a header or entry (blank lines
//! in between are allowed) become that item's tooltip.
//!
//! The parser is permissive: anything that is not a header, an entry, a
//! comment, or blank is ignored, and so is an entry that appears before the
//! first section header.

use crate::model::{Entry, Section};

/// Result of a parse: the section model plus the unmodified source lines.
///
/// The lines are kept because the writer patches them by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIni {
    pub sections: Vec<Section>,
    pub lines: Vec<String>,
}

/// Parse already-split lines into sections.
///
/// # Example
/// ```
/// use ckpe_ini::parser::parse;
///
/// let lines = vec![";a".to_string(), ";b".to_string(), "[Sec]".to_string()];
/// let parsed = parse(lines);
/// assert_eq!(parsed.sections[0].name, "Sec");
/// assert_eq!(parsed.sections[0].tooltip.as_deref(), Some("a\nb"));
/// ```
pub fn parse(lines: Vec<String>) -> ParsedIni {
    let mut sections: Vec<Section> = Vec::with_capacity(16);
    let mut dropped = 0usize;

    for (i, raw) in lines.iter().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            let name = &trimmed[1..trimmed.len() - 1];
            sections.push(Section {
                name: name.to_string(),
                tooltip: collect_comments(&lines, i),
                line_number: Some(i),
                entries: Vec::new(),
            });
            continue;
        }

        let Some((left, right)) = trimmed.split_once('=') else {
            continue;
        };

        let Some(current) = sections.last_mut() else {
            dropped += 1;
            continue;
        };

        let (value, inline_comment) = split_inline_comment(right.trim());
        let tooltip = match (collect_comments(&lines, i), inline_comment) {
            (Some(preceding), Some(inline)) => Some(format!("{preceding}\n{inline}")),
            (None, Some(inline)) => Some(inline.to_string()),
            (preceding, None) => preceding,
        };

        current.entries.push(Entry {
            name: left.trim().to_string(),
            value: value.to_string(),
            tooltip,
            line_number: Some(i),
            inline_comment: inline_comment.map(str::to_string),
        });
    }

    tracing::debug!(
        lines = lines.len(),
        sections = sections.len(),
        entries = sections.iter().map(|s| s.entries.len()).sum::<usize>(),
        dropped,
        "Parsed INI"
    );

    ParsedIni { sections, lines }
}

/// Split text into lines and parse them.
pub fn parse_str(text: &str) -> ParsedIni {
    parse(split_lines(text))
}

/// Split text into lines the way a "read all lines" call does.
///
/// `\n`, `\r\n` and a lone `\r` all end a line, a trailing terminator does not
/// produce an extra empty line, and a leading UTF-8 byte order mark is dropped.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut rest = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = Vec::new();

    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}

/// Collect the comment lines directly above `anchor`.
///
/// Walks backwards from `anchor - 1` over comment and blank lines, stopping at
/// the first line that is neither. Comment text has its `;` and surrounding
/// whitespace removed. Returns the comments in file order joined by `\n`, or
/// `None` when there are none.
pub fn collect_comments<S: AsRef<str>>(lines: &[S], anchor: usize) -> Option<String> {
    let mut comments = Vec::new();

    for line in lines[..anchor.min(lines.len())].iter().rev() {
        let trimmed = line.as_ref().trim();
        if let Some(comment) = trimmed.strip_prefix(';') {
            comments.push(comment.trim());
        } else if !trimmed.is_empty() {
            break;
        }
    }

    if comments.is_empty() {
        return None;
    }

    comments.reverse();
    Some(comments.join("\n"))
}

/// Split `value ; comment` on the first `;`.
///
/// An empty comment (`key=value;`) counts as no comment.
fn split_inline_comment(right: &str) -> (&str, Option<&str>) {
    match right.split_once(';') {
        Some((value, comment)) => {
            let comment = comment.trim();
            (value.trim(), (!comment.is_empty()).then_some(comment))
        }
        None => (right, None),
    }
}
