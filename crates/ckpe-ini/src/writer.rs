//! Line-patching INI writer.
//!
//! The writer never regenerates a file from the model. It starts from the
//! original lines and overwrites only the lines that entries were parsed from,
//! so comments, headers, blank lines and anything unparsed stay byte-for-byte
//! where they were. Entries without a line number are appended at the end.

use crate::model::{Entry, Section};

/// Separator placed between a value and its re-attached inline comment.
const INLINE_COMMENT_SEPARATOR: &str = "\t\t\t; ";

/// Line terminator used when joining rendered lines into file text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// The platform convention: CRLF on Windows, LF elsewhere.
    pub fn native() -> Self {
        if cfg!(windows) { Self::CrLf } else { Self::Lf }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::native()
    }
}

/// Compose the `name=value` text for an entry, re-attaching its inline comment.
///
/// # Example
/// ```
/// use ckpe_ini::{Entry, writer::compose_line};
///
/// let mut entry = Entry::new("nCharset", "1");
/// assert_eq!(compose_line(&entry), "nCharset=1");
///
/// entry.inline_comment = Some("font charset".to_string());
/// assert_eq!(compose_line(&entry), "nCharset=1\t\t\t; font charset");
/// ```
pub fn compose_line(entry: &Entry) -> String {
    match &entry.inline_comment {
        Some(comment) => format!(
            "{}={}{}{}",
            entry.name, entry.value, INLINE_COMMENT_SEPARATOR, comment
        ),
        None => format!("{}={}", entry.name, entry.value),
    }
}

/// Produce the new line array for `sections` on top of `original`.
///
/// Entries are visited in section-then-entry order. A positioned entry
/// replaces its original line, keeping that line's indentation as spaces.
/// An unpositioned entry, or one whose line number is past the end of
/// `original`, is appended.
pub fn render<S: AsRef<str>>(original: &[S], sections: &[Section]) -> Vec<String> {
    let mut lines: Vec<String> = original.iter().map(|l| l.as_ref().to_string()).collect();

    for entry in sections.iter().flat_map(|s| s.entries.iter()) {
        let composed = compose_line(entry);

        match entry.line_number {
            Some(index) if index < original.len() => {
                let indent = leading_whitespace(original[index].as_ref());
                lines[index] = format!("{}{}", " ".repeat(indent), composed);
            }
            Some(index) => {
                tracing::warn!(
                    entry = %entry.name,
                    index,
                    lines = original.len(),
                    "Entry line number is out of range; appending instead"
                );
                lines.push(composed);
            }
            None => lines.push(composed),
        }
    }

    lines
}

/// Join lines into file text, terminating every line (including the last).
pub fn join_lines<S: AsRef<str>>(lines: &[S], ending: LineEnding) -> String {
    let terminator = ending.as_str();
    let capacity = lines.iter().map(|l| l.as_ref().len() + terminator.len()).sum();
    let mut text = String::with_capacity(capacity);
    for line in lines {
        text.push_str(line.as_ref());
        text.push_str(terminator);
    }
    text
}

/// Number of leading whitespace characters.
fn leading_whitespace(line: &str) -> usize {
    line.chars().count() - line.trim_start().chars().count()
}
