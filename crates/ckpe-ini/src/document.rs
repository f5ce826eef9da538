//! A loaded INI file: original lines plus the editable section model.

use crate::diff::LineDiff;
use crate::error::{Error, Result};
use crate::model::{self, Entry, Section};
use crate::parser::{self, ParsedIni};
use crate::widget::{self, WidgetKind};
use crate::writer::{self, LineEnding};

/// Original file lines together with the section model parsed from them.
///
/// Edits change the model only; the original lines are kept untouched so
/// rendering can patch them by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniDocument {
    lines: Vec<String>,
    sections: Vec<Section>,
    /// Model as parsed, for change tracking.
    baseline: Vec<Section>,
}

impl IniDocument {
    /// Parse file text.
    pub fn parse(text: &str) -> Self {
        parser::parse_str(text).into()
    }

    /// Parse lines that have already been split.
    pub fn from_lines(lines: Vec<String>) -> Self {
        parser::parse(lines).into()
    }

    /// The lines as they were loaded.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// First section with the given name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// First entry named `key` in the first section named `section`.
    pub fn entry(&self, section: &str, key: &str) -> Option<&Entry> {
        self.section(section)?.entry(key)
    }

    /// Control to use for an entry, based on its current value.
    pub fn widget(&self, section: &str, key: &str) -> Result<WidgetKind> {
        let entry = self.require_entry(section, key)?;
        Ok(widget::classify(section, key, &entry.value))
    }

    /// Replace the value of an existing entry. The value is stored as given.
    ///
    /// # Errors
    /// Returns [`Error::SectionNotFound`] or [`Error::EntryNotFound`] when the
    /// target does not exist.
    pub fn set_value(&mut self, section: &str, key: &str, value: impl Into<String>) -> Result<()> {
        let entry = self
            .section_mut(section)?
            .entry_mut(key)
            .ok_or_else(|| Error::EntryNotFound {
                section: section.to_string(),
                key: key.to_string(),
            })?;
        entry.value = value.into();
        Ok(())
    }

    /// Add an entry with no file origin. It is written as a new last line of
    /// the file, so only the last section can receive it.
    ///
    /// # Errors
    /// Returns [`Error::InvalidKey`] for a key that would not read back,
    /// [`Error::SectionNotFound`] for an unknown section and
    /// [`Error::NotLastSection`] for any section but the last.
    pub fn add_entry(&mut self, section: &str, key: &str, value: impl Into<String>) -> Result<()> {
        model::validate_key(key)?;

        match self.sections.last_mut() {
            Some(last) if last.name == section => {
                last.entries.push(Entry::new(key, value));
                Ok(())
            }
            Some(last) => {
                let last = last.name.clone();
                Err(if self.section(section).is_some() {
                    Error::NotLastSection {
                        section: section.to_string(),
                        last,
                    }
                } else {
                    Error::SectionNotFound {
                        section: section.to_string(),
                    }
                })
            }
            None => Err(Error::SectionNotFound {
                section: section.to_string(),
            }),
        }
    }

    /// Render the model over the original lines.
    pub fn render(&self) -> Vec<String> {
        writer::render(&self.lines, &self.sections)
    }

    /// Render and join into file text.
    pub fn to_text(&self, ending: LineEnding) -> String {
        writer::join_lines(&self.render(), ending)
    }

    /// Whether the model has been edited since it was loaded or committed.
    pub fn is_modified(&self) -> bool {
        self.sections != self.baseline
    }

    /// Changes a save would make, line by line.
    pub fn diff(&self) -> LineDiff {
        LineDiff::compute(&self.lines, &self.render())
    }

    /// Adopt `written` as the new original lines after a successful save.
    ///
    /// Re-parsing gives appended entries a concrete line number, so a second
    /// save does not append them again.
    pub fn commit(&mut self, written: Vec<String>) {
        *self = Self::from_lines(written);
    }

    fn section_mut(&mut self, name: &str) -> Result<&mut Section> {
        self.sections
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::SectionNotFound {
                section: name.to_string(),
            })
    }

    fn require_entry(&self, section: &str, key: &str) -> Result<&Entry> {
        let found = self.section(section).ok_or_else(|| Error::SectionNotFound {
            section: section.to_string(),
        })?;
        found.entry(key).ok_or_else(|| Error::EntryNotFound {
            section: section.to_string(),
            key: key.to_string(),
        })
    }
}

impl From<ParsedIni> for IniDocument {
    fn from(parsed: ParsedIni) -> Self {
        Self {
            lines: parsed.lines,
            baseline: parsed.sections.clone(),
            sections: parsed.sections,
        }
    }
}
