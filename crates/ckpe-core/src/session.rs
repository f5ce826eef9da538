//! One editing session over the target INI file

use ckpe_fs::{NormalizedPath, Operation, io, verify_file_name};
use ckpe_ini::{IniDocument, LineDiff, WidgetKind, writer};

use crate::config::EditorSettings;
use crate::latch::SaveLatch;
use crate::{Error, Result};

/// What a save call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    /// The file was written
    Saved { path: NormalizedPath, lines: usize },
    /// Another save held the latch; nothing was written
    AlreadyInProgress,
}

/// The loaded file, its model and the save latch.
///
/// A failed load or save leaves the session as it was.
#[derive(Debug)]
pub struct EditorSession {
    settings: EditorSettings,
    current: Option<NormalizedPath>,
    document: Option<IniDocument>,
    latch: SaveLatch,
}

impl EditorSession {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            settings,
            current: None,
            document: None,
            latch: SaveLatch::new(),
        }
    }

    /// Load a file, replacing whatever was loaded before.
    ///
    /// # Errors
    /// Rejects any file not named as the settings expect, and propagates read
    /// failures. The previous document is kept in both cases.
    pub fn load(&mut self, path: impl Into<NormalizedPath>) -> Result<&IniDocument> {
        let path = path.into();
        verify_file_name(&path, &self.settings.expected_file_name, Operation::Load)?;

        let text = io::read_text(&path)?;
        let document = IniDocument::parse(&text);
        tracing::debug!(
            %path,
            sections = document.sections().len(),
            "Loaded configuration"
        );

        self.current = Some(path);
        Ok(&*self.document.insert(document))
    }

    pub fn current_file(&self) -> Option<&NormalizedPath> {
        self.current.as_ref()
    }

    pub fn document(&self) -> Option<&IniDocument> {
        self.document.as_ref()
    }

    /// Whether there are edits that have not been saved.
    pub fn is_modified(&self) -> bool {
        self.document.as_ref().is_some_and(IniDocument::is_modified)
    }

    pub fn widget(&self, section: &str, key: &str) -> Result<WidgetKind> {
        Ok(self.loaded()?.widget(section, key)?)
    }

    /// Validate `input` for the entry's control and store it.
    ///
    /// Returns the value as stored, e.g. a charset code for a charset name.
    pub fn set_value(&mut self, section: &str, key: &str, input: &str) -> Result<String> {
        let document = self.loaded_mut()?;
        let value = document.widget(section, key)?.normalize(key, input)?;
        document.set_value(section, key, value.clone())?;
        tracing::debug!(section, key, %value, "Set value");
        Ok(value)
    }

    /// Add a new entry to the last section. It is written at the end of the
    /// file on save.
    ///
    /// # Errors
    /// Rejects keys that would not read back as written, values the entry's
    /// control would not accept, and any section other than the last.
    pub fn add_entry(&mut self, section: &str, key: &str, input: &str) -> Result<String> {
        let document = self.loaded_mut()?;
        ckpe_ini::validate_key(key)?;
        let value = ckpe_ini::classify(section, key, input).normalize(key, input)?;
        document.add_entry(section, key, value.clone())?;
        tracing::debug!(section, key, %value, "Added entry");
        Ok(value)
    }

    /// Line changes the next save would write.
    pub fn preview(&self) -> Result<LineDiff> {
        Ok(self.loaded()?.diff())
    }

    /// Save to the current file.
    pub fn save(&mut self) -> Result<SaveStatus> {
        let path = self.current.clone().ok_or(Error::NoFileLoaded)?;
        self.write_to(path)
    }

    /// Save to `path` and make it the current file.
    pub fn save_as(&mut self, path: impl Into<NormalizedPath>) -> Result<SaveStatus> {
        let path = path.into();
        verify_file_name(&path, &self.settings.expected_file_name, Operation::Save)?;
        self.write_to(path)
    }

    /// A handle on the latch guarding saves.
    pub fn save_latch(&self) -> SaveLatch {
        self.latch.clone()
    }

    fn write_to(&mut self, path: NormalizedPath) -> Result<SaveStatus> {
        let Some(_guard) = self.latch.try_acquire() else {
            tracing::debug!(%path, "Save already in progress, ignoring request");
            return Ok(SaveStatus::AlreadyInProgress);
        };

        let ending = self.settings.line_ending();
        let document = self.document.as_mut().ok_or(Error::NoFileLoaded)?;
        let lines = document.render();
        io::write_text(&path, &writer::join_lines(&lines, ending))?;

        let count = lines.len();
        document.commit(lines);
        tracing::debug!(%path, lines = count, "Saved configuration");

        self.current = Some(path.clone());
        Ok(SaveStatus::Saved { path, lines: count })
    }

    fn loaded(&self) -> Result<&IniDocument> {
        self.document.as_ref().ok_or(Error::NoFileLoaded)
    }

    fn loaded_mut(&mut self) -> Result<&mut IniDocument> {
        self.document.as_mut().ok_or(Error::NoFileLoaded)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}
