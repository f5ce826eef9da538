//! Settings and target file resolution for a CLI invocation

use std::path::PathBuf;

use ckpe_core::{EditorSession, EditorSettings, SettingsResolver};
use ckpe_fs::NormalizedPath;

use crate::error::Result;

/// Where the CLI reads its settings and which INI file it edits.
pub struct Context {
    pub resolver: SettingsResolver,
    pub settings: EditorSettings,
    pub file: PathBuf,
}

impl Context {
    /// Resolve settings for the current directory.
    ///
    /// The target file is `file` if given, else the configured default file,
    /// else the expected file name in the current directory.
    pub fn new(file: Option<PathBuf>, config_dir: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let working_dir = NormalizedPath::new(&cwd);
        let resolver = match config_dir {
            Some(dir) => SettingsResolver::with_global_config_dir(working_dir, dir),
            None => SettingsResolver::new(working_dir),
        };
        let settings = resolver.resolve()?;

        let file = file
            .or_else(|| settings.default_file.clone())
            .unwrap_or_else(|| cwd.join(&settings.expected_file_name));
        tracing::debug!(file = %file.display(), "Resolved target file");

        Ok(Self {
            resolver,
            settings,
            file,
        })
    }

    /// Start a session with the target file loaded.
    pub fn open(&self) -> Result<EditorSession> {
        let mut session = EditorSession::new(self.settings.clone());
        session.load(self.file.as_path())?;
        Ok(session)
    }
}
