//! Well-known file names used by the editor.

/// The only INI file name the editor will load or save.
pub const EXPECTED_FILE_NAME: &str = "CreationKitPlatformExtended.ini";

/// Standard editor paths, relative to their base directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPath {
    /// Directory under the platform config dir holding global settings
    SettingsDir,
    /// Global settings file inside `SettingsDir`
    SettingsFile,
    /// Per-directory settings override
    LocalSettingsFile,
}

impl EditorPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SettingsDir => "ckpe-config",
            Self::SettingsFile => "config.toml",
            Self::LocalSettingsFile => "ckpe-config.toml",
        }
    }
}
