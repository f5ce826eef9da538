//! Settings types

use std::path::PathBuf;

use ckpe_fs::EXPECTED_FILE_NAME;
use ckpe_ini::LineEnding;
use serde::{Deserialize, Serialize};

/// Line terminator used when saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndingSetting {
    /// The platform's own terminator
    #[default]
    Native,
    Lf,
    Crlf,
}

impl LineEndingSetting {
    pub fn resolve(self) -> LineEnding {
        match self {
            Self::Native => LineEnding::native(),
            Self::Lf => LineEnding::Lf,
            Self::Crlf => LineEnding::CrLf,
        }
    }
}

/// The effective settings for an editor session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// The only file name that may be loaded or saved
    pub expected_file_name: String,

    pub line_ending: LineEndingSetting,

    /// File opened when no path is given on the command line
    pub default_file: Option<PathBuf>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            expected_file_name: EXPECTED_FILE_NAME.to_string(),
            line_ending: LineEndingSetting::default(),
            default_file: None,
        }
    }
}

impl EditorSettings {
    /// Apply every value the layer sets.
    pub fn merge(&mut self, layer: &SettingsLayer) {
        if let Some(name) = &layer.expected_file_name {
            self.expected_file_name = name.clone();
        }
        if let Some(ending) = layer.line_ending {
            self.line_ending = ending;
        }
        if let Some(file) = &layer.default_file {
            self.default_file = Some(file.clone());
        }
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending.resolve()
    }
}

/// One settings file. Every field is optional so a file only needs to
/// mention what it overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_file_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_ending: Option<LineEndingSetting>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_file: Option<PathBuf>,
}
