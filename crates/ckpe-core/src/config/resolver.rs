//! Layered settings resolution

use std::path::PathBuf;

use ckpe_fs::{ConfigStore, EditorPath, NormalizedPath};

use super::settings::{EditorSettings, SettingsLayer};
use crate::Result;

/// Resolves [`EditorSettings`] for a working directory.
pub struct SettingsResolver {
    working_dir: NormalizedPath,

    /// Override for the global config directory (used for testing).
    /// When `None`, `dirs::config_dir()` is used.
    global_config_dir_override: Option<PathBuf>,
    store: ConfigStore,
}

impl SettingsResolver {
    /// Create a resolver using the platform config directory:
    /// - Linux: `~/.config/ckpe-config/`
    /// - macOS: `~/Library/Application Support/ckpe-config/`
    /// - Windows: `%APPDATA%\ckpe-config\`
    pub fn new(working_dir: NormalizedPath) -> Self {
        Self {
            working_dir,
            global_config_dir_override: None,
            store: ConfigStore::new(),
        }
    }

    /// Create a resolver with a custom global config directory.
    pub fn with_global_config_dir(working_dir: NormalizedPath, global_config_dir: PathBuf) -> Self {
        Self {
            working_dir,
            global_config_dir_override: Some(global_config_dir),
            store: ConfigStore::new(),
        }
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join(EditorPath::SettingsDir.as_str()))
    }

    /// Path of the global settings file, if the platform has a config directory.
    pub fn global_settings_path(&self) -> Option<NormalizedPath> {
        self.global_config_dir()
            .map(|dir| NormalizedPath::new(dir.join(EditorPath::SettingsFile.as_str())))
    }

    pub fn local_settings_path(&self) -> NormalizedPath {
        self.working_dir.join(EditorPath::LocalSettingsFile.as_str())
    }

    /// Merge defaults, global and local settings.
    ///
    /// Missing files are skipped. A file that exists but does not parse is
    /// an error.
    pub fn resolve(&self) -> Result<EditorSettings> {
        let mut settings = EditorSettings::default();

        if let Some(global_path) = self.global_settings_path() {
            if global_path.is_file() {
                tracing::debug!(%global_path, "Loading global settings (layer 2)");
                let layer: SettingsLayer = self.store.load(&global_path)?;
                settings.merge(&layer);
            } else {
                tracing::debug!(%global_path, "No global settings found (layer 2), skipping");
            }
        }

        let local_path = self.local_settings_path();
        if local_path.is_file() {
            tracing::debug!(%local_path, "Loading local settings (layer 3)");
            let mut layer: SettingsLayer = self.store.load(&local_path)?;
            // Relative paths in a local file point next to that file.
            if let Some(file) = layer.default_file.take() {
                layer.default_file = Some(if file.is_relative() {
                    self.working_dir.to_native().join(file)
                } else {
                    file
                });
            }
            settings.merge(&layer);
        }

        Ok(settings)
    }

    /// Load the global layer on its own, empty if the file is absent.
    pub fn global_layer(&self) -> Result<SettingsLayer> {
        match self.global_settings_path() {
            Some(path) if path.is_file() => Ok(self.store.load(&path)?),
            _ => Ok(SettingsLayer::default()),
        }
    }

    /// Write the global layer, creating the settings directory if needed.
    pub fn save_global(&self, layer: &SettingsLayer) -> Result<NormalizedPath> {
        let path = self
            .global_settings_path()
            .ok_or(crate::Error::NoConfigDir)?;
        tracing::debug!(%path, "Saving global settings");
        self.store.save(&path, layer)?;
        Ok(path)
    }
}
