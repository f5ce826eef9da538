//! Editor settings and their resolution
//!
//! Settings come from up to three layers, later ones overriding earlier:
//!
//! 1. Built-in defaults
//! 2. Global settings (`<config_dir>/ckpe-config/config.toml`)
//! 3. Local overrides (`ckpe-config.toml` in the working directory)

mod resolver;
mod settings;

pub use resolver::SettingsResolver;
pub use settings::{EditorSettings, LineEndingSetting, SettingsLayer};
